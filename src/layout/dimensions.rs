use std::fmt;

use crate::foundation::core::{LayoutMode, NumberLike};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Raised when a layout needs sizing information that was not supplied.
pub struct SizingDiagnostic {
    /// Layout that required the dimensions.
    pub layout: LayoutMode,
}

impl fmt::Display for SizingDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "layout '{}' needs either an aspect ratio or both width and height",
            self.layout
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Width, height and aspect ratio after reconciliation.
pub struct NormalizedDimensions {
    /// Final width in pixels.
    pub width: Option<u32>,
    /// Final height in pixels.
    pub height: Option<u32>,
    /// Final width/height ratio.
    pub aspect_ratio: Option<f64>,
    /// Set when the layout lacked the sizing information it needs.
    pub diagnostic: Option<SizingDiagnostic>,
}

/// Parse `"16/9"`, `"16:9"` or a plain float such as `"1.5"`.
///
/// Returns `None` for anything unparseable, zero, or non-finite.
pub fn parse_aspect_ratio_str(input: &str) -> Option<f64> {
    let s = input.trim();
    let ratio = match s.split_once(['/', ':']) {
        Some((num, den)) => {
            let num = num.trim().parse::<f64>().ok()?;
            let den = den.trim().parse::<f64>().ok()?;
            num / den
        }
        None => s.parse::<f64>().ok()?,
    };
    (ratio.is_finite() && ratio > 0.0).then_some(ratio)
}

/// Aspect ratio from a number or a ratio string.
pub fn parse_aspect_ratio(input: &NumberLike) -> Option<f64> {
    match input {
        NumberLike::Number(n) => (n.is_finite() && *n > 0.0).then_some(*n),
        NumberLike::Text(s) => parse_aspect_ratio_str(s),
    }
}

fn to_px(v: f64) -> Option<u32> {
    let r = v.round();
    (r >= 1.0 && r <= f64::from(u32::MAX)).then_some(r as u32)
}

fn missing_sizing(layout: LayoutMode) -> Option<SizingDiagnostic> {
    let diagnostic = (layout != LayoutMode::FullWidth).then_some(SizingDiagnostic { layout });
    if let Some(d) = &diagnostic {
        tracing::warn!(layout = %layout, "{d}");
    }
    diagnostic
}

/// Reconcile declared dimensions and aspect ratio for `layout`.
///
/// Zero, negative and non-finite inputs count as absent. Explicit width and height always win
/// over a declared ratio. A single dimension plus a ratio derives the other one. Anything less
/// is tolerated: what was given is kept, the rest stays `None`, and every layout except
/// `fullWidth` gets a [`SizingDiagnostic`].
pub fn normalize_dimensions(
    width: Option<f64>,
    height: Option<f64>,
    aspect_ratio: Option<f64>,
    layout: LayoutMode,
) -> NormalizedDimensions {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    let width = width.filter(|w| positive(*w));
    let height = height.filter(|h| positive(*h));
    let aspect_ratio = aspect_ratio.filter(|r| positive(*r));
    match (width, height, aspect_ratio) {
        (Some(w), Some(h), _) => NormalizedDimensions {
            width: to_px(w),
            height: to_px(h),
            aspect_ratio: Some(w / h).filter(|r| positive(*r)),
            diagnostic: None,
        },
        (Some(w), None, Some(r)) => NormalizedDimensions {
            width: to_px(w),
            height: to_px(w / r),
            aspect_ratio: Some(r),
            diagnostic: None,
        },
        (None, Some(h), Some(r)) => NormalizedDimensions {
            width: to_px(h * r),
            height: to_px(h),
            aspect_ratio: Some(r),
            diagnostic: None,
        },
        (None, None, Some(r)) => NormalizedDimensions {
            aspect_ratio: Some(r),
            diagnostic: missing_sizing(layout),
            ..Default::default()
        },
        (w, h, None) => NormalizedDimensions {
            width: w.and_then(to_px),
            height: h.and_then(to_px),
            aspect_ratio: None,
            diagnostic: missing_sizing(layout),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/dimensions.rs"]
mod tests;
