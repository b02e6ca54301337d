use async_trait::async_trait;

use crate::foundation::{core::ImageSource, error::PixelsetResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One `srcset` candidate.
pub struct ResolvedBreakpoint {
    /// URL of the image rendered at `width`.
    pub url: String,
    /// Pixel width of the candidate.
    pub width: u32,
}

/// Maps an image and a list of widths to URLs at each width.
///
/// Implementations return one entry per width in input order, or an empty list when the image
/// cannot be transformed at all. A rejected width fails the whole call.
#[async_trait]
pub trait BreakpointTransform: Send + Sync {
    /// Resolve `widths` for `image`. `width`/`height` are the requested display dimensions.
    async fn transform(
        &self,
        image: &ImageSource,
        widths: &[u32],
        width: Option<u32>,
        height: Option<u32>,
    ) -> PixelsetResult<Vec<ResolvedBreakpoint>>;
}

/// Join candidates into a `srcset` value; `None` when there are none.
pub fn srcset_string(breakpoints: &[ResolvedBreakpoint]) -> Option<String> {
    if breakpoints.is_empty() {
        return None;
    }
    Some(
        breakpoints
            .iter()
            .map(|b| format!("{} {}w", b.url, b.width))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Height matching `target_width` at the requested `width`/`height` ratio.
pub(crate) fn scaled_height(target_width: u32, width: Option<u32>, height: Option<u32>) -> Option<u32> {
    match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => {
            let scaled = (f64::from(target_width) * f64::from(h) / f64::from(w)).round();
            Some((scaled as u32).max(1))
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/breakpoint.rs"]
mod tests;
