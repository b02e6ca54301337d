use std::collections::BTreeSet;

use crate::foundation::core::{DEFAULT_DEVICE_WIDTHS, LayoutMode};

/// Raw breakpoint candidates for `layout`, before deduplication.
///
/// Fluid layouts use `candidates` (or the default device table) as-is. `fixed` yields the 1x/2x
/// pair for `width`. `constrained` adds every candidate below `2 * width` to that pair.
pub fn select_breakpoints(
    width: Option<u32>,
    candidates: Option<&[u32]>,
    layout: LayoutMode,
) -> Vec<u32> {
    let candidates = candidates.unwrap_or(DEFAULT_DEVICE_WIDTHS);
    match layout {
        LayoutMode::FullWidth
        | LayoutMode::Cover
        | LayoutMode::Responsive
        | LayoutMode::Contained => candidates.to_vec(),
        LayoutMode::Fixed => match width {
            Some(w) => vec![w, w.saturating_mul(2)],
            None => Vec::new(),
        },
        LayoutMode::Constrained => match width {
            Some(w) => {
                let double = w.saturating_mul(2);
                let mut out = vec![w, double];
                out.extend(candidates.iter().copied().filter(|&c| c < double));
                out
            }
            None => Vec::new(),
        },
    }
}

/// Deduplicate, drop zero widths, and sort ascending.
pub fn finalize_breakpoints(widths: impl IntoIterator<Item = u32>) -> Vec<u32> {
    widths
        .into_iter()
        .filter(|&w| w > 0)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// [`select_breakpoints`] followed by [`finalize_breakpoints`].
pub fn resolve_breakpoints(
    width: Option<u32>,
    candidates: Option<&[u32]>,
    layout: LayoutMode,
) -> Vec<u32> {
    let out = finalize_breakpoints(select_breakpoints(width, candidates, layout));
    tracing::debug!(layout = %layout, count = out.len(), "selected breakpoints");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/breakpoints.rs"]
mod tests;
