use crate::foundation::core::LayoutMode;

/// `sizes` attribute for a declared width and layout, if the layout defines one.
pub fn sizes_attribute(width: Option<u32>, layout: Option<LayoutMode>) -> Option<String> {
    let (w, layout) = (width?, layout?);
    match layout {
        LayoutMode::Constrained => Some(format!("(min-width: {w}px) {w}px, 100vw")),
        LayoutMode::Fixed => Some(format!("{w}px")),
        LayoutMode::FullWidth => Some("100vw".to_string()),
        LayoutMode::Cover | LayoutMode::Responsive | LayoutMode::Contained => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sizes.rs"]
mod tests;
