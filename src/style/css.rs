use crate::foundation::core::LayoutMode;

/// Default `object-fit` when the caller does not supply one.
pub const DEFAULT_OBJECT_FIT: &str = "cover";
/// Default `object-position` when the caller does not supply one.
pub const DEFAULT_OBJECT_POSITION: &str = "center";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Insertion-ordered CSS declarations.
///
/// Re-declaring a property keeps its original position and replaces the value, so the
/// serialized string never repeats a property.
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `prop` to `value`, overwriting in place if already declared.
    pub fn set(&mut self, prop: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| p == prop) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((prop.to_string(), value)),
        }
    }

    /// Set `prop` only when `value` is known; unknown values are never emitted.
    pub fn set_opt<V: Into<String>>(&mut self, prop: &str, value: Option<V>) {
        if let Some(v) = value {
            self.set(prop, v);
        }
    }

    /// Current value of `prop`.
    pub fn get(&self, prop: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == prop)
            .map(|(_, v)| v.as_str())
    }

    /// Number of distinct properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no property has been declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `prop: value;` pairs joined by single spaces, in declaration order.
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Inputs to [`generate_style`].
pub struct StyleParams<'a> {
    /// Normalized width in pixels.
    pub width: Option<u32>,
    /// Normalized height in pixels.
    pub height: Option<u32>,
    /// Normalized width/height ratio.
    pub aspect_ratio: Option<f64>,
    /// Layout policy; `None` emits only the base declarations.
    pub layout: Option<LayoutMode>,
    /// `object-fit`, defaults to [`DEFAULT_OBJECT_FIT`].
    pub object_fit: Option<&'a str>,
    /// `object-position`, defaults to [`DEFAULT_OBJECT_POSITION`].
    pub object_position: Option<&'a str>,
    /// Placeholder color or image URL.
    pub background: Option<&'a str>,
}

fn is_url_like(s: &str) -> bool {
    s.starts_with("http:") || s.starts_with("https:") || s.starts_with("data:")
}

fn px(v: Option<u32>) -> Option<String> {
    v.map(|v| format!("{v}px"))
}

/// Build the declaration map for an image.
pub fn style_map(params: &StyleParams<'_>) -> StyleMap {
    let mut style = StyleMap::new();
    style.set("object-fit", params.object_fit.unwrap_or(DEFAULT_OBJECT_FIT));
    style.set(
        "object-position",
        params.object_position.unwrap_or(DEFAULT_OBJECT_POSITION),
    );

    match params.background {
        Some(bg) if is_url_like(bg) => {
            style.set("background-image", format!("url({bg})"));
            style.set("background-size", "cover");
            style.set("background-repeat", "no-repeat");
        }
        Some(bg) => style.set("background", bg),
        None => {}
    }

    let aspect_ratio = params.aspect_ratio.map(|r| r.to_string());
    match params.layout {
        Some(LayoutMode::Fixed) => {
            style.set_opt("width", px(params.width));
            style.set_opt("height", px(params.height));
            style.set("object-position", "top left");
        }
        Some(LayoutMode::Constrained) => {
            style.set_opt("max-width", px(params.width));
            style.set_opt("max-height", px(params.height));
            style.set_opt("aspect-ratio", aspect_ratio);
            style.set("width", "100%");
        }
        Some(LayoutMode::FullWidth) => {
            style.set("width", "100%");
            style.set_opt("aspect-ratio", aspect_ratio);
            style.set_opt("height", px(params.height));
        }
        Some(LayoutMode::Responsive) => {
            style.set("width", "100%");
            style.set("height", "auto");
            style.set_opt("aspect-ratio", aspect_ratio);
        }
        Some(LayoutMode::Contained) => {
            style.set("max-width", "100%");
            style.set("max-height", "100%");
            style.set("object-fit", "contain");
            style.set_opt("aspect-ratio", aspect_ratio);
        }
        Some(LayoutMode::Cover) => {
            style.set("max-width", "100%");
            style.set("max-height", "100%");
        }
        None => {}
    }
    style
}

/// Serialized inline style for an image.
pub fn generate_style(params: &StyleParams<'_>) -> String {
    style_map(params).to_css()
}

#[cfg(test)]
#[path = "../../tests/unit/style/css.rs"]
mod tests;
