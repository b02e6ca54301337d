use std::fmt;

/// Common device pixel widths used when no candidate breakpoints are supplied.
pub const DEFAULT_DEVICE_WIDTHS: &[u32] = &[
    640, 750, 828, 960, 1080, 1280, 1668, 1920, 2048, 2560, 3200, 3840, 4480, 5120, 6016,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Sizing and styling policy controlling how an image fills its container.
pub enum LayoutMode {
    /// Exact pixel size, 1x/2x density variants.
    Fixed,
    /// Shrinks with the container, never grows past its declared width.
    Constrained,
    /// Spans the full viewport width.
    FullWidth,
    /// Fills its container, cropping as needed.
    Cover,
    /// Fluid width, height follows the aspect ratio.
    Responsive,
    /// Fits inside its container without cropping.
    Contained,
}

impl LayoutMode {
    /// Stable camelCase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Fixed => "fixed",
            LayoutMode::Constrained => "constrained",
            LayoutMode::FullWidth => "fullWidth",
            LayoutMode::Cover => "cover",
            LayoutMode::Responsive => "responsive",
            LayoutMode::Contained => "contained",
        }
    }

    /// Parse a layout name (camelCase, kebab-case, or snake_case).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "fixed" => Some(LayoutMode::Fixed),
            "constrained" => Some(LayoutMode::Constrained),
            "fullwidth" => Some(LayoutMode::FullWidth),
            "cover" => Some(LayoutMode::Cover),
            "responsive" => Some(LayoutMode::Responsive),
            "contained" => Some(LayoutMode::Contained),
            _ => None,
        }
    }

    /// Layouts whose breakpoints come from the device table rather than the declared width.
    pub fn is_fluid(self) -> bool {
        matches!(
            self,
            LayoutMode::FullWidth
                | LayoutMode::Cover
                | LayoutMode::Responsive
                | LayoutMode::Contained
        )
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Source image: a plain URL, or a descriptor carrying intrinsic dimensions.
pub enum ImageSource {
    /// Opaque URL or local asset reference.
    Url(String),
    /// Image with known intrinsic size.
    Structured {
        /// Resolved URL of the original image.
        src: String,
        /// Intrinsic width in pixels.
        width: u32,
        /// Intrinsic height in pixels.
        height: u32,
    },
}

impl ImageSource {
    /// The URL this source resolves to.
    pub fn src(&self) -> &str {
        match self {
            ImageSource::Url(s) => s,
            ImageSource::Structured { src, .. } => src,
        }
    }

    /// Intrinsic `(width, height)` if the source carries them.
    pub fn intrinsic_size(&self) -> Option<(u32, u32)> {
        match self {
            ImageSource::Url(_) => None,
            ImageSource::Structured { width, height, .. } => Some((*width, *height)),
        }
    }

    /// Whether the source is an absolute `http:`/`https:` URL.
    pub fn is_remote(&self) -> bool {
        let s = self.src();
        s.starts_with("http://") || s.starts_with("https://")
    }
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        ImageSource::Url(value.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// A number that may arrive as a JSON number or a numeric string.
pub enum NumberLike {
    /// Numeric value.
    Number(f64),
    /// String to be parsed.
    Text(String),
}

impl NumberLike {
    /// Coerce to a positive finite number; zero, negative, NaN and garbage become `None`.
    pub fn coerce(&self) -> Option<f64> {
        let v = match self {
            NumberLike::Number(n) => *n,
            NumberLike::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (v.is_finite() && v > 0.0).then_some(v)
    }
}

impl From<f64> for NumberLike {
    fn from(value: f64) -> Self {
        NumberLike::Number(value)
    }
}

impl From<u32> for NumberLike {
    fn from(value: u32) -> Self {
        NumberLike::Number(f64::from(value))
    }
}

impl From<&str> for NumberLike {
    fn from(value: &str) -> Self {
        NumberLike::Text(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
