use std::collections::BTreeMap;

use crate::{foundation::core::NumberLike, layout::dimensions::SizingDiagnostic};

/// Attribute names the resolver computes itself.
pub const RESERVED_ATTRIBUTES: &[&str] = &["width", "height", "srcset", "sizes", "style"];

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Caller-declared sizing and presentation hints. Every field is optional.
pub struct PresentationHints {
    /// Declared width; numeric strings are accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<NumberLike>,
    /// Declared height; numeric strings are accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<NumberLike>,
    /// Width/height ratio as a number or a `"16/9"` / `"16:9"` string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<NumberLike>,
    /// Candidate breakpoints; defaults to the configured device widths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widths: Option<Vec<u32>>,
    /// Explicit `sizes` attribute, replacing the computed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    /// Raw inline style appended after the computed declarations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// `object-fit` override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<String>,
    /// `object-position` override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_position: Option<String>,
    /// Placeholder color or image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Extra HTML attributes copied to the output.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Final `<img>` attributes.
pub struct ResolvedAttributes {
    /// Rendered width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Rendered height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Candidate list; absent when no breakpoint was produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
    /// `sizes` attribute, if the layout defines one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    /// Inline style.
    pub style: String,
    /// Caller-supplied attributes, minus [`RESERVED_ATTRIBUTES`].
    #[serde(flatten)]
    pub passthrough: BTreeMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Resolver output: the image URL plus its attributes.
pub struct ResolvedImage {
    /// URL to use as `src`.
    pub src: String,
    /// Computed and passed-through attributes.
    pub attributes: ResolvedAttributes,
    /// Sizing problem noticed during normalization, if any.
    #[serde(skip)]
    pub diagnostic: Option<SizingDiagnostic>,
}
