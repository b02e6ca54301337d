//! Pixelset computes responsive `<img>` attributes and answers blog content queries for static
//! sites.
//!
//! # Image pipeline overview
//!
//! 1. **Normalize**: declared width/height/aspect ratio -> consistent dimensions
//! 2. **Select**: layout + width + candidates -> ascending, unique breakpoints
//! 3. **Transform**: breakpoints -> `(url, width)` pairs via an injected [`BreakpointTransform`]
//! 4. **Emit**: `src`, `srcset`, `sizes`, `width`, `height` and an inline `style`
//!
//! Two transforms ship with the crate: [`LocalPipelineTransform`] writes resized variants of
//! files under a source root, and [`RemoteUrlTransform`] rewrites URLs of known image CDNs.
//!
//! Sizing problems never fail a resolution. They are logged through `tracing` and reported on
//! [`ResolvedImage::diagnostic`]; only transform failures surface as errors.
//!
//! # Content
//!
//! [`PostIndex`] lists posts, filters them by category or tag, paginates, and ranks related
//! posts by shared categories and tags.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod content;
mod foundation;
mod layout;
mod resolve;
mod style;
mod transform;

pub use config::settings::{PixelsetConfig, RemoteOpts};
pub use content::index::{
    CATEGORY_WEIGHT, Page, PostIndex, RelatedPost, TAG_WEIGHT, paginate,
};
pub use content::post::Post;
pub use foundation::core::{DEFAULT_DEVICE_WIDTHS, ImageSource, LayoutMode, NumberLike};
pub use foundation::error::{PixelsetError, PixelsetResult};
pub use layout::breakpoints::{finalize_breakpoints, resolve_breakpoints, select_breakpoints};
pub use layout::dimensions::{
    NormalizedDimensions, SizingDiagnostic, normalize_dimensions, parse_aspect_ratio,
    parse_aspect_ratio_str,
};
pub use layout::sizes::sizes_attribute;
pub use resolve::hints::{
    PresentationHints, RESERVED_ATTRIBUTES, ResolvedAttributes, ResolvedImage,
};
pub use resolve::resolver::{Resolver, ResolverOpts};
pub use style::css::{
    DEFAULT_OBJECT_FIT, DEFAULT_OBJECT_POSITION, StyleMap, StyleParams, generate_style, style_map,
};
pub use transform::breakpoint::{BreakpointTransform, ResolvedBreakpoint, srcset_string};
pub use transform::local::{
    LocalPipelineOpts, LocalPipelineTransform, normalize_asset_path, variant_file_name,
};
pub use transform::remote::{CdnProvider, RemoteUrlTransform, transform_remote_url};
