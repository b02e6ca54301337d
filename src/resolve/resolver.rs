use crate::{
    foundation::{
        core::{DEFAULT_DEVICE_WIDTHS, ImageSource, LayoutMode},
        error::{PixelsetError, PixelsetResult},
    },
    layout::{
        breakpoints::resolve_breakpoints,
        dimensions::{normalize_dimensions, parse_aspect_ratio},
        sizes::sizes_attribute,
    },
    resolve::hints::{PresentationHints, RESERVED_ATTRIBUTES, ResolvedAttributes, ResolvedImage},
    style::css::{DEFAULT_OBJECT_FIT, DEFAULT_OBJECT_POSITION, StyleParams, generate_style},
    transform::breakpoint::{BreakpointTransform, srcset_string},
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Defaults applied when hints leave a value open.
pub struct ResolverOpts {
    /// Candidate widths for fluid and constrained layouts.
    pub device_widths: Vec<u32>,
    /// Default `object-fit`.
    pub object_fit: String,
    /// Default `object-position`.
    pub object_position: String,
}

impl Default for ResolverOpts {
    fn default() -> Self {
        Self {
            device_widths: DEFAULT_DEVICE_WIDTHS.to_vec(),
            object_fit: DEFAULT_OBJECT_FIT.to_string(),
            object_position: DEFAULT_OBJECT_POSITION.to_string(),
        }
    }
}

impl ResolverOpts {
    /// Reject empty or zero device widths.
    pub fn validate(&self) -> PixelsetResult<()> {
        if self.device_widths.is_empty() {
            return Err(PixelsetError::validation("device_widths must be non-empty"));
        }
        if self.device_widths.contains(&0) {
            return Err(PixelsetError::validation("device_widths must be > 0"));
        }
        Ok(())
    }
}

/// Computes `src`, `srcset`, `sizes`, dimensions and inline style for an image.
///
/// Stateless apart from its defaults; concurrent calls are independent.
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    opts: ResolverOpts,
}

impl Resolver {
    /// Build a resolver from validated defaults.
    pub fn new(opts: ResolverOpts) -> PixelsetResult<Self> {
        opts.validate()?;
        Ok(Self { opts })
    }

    /// Defaults in use.
    pub fn opts(&self) -> &ResolverOpts {
        &self.opts
    }

    /// Resolve attributes for `image` under `layout`.
    ///
    /// All breakpoints go to `transform` in one call; its failure fails the resolution. Without
    /// a transform no `srcset` is produced.
    #[tracing::instrument(skip_all, fields(src = %image.src(), layout = %layout))]
    pub async fn resolve(
        &self,
        image: &ImageSource,
        layout: LayoutMode,
        hints: &PresentationHints,
        transform: Option<&dyn BreakpointTransform>,
    ) -> PixelsetResult<ResolvedImage> {
        let mut width = hints.width.as_ref().and_then(|w| w.coerce());
        let mut height = hints.height.as_ref().and_then(|h| h.coerce());
        let mut aspect_ratio = hints.aspect_ratio.as_ref().and_then(parse_aspect_ratio);

        if let Some((iw, ih)) = image.intrinsic_size() {
            let iw = (iw > 0).then(|| f64::from(iw));
            let ih = (ih > 0).then(|| f64::from(ih));
            match (width, height) {
                (None, None) => {
                    width = iw;
                    height = ih;
                }
                (Some(_), None) | (None, Some(_)) if aspect_ratio.is_none() => {
                    aspect_ratio = iw.zip(ih).map(|(w, h)| w / h);
                }
                _ => {}
            }
        }

        let dims = normalize_dimensions(width, height, aspect_ratio, layout);

        let candidates = hints
            .widths
            .as_deref()
            .unwrap_or(self.opts.device_widths.as_slice());

        let sizes = hints
            .sizes
            .clone()
            .or_else(|| sizes_attribute(dims.width, Some(layout)));

        let breakpoints = resolve_breakpoints(dims.width, Some(candidates), layout);

        let resolved = match transform {
            Some(t) if !breakpoints.is_empty() => {
                t.transform(image, &breakpoints, dims.width, dims.height)
                    .await?
            }
            _ => Vec::new(),
        };
        let srcset = srcset_string(&resolved);

        let computed_style = generate_style(&StyleParams {
            width: dims.width,
            height: dims.height,
            aspect_ratio: dims.aspect_ratio,
            layout: Some(layout),
            object_fit: Some(hints.object_fit.as_deref().unwrap_or(&self.opts.object_fit)),
            object_position: Some(
                hints
                    .object_position
                    .as_deref()
                    .unwrap_or(&self.opts.object_position),
            ),
            background: hints.background.as_deref(),
        });
        let style = match hints.style.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => format!("{computed_style} {raw}"),
            _ => computed_style,
        };

        let mut passthrough = hints.attributes.clone();
        passthrough.retain(|key, _| {
            let reserved = RESERVED_ATTRIBUTES.contains(&key.as_str());
            if reserved {
                tracing::warn!(attribute = %key, "dropping reserved pass-through attribute");
            }
            !reserved
        });

        Ok(ResolvedImage {
            src: image.src().to_string(),
            attributes: ResolvedAttributes {
                width: dims.width,
                height: dims.height,
                srcset,
                sizes,
                style,
                passthrough,
            },
            diagnostic: dims.diagnostic,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/resolver.rs"]
mod tests;
