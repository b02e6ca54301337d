use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use async_trait::async_trait;
use image::{DynamicImage, imageops::FilterType};

use crate::{
    foundation::{
        core::ImageSource,
        error::{PixelsetError, PixelsetResult},
    },
    transform::breakpoint::{BreakpointTransform, ResolvedBreakpoint, scaled_height},
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Settings for the site-local image pipeline.
pub struct LocalPipelineOpts {
    /// Directory local asset references are resolved against.
    pub source_root: PathBuf,
    /// Directory resized variants are written to.
    pub output_dir: PathBuf,
    /// URL prefix under which `output_dir` is served.
    pub public_base: String,
    /// Encode and write variants; when false only URLs are computed.
    pub write_variants: bool,
    /// Maximum number of variants resized at once.
    pub max_concurrent: usize,
}

impl Default for LocalPipelineOpts {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("."),
            output_dir: PathBuf::from("dist/_img"),
            public_base: "/_img".to_string(),
            write_variants: true,
            max_concurrent: 4,
        }
    }
}

impl LocalPipelineOpts {
    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> PixelsetResult<()> {
        if self.max_concurrent == 0 {
            return Err(PixelsetError::validation(
                "local.max_concurrent must be >= 1",
            ));
        }
        Ok(())
    }
}

/// Normalize a site-relative asset reference (`/img/a.jpg`, `img/./a.jpg`) to `img/a.jpg`.
pub fn normalize_asset_path(source: &str) -> PixelsetResult<String> {
    let s = source.replace('\\', "/");
    let s = s.trim_start_matches('/');
    if s.is_empty() {
        return Err(PixelsetError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(PixelsetError::validation(
                "asset paths must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(PixelsetError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

/// Output file name for one variant: `{stem}.{hash}.{width}w.{ext}`.
pub fn variant_file_name(norm_path: &str, content_hash: u64, width: u32) -> String {
    let file = Path::new(norm_path);
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let ext = file
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_else(|| "png".to_string());
    format!("{stem}.{content_hash:016x}.{width}w.{ext}")
}

#[derive(Clone, Debug)]
struct Variant {
    width: u32,
    url: String,
    out_path: PathBuf,
}

/// Breakpoint transform backed by files under a local source root.
///
/// Variant names are content addressed, so an unchanged source maps to the same URLs across
/// runs and variants already on disk are not encoded again.
#[derive(Clone, Debug)]
pub struct LocalPipelineTransform {
    opts: LocalPipelineOpts,
}

impl LocalPipelineTransform {
    /// Build a pipeline from validated settings.
    pub fn new(opts: LocalPipelineOpts) -> PixelsetResult<Self> {
        opts.validate()?;
        Ok(Self { opts })
    }

    /// Settings in use.
    pub fn opts(&self) -> &LocalPipelineOpts {
        &self.opts
    }

    fn variant(&self, norm_path: &str, hash: u64, width: u32) -> Variant {
        let name = variant_file_name(norm_path, hash, width);
        let base = self.opts.public_base.trim_end_matches('/');
        Variant {
            width,
            url: format!("{base}/{name}"),
            out_path: self.opts.output_dir.join(&name),
        }
    }

    async fn write_variants(
        &self,
        bytes: Vec<u8>,
        variants: &[Variant],
        width: Option<u32>,
        height: Option<u32>,
    ) -> PixelsetResult<()> {
        let mut pending = Vec::with_capacity(variants.len());
        for v in variants {
            if matches!(tokio::fs::metadata(&v.out_path).await, Ok(m) if m.is_file()) {
                tracing::debug!(path = %v.out_path.display(), "variant up to date");
                continue;
            }
            pending.push(v.clone());
        }
        if pending.is_empty() {
            return Ok(());
        }

        tokio::fs::create_dir_all(&self.opts.output_dir)
            .await
            .with_context(|| {
                format!("create output dir '{}'", self.opts.output_dir.display())
            })?;

        let source = tokio::task::spawn_blocking(move || {
            image::load_from_memory(&bytes).context("decode source image")
        })
        .await
        .map_err(|e| PixelsetError::transform(format!("decode task failed: {e}")))??;
        let source = Arc::new(source);

        for batch in pending.chunks(self.opts.max_concurrent) {
            futures::future::try_join_all(batch.iter().map(|v| {
                let source = Arc::clone(&source);
                let v = v.clone();
                async move {
                    let target_h = scaled_height(v.width, width, height).unwrap_or_else(|| {
                        intrinsic_height(&source, v.width)
                    });
                    tokio::task::spawn_blocking(move || encode_variant(&source, &v, target_h))
                        .await
                        .unwrap_or_else(|e| {
                            Err(PixelsetError::transform(format!("resize task failed: {e}")))
                        })
                }
            }))
            .await?;
        }
        Ok(())
    }
}

fn intrinsic_height(source: &DynamicImage, target_width: u32) -> u32 {
    let (w, h) = (source.width().max(1), source.height());
    let scaled = (f64::from(target_width) * f64::from(h) / f64::from(w)).round();
    (scaled as u32).max(1)
}

/// Target size for a variant, shrunk to the source width when the request would upscale.
///
/// The requested aspect ratio is kept either way.
fn clamp_to_source(source_width: u32, width: u32, height: u32) -> (u32, u32) {
    if source_width == 0 || width <= source_width {
        return (width, height);
    }
    let scaled = (f64::from(height) * f64::from(source_width) / f64::from(width)).round();
    (source_width, (scaled as u32).max(1))
}

fn encode_variant(source: &DynamicImage, v: &Variant, height: u32) -> PixelsetResult<()> {
    let (w, h) = clamp_to_source(source.width(), v.width, height);
    if w != v.width {
        tracing::debug!(requested = v.width, source_width = w, "not upscaling variant");
    }
    let resized = source.resize_exact(w, h, FilterType::Lanczos3);
    resized.save(&v.out_path).map_err(|e| {
        PixelsetError::transform(format!(
            "write variant '{}': {e}",
            v.out_path.display()
        ))
    })?;
    tracing::debug!(path = %v.out_path.display(), width = w, height = h, "wrote variant");
    Ok(())
}

#[async_trait]
impl BreakpointTransform for LocalPipelineTransform {
    #[tracing::instrument(skip_all, fields(src = %image.src(), count = widths.len()))]
    async fn transform(
        &self,
        image: &ImageSource,
        widths: &[u32],
        width: Option<u32>,
        height: Option<u32>,
    ) -> PixelsetResult<Vec<ResolvedBreakpoint>> {
        if image.is_remote() {
            return Err(PixelsetError::validation(format!(
                "'{}' is not a local asset reference",
                image.src()
            )));
        }
        if widths.is_empty() {
            return Ok(Vec::new());
        }

        let norm_path = normalize_asset_path(image.src())?;
        let path = self.opts.source_root.join(&norm_path);
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("read image '{}'", path.display()))?;
        let hash = xxhash_rust::xxh3::xxh3_64(&bytes);

        let variants: Vec<Variant> = widths
            .iter()
            .map(|&w| self.variant(&norm_path, hash, w))
            .collect();

        if self.opts.write_variants {
            self.write_variants(bytes, &variants, width, height).await?;
        }

        Ok(variants
            .into_iter()
            .map(|v| ResolvedBreakpoint {
                url: v.url,
                width: v.width,
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/local.rs"]
mod tests;
