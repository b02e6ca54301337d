use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{PixelsetError, PixelsetResult},
    resolve::resolver::ResolverOpts,
    transform::local::LocalPipelineOpts,
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Settings for the remote CDN rule.
pub struct RemoteOpts {
    /// Use CDN rewriting for absolute URLs.
    pub enabled: bool,
}

impl Default for RemoteOpts {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Top-level settings file. Every field may be omitted.
pub struct PixelsetConfig {
    /// Resolver defaults (device widths, object-fit/position).
    #[serde(flatten)]
    pub resolver: ResolverOpts,
    /// Site-local image pipeline.
    pub local: LocalPipelineOpts,
    /// Remote CDN rule.
    pub remote: RemoteOpts,
}

impl PixelsetConfig {
    /// Parse settings from a JSON reader and validate them.
    pub fn from_reader<R: std::io::Read>(r: R) -> PixelsetResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| PixelsetError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PixelsetResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PixelsetError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every section.
    pub fn validate(&self) -> PixelsetResult<()> {
        self.resolver.validate()?;
        self.local.validate()?;
        Ok(())
    }

    /// Resolve `local.source_root` and `local.output_dir` against `base` when relative.
    pub fn rebase(mut self, base: &Path) -> Self {
        if self.local.source_root.is_relative() {
            self.local.source_root = base.join(&self.local.source_root);
        }
        if self.local.output_dir.is_relative() {
            self.local.output_dir = base.join(&self.local.output_dir);
        }
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
