/// Crate-wide result alias.
pub type PixelsetResult<T> = Result<T, PixelsetError>;

#[derive(thiserror::Error, Debug)]
/// Errors surfaced by the resolver, transforms, configuration, and content index.
pub enum PixelsetError {
    /// Invalid input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A breakpoint transform rejected one of its widths.
    #[error("transform error: {0}")]
    Transform(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, usually IO with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixelsetError {
    /// Build a [`PixelsetError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixelsetError::Transform`].
    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform(msg.into())
    }

    /// Build a [`PixelsetError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
