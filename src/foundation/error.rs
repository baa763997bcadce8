/// Convenience result type used across the generators.
pub type AssetResult<T> = Result<T, AssetError>;

/// Error taxonomy for asset generation.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    /// Invalid geometry, colors or sizes handed to a drawing routine.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization or compositing failed.
    #[error("render error: {0}")]
    Render(String),

    /// A font could be read but not used for layout.
    #[error("font error: {0}")]
    Font(String),

    /// Malformed or inconsistent generator configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AssetError {
    /// Build an [`AssetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AssetError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`AssetError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build an [`AssetError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
