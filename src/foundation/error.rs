/// Result alias used by the configuration and markup layers.
pub type CarouselResult<T> = Result<T, CarouselError>;

/// Errors surfaced while building controllers.
///
/// Navigation itself never fails: rejected requests are silent no-ops.
#[derive(thiserror::Error, Debug)]
pub enum CarouselError {
    /// A structurally invalid input (bad item set, out-of-range value).
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration attribute could not be interpreted.
    #[error("config error: {0}")]
    Config(String),

    /// JSON could not be read or written.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarouselError {
    /// Build a [`CarouselError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CarouselError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`CarouselError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
