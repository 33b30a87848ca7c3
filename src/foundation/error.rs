/// Convenience result type used across the marquee engine.
pub type MarqueeResult<T> = Result<T, MarqueeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Errors only arise at construction and serde boundaries. The per-frame
/// path never fails: an empty catalog, an unmeasured layout, or a tick
/// after teardown all degrade to a static (non-scrolling) display.
#[derive(thiserror::Error, Debug)]
pub enum MarqueeError {
    /// Invalid user-provided configuration or parameter.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid catalog content.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MarqueeError {
    /// Build a [`MarqueeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MarqueeError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`MarqueeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
