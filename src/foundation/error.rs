/// Convenience result type used across Plotline.
pub type PlotlineResult<T> = Result<T, PlotlineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PlotlineError {
    /// Invalid user-provided samples, paths or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The coordinate mapper produced a coordinate the engine cannot use.
    #[error("mapping error: {0}")]
    Mapping(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlotlineError {
    /// Build a [`PlotlineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlotlineError::Mapping`] value.
    pub fn mapping(msg: impl Into<String>) -> Self {
        Self::Mapping(msg.into())
    }

    /// Build a [`PlotlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
