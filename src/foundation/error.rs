/// Result alias used at every fallible boundary of the crate.
pub type BlazeResult<T> = Result<T, BlazeError>;

/// Errors raised while loading, validating, or rendering.
///
/// The motion core itself never fails at runtime; these only surface when inputs are
/// parsed or when output is written.
#[derive(thiserror::Error, Debug)]
pub enum BlazeError {
    /// Input data violates an invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration value could not be interpreted.
    #[error("config error: {0}")]
    Config(String),

    /// Chart output could not be produced.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlazeError {
    /// Build a [`BlazeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlazeError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BlazeError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BlazeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BlazeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
