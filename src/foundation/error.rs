/// Convenience result type used across delayscope.
pub type DelayscopeResult<T> = Result<T, DelayscopeError>;

/// Top-level error taxonomy used by the crate's boundary APIs.
///
/// The filter/aggregate/scale/compose pipeline itself is infallible; errors only arise when
/// records, configuration or selection input are accepted, and when output is written.
#[derive(thiserror::Error, Debug)]
pub enum DelayscopeError {
    /// Invalid user-provided selection or configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Records violating the flight record invariants.
    #[error("data error: {0}")]
    Data(String),

    /// Errors while turning drawing instructions into pixels or documents.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DelayscopeError {
    /// Build a [`DelayscopeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DelayscopeError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`DelayscopeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DelayscopeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DelayscopeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

impl From<csv::Error> for DelayscopeError {
    fn from(err: csv::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
