/// Convenience result type used across Drawtir.
pub type DrawtirResult<T> = Result<T, DrawtirError>;

/// Top-level error taxonomy used by the fallible boundary APIs.
///
/// The timeline engine itself is total and never returns these; they surface only when
/// loading, validating or strictly parsing editor data.
#[derive(thiserror::Error, Debug)]
pub enum DrawtirError {
    /// Invalid user-provided or project data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A duration string that does not match the duration grammar.
    #[error("parse error: {0}")]
    Parse(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrawtirError {
    /// Build a [`DrawtirError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DrawtirError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`DrawtirError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
