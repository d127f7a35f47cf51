/// Convenience result type used across sectionflow.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Top-level error taxonomy used by engine and host APIs.
///
/// Caller-contract violations (unregistered view kinds, mismatched view classes) are not
/// represented here: they halt at the host boundary instead.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A batch transaction whose deletions and insertions do not reconcile with the data source.
    #[error("batch update error: {0}")]
    BatchUpdate(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayoutError {
    /// Build a [`LayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayoutError::BatchUpdate`] value.
    pub fn batch_update(msg: impl Into<String>) -> Self {
        Self::BatchUpdate(msg.into())
    }

    /// Build a [`LayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
