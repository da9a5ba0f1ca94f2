/// Convenience result type used across the crate.
pub type PigmentResult<T> = Result<T, PigmentError>;

/// Top-level error taxonomy for the image model.
///
/// `Validation` covers rejected preconditions (bad stop counts, misaligned
/// strides, non-bitmap alpha maps); `Allocation` covers fallible buffer
/// reservations such as the dispatch scratch buffer.
#[derive(thiserror::Error, Debug)]
pub enum PigmentError {
    /// Invalid caller-supplied value or precondition violation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A fallible buffer reservation failed.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PigmentError {
    /// Build a [`PigmentError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PigmentError::Allocation`] value.
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
