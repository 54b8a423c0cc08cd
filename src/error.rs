use thiserror::Error;

/// Errors returned by the generator and the clustering engine.
///
/// Parameter errors are raised before any work starts; once parameters validate,
/// neither component can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A point slice does not match the result it is paired with.
    #[error("point count mismatch: expected {expected}, found {found}")]
    PointCountMismatch {
        /// Number of points the result was computed over.
        expected: usize,
        /// Number of points supplied.
        found: usize,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, message: &'static str) -> Self {
        Self::InvalidParameter { name, message }
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
