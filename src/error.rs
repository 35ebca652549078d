//! Error types for board lookups and navigation.

use thiserror::Error;

/// Errors raised by the board core.
///
/// Only read paths produce these. Writes never fail; they report an
/// [`AddOutcome`](crate::models::AddOutcome) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A key was looked up that is not present.
    #[error("key not found: {key}")]
    KeyNotFound {
        /// The missing key, as given by the caller.
        key: String,
    },

    /// An operation needs a current category but the board is at the top level.
    #[error("no category is selected (required by {operation})")]
    InvalidState {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },
}

impl BoardError {
    /// Builds a [`BoardError::KeyNotFound`] for the given key.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Returns true if this is a lookup miss.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}

/// Result alias for board core operations.
pub type BoardResult<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_display() {
        let err = BoardError::key_not_found("img/food/nope.png");
        assert_eq!(err.to_string(), "key not found: img/food/nope.png");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_state_display() {
        let err = BoardError::InvalidState {
            operation: "current_category",
        };
        assert!(err.to_string().contains("current_category"));
        assert!(!err.is_not_found());
    }
}
