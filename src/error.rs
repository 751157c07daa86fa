//! Custom error types for PES Buddy
//!
//! Only genuine failures live here. Lookup misses and user mistakes are
//! ordinary outcome values returned by the services, so none of these
//! variants is used for control flow inside a workflow.

use thiserror::Error;

/// The main error type for PES Buddy operations
#[derive(Error, Debug)]
pub enum PesBuddyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The interactive input stream reached end of file
    #[error("Input closed")]
    InputClosed,
}

impl PesBuddyError {
    /// Create a "not found" error for menu files
    pub fn menu_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Menu",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for users, named by display name
    pub fn user_exists(name: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "User",
            identifier: name.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the input stream ended
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

impl From<std::io::Error> for PesBuddyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PesBuddyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for PES Buddy operations
pub type PesBuddyResult<T> = Result<T, PesBuddyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PesBuddyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = PesBuddyError::menu_not_found("skm_menu.txt");
        assert_eq!(err.to_string(), "Menu not found: skm_menu.txt");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_error() {
        let err = PesBuddyError::user_exists("Asha");
        assert_eq!(err.to_string(), "User already exists: Asha");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PesBuddyError = io_err.into();
        assert!(matches!(err, PesBuddyError::Io(_)));
    }

    #[test]
    fn test_input_closed() {
        assert!(PesBuddyError::InputClosed.is_input_closed());
        assert_eq!(PesBuddyError::InputClosed.to_string(), "Input closed");
    }
}
