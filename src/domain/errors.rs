//! Error types for the roster domain
//!
//! Architecture: Validation failures are values - construction returns a Result
//! and an invalid entity never exists

/// Error types that can occur while building or loading a roster
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// A value did not have the required shape
    #[error("{message}")]
    InvalidFormat { message: String },

    /// A value parsed correctly but falls outside its allowed range
    #[error("{message}")]
    OutOfRange { message: String },

    /// Roster definition could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File could not be read or written
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RosterError {
    /// Create an invalid format error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error came from a field validation rule
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. } | Self::OutOfRange { .. })
    }
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display_bare_message() {
        let err = RosterError::invalid_format("Student ID is invalid");
        assert_eq!(err.to_string(), "Student ID is invalid");
        assert!(err.is_validation());

        let err = RosterError::out_of_range("Date of birth is out of valid range");
        assert_eq!(err.to_string(), "Date of birth is out of valid range");
        assert!(err.is_validation());
    }

    #[test]
    fn test_ambient_errors_are_not_validation() {
        let err = RosterError::config("bad version");
        assert_eq!(err.to_string(), "Configuration error: bad version");
        assert!(!err.is_validation());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: RosterError = io.into();
        assert!(matches!(err, RosterError::Io { .. }));
        assert!(!err.is_validation());
    }
}
