//! Common error types and handling for Markdown Ninja

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the shared utilities
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Config should be created before using it")]
    NotInitialized,

    #[error("Hashing unavailable: {0}")]
    HashingUnavailable(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),
}

impl Error {
    /// Get the error code for logs and API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::NotInitialized => "CONFIG_NOT_INITIALIZED",
            Error::HashingUnavailable(_) => "HASHING_UNAVAILABLE",
            Error::InvalidLocation(_) => "INVALID_LOCATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::NotInitialized.error_code(), "CONFIG_NOT_INITIALIZED");
        assert_eq!(
            Error::HashingUnavailable("test".to_string()).error_code(),
            "HASHING_UNAVAILABLE"
        );
        assert_eq!(
            Error::InvalidLocation("test".to_string()).error_code(),
            "INVALID_LOCATION"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::NotInitialized.to_string(),
            "Config should be created before using it"
        );
        assert_eq!(
            Error::InvalidLocation("no host".to_string()).to_string(),
            "Invalid location: no host"
        );
    }
}
