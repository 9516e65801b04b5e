//! # Omnipay Error Types
//!
//! Typed error handling for gateway lookup, construction and the strict
//! parsing helpers. All fallible operations return `OmnipayResult<T>`.

use thiserror::Error;

/// Core error type for all omnipay operations
#[derive(Debug, Error, PartialEq)]
pub enum OmnipayError {
    /// No constructible gateway matched the identifier or its resolved class name
    #[error("Class '{class}' not found")]
    GatewayNotFound { class: String },

    /// A string outside the accepted decimal grammar was passed to `to_float`
    #[error("String is not a valid decimal number")]
    MalformedDecimalString,

    /// A value of a type that cannot hold a decimal was passed to `to_float`
    #[error("Data type is not a valid decimal number")]
    UnsupportedDecimalType,

    /// A setter exists but refused the supplied value
    #[error("Invalid parameter '{key}': {message}")]
    InvalidParameter { key: String, message: String },

    /// Configuration errors (unreadable file, malformed TOML)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport failure reported by an `HttpClient` implementation
    #[error("HTTP error: {0}")]
    Http(String),
}

impl OmnipayError {
    /// Returns true if the caller supplied an unusable argument.
    ///
    /// These errors go away when the input is corrected; the rest describe
    /// the environment (missing gateway types, bad configuration, transport).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            OmnipayError::MalformedDecimalString
                | OmnipayError::UnsupportedDecimalType
                | OmnipayError::InvalidParameter { .. }
        )
    }

    pub fn invalid_parameter(key: impl Into<String>, message: impl Into<String>) -> Self {
        OmnipayError::InvalidParameter {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for omnipay operations
pub type OmnipayResult<T> = Result<T, OmnipayError>;
