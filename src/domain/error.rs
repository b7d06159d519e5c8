//! Error types for the Rolodex plugin.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Rolodex plugin operations.
///
/// The first three variants are the failure modes of the directory itself
/// (fetching, parsing, indexing). The remaining variants cover the ambient
/// concerns of the plugin: configuration, themes and local I/O.
///
/// # Examples
///
/// ```
/// use rolodex::DirectoryError;
///
/// let err = DirectoryError::OutOfRange { index: 12, len: 12 };
/// assert_eq!(err.to_string(), "Index 12 is out of range for 12 profiles");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The profile request never produced a successful HTTP response.
    ///
    /// Covers transport failures reported by the host, non-2xx status codes,
    /// and a denied web-access permission.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON document.
    ///
    /// Occurs when the body is not valid JSON, lacks the `results` array, or an
    /// element is missing a required field.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A store index outside `0..len` was requested.
    #[error("Index {index} is out of range for {len} profiles")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of profiles in the store at the time of the request.
        len: usize,
    },

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// Occurs when a configured value (such as the API URL) cannot be used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local filesystem operation failed.
    ///
    /// Stored as a message so the error stays `Clone` and can be kept in the
    /// application state for display.
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DirectoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// A specialized `Result` type for Rolodex operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
