//! Domain error types
//!
//! Error hierarchy for Cadastro. All errors are domain-specific and don't
//! expose third-party types; field-level validation outcomes are values
//! (`form::Violation`), never errors, so they do not appear here.

use thiserror::Error;

/// Main Cadastro error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CadastroError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Registry API errors
    #[error("Registry API error: {0}")]
    Api(#[from] ApiError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Registry API errors
///
/// Errors surfaced from gateway calls against the person registry server.
/// Every gateway operation resolves to either a typed payload or exactly one
/// of these; no third-party HTTP client types leak through.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the registry server
    #[error("Failed to connect to registry server: {0}")]
    ConnectionFailed(String),

    /// Response body could not be parsed into the expected shape
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Person not found (404)
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    /// Client error (4xx other than 404)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for CadastroError {
    fn from(err: std::io::Error) -> Self {
        CadastroError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CadastroError {
    fn from(err: serde_json::Error) -> Self {
        CadastroError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CadastroError {
    fn from(err: toml::de::Error) -> Self {
        CadastroError::Configuration(format!("TOML parse error: {err}"))
    }
}
