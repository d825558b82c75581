//! # Error Types
//!
//! All SDK operations return [`Error`]. Remote failures carry an
//! [`ApiError`] with the HTTP status and the server's message; every other
//! variant is a local failure (construction, transport, or serialization).

use std::fmt;

// =============================================================================
// API Errors
// =============================================================================

/// A failure reported by the RAGLite API.
///
/// Produced from non-2xx responses, and from 2xx responses whose envelope
/// carries `success: false`. The server may signal a business failure
/// without changing the HTTP status, so both paths end up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Status code from the HTTP status line.
    pub status_code: u16,
    /// Server-provided message, or the raw response body when it was not
    /// JSON.
    pub message: String,
}

impl ApiError {
    /// Whether the requested resource does not exist (404).
    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }

    /// Whether the request was rejected as malformed (400).
    pub fn is_bad_request(&self) -> bool {
        self.status_code == 400
    }

    /// Whether the failure happened on the server side (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error (status {}): {}", self.status_code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// SDK Errors
// =============================================================================

/// Errors from SDK operations.
#[derive(Debug)]
pub enum Error {
    /// Client construction failed (missing base URL, unbuildable engine).
    Config { message: String },
    /// Connection, DNS, timeout, or cancellation failure. Never carries an
    /// HTTP status and is never retried by the SDK.
    Network { message: String },
    /// The request body could not be serialized to JSON.
    Encode { message: String },
    /// The response body could not be decoded into the expected shape.
    /// Indicates a contract mismatch with the server, not a business error.
    Decode { message: String },
    /// The server reported a failure.
    Api(ApiError),
}

impl Error {
    /// The remote failure, when this error is [`Error::Api`].
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config { message } => write!(f, "Configuration error: {}", message),
            Error::Network { message } => write!(f, "Network error: {}", message),
            Error::Encode { message } => write!(f, "Encode error: {}", message),
            Error::Decode { message } => write!(f, "Decode error: {}", message),
            Error::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}
