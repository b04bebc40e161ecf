//! Error types for wirecall
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using WireError
pub type Result<T> = std::result::Result<T, WireError>;

/// Unified error type for wirecall operations
#[derive(Debug, Error)]
pub enum WireError {
    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    /// Decode ran out of bytes before a field was complete. The message
    /// names the field that starved.
    #[error("Invalid message length: {0}")]
    InvalidMessageLength(String),

    /// A tag byte outside the known set {1, 2, 3}.
    #[error("Invalid parameter type: 0x{0:02x}")]
    InvalidParameterType(u8),

    /// A name or string value too long for its one-byte length prefix.
    #[error("Field exceeds wire limit: {0}")]
    FieldTooLong(String),

    /// Function name or string value bytes were not valid UTF-8.
    #[error("Invalid UTF-8 in {0}")]
    InvalidUtf8(&'static str),

    // -------------------------------------------------------------------------
    // Dispatch Errors
    // -------------------------------------------------------------------------
    /// Requested function absent from the handler registry.
    #[error("Unknown function: {0}")]
    HandlerNotFound(String),

    /// A resolved handler reported failure.
    #[error("Handler failed: {0}")]
    HandlerError(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
