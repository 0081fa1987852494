//! Error types for XMP key operations
//!
//! This module defines all error types used by the namespace registry and key parser.

use thiserror::Error;

/// Error types for XMP key operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmpError {
    /// Key string does not follow the `Xmp.<prefix>.<property>` grammar
    #[error("Malformed key: {0}")]
    MalformedKey(String),

    /// Namespace prefix is not registered
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Bad parameter provided to a function
    #[error("Bad parameter: {0}")]
    BadParam(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type alias for XMP key operations
pub type XmpResult<T> = Result<T, XmpError>;
