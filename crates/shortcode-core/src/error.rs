//! Error types for shortcode fields.
//!
//! This module provides a unified error type with explicit variants for
//! content store, input validation and per-request failures.

use thiserror::Error;

/// The unified error type for shortcode field operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Content store errors (IO, corrupt data, locking).
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Input validation errors (bad shortcode tag, malformed definitions).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A gateway request was rejected.
    #[error("request rejected: {0}")]
    Request(#[from] RequestError),
}

impl Error {
    /// Returns the request rejection, if this error is one.
    pub fn as_request(&self) -> Option<&RequestError> {
        match self {
            Error::Request(err) => Some(err),
            _ => None,
        }
    }
}

/// Content store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("IO error: {message}")]
    Io { message: String },

    /// A stored item could not be decoded.
    #[error("corrupt entry '{path}': {reason}")]
    Corrupt { path: String, reason: String },

    /// The store lock could not be acquired or released.
    #[error("lock error: {message}")]
    Lock { message: String },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Store(StoreError::from(err))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid shortcode tag.
    #[error("invalid shortcode tag '{value}': {reason}")]
    ShortcodeTag { value: String, reason: String },

    /// Invalid field type identifier.
    #[error("invalid field type '{value}': {reason}")]
    FieldType { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

/// Reasons a post field request is refused.
///
/// These never escape the gateway as faults; they become failure envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Token missing or not issued for the claimed field.
    #[error("invalid token")]
    InvalidToken,

    /// No post field is registered for the claimed pair.
    #[error("unknown field {shortcode}.{attr}")]
    UnknownField { shortcode: String, attr: String },

    /// Hydration was called without a value.
    #[error("empty value")]
    EmptyValue,

    /// An id segment was rejected under strict parsing.
    #[error("invalid id segment '{segment}'")]
    InvalidValue { segment: String },
}
