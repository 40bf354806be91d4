//! Ingestion error types.

use thiserror::Error;

/// Errors that can occur while ingesting a compilation unit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The source text is not valid input for this front-end.
    #[error("invalid source: {message}")]
    InvalidSource {
        /// What went wrong.
        message: String,
        /// Byte offset where the error occurred, when known.
        offset: Option<usize>,
    },

    /// The front-end recognized a construct it does not support.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl ParseError {
    /// Creates a new invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: None,
        }
    }

    /// Creates a new invalid source error with a byte offset.
    pub fn invalid_source_at(message: impl Into<String>, offset: usize) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: Some(offset),
        }
    }

    /// Creates a new unsupported construct error.
    pub fn unsupported(what: impl Into<String>) -> Self {
        Self::Unsupported(what.into())
    }
}
