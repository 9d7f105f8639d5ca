//! Error types for the parsing layer.
//!
//! Only whole-input structural failures are errors. A single malformed header
//! line is skipped, and missing expected fields are reported as warnings by
//! [`crate::import`].

use thiserror::Error;

/// Fatal failure of a single parse call.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No `curl '<url>'` pair in the command.
    #[error("no URL found: expected curl followed by a single-quoted URL")]
    NoUrlFound,
    /// The text is not shaped like `fetch(<url>, { ... })`.
    #[error("no fetch arguments found: expected fetch(<url>, {{ ... }})")]
    NoFetchArgs,
    /// The options object of a fetch call could not be read.
    #[error("invalid snippet: {0}")]
    InvalidLiteral(#[from] LiteralError),
    /// The options object has no usable `headers` object.
    #[error("no headers object found in fetch options")]
    NoHeadersProperty,
}

/// Object-literal read failure with the byte offset where it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at offset {offset}")]
pub struct LiteralError {
    pub message: String,
    pub offset: usize,
}

impl LiteralError {
    pub(crate) fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}
