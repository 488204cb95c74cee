//! Error handling for the Printtrace core pipeline.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
///
/// Represents errors raised while parsing a toolpath or emitting the mesh
/// document. Unrecognized command lines are never errors; only malformed
/// numeric text on a recognized axis word is fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// A recognized axis or extrusion word carried malformed numeric text
    #[error("Invalid parameter '{word}' at line {line_number}: {reason}")]
    InvalidParameter {
        /// The line number where the invalid word was found (1-based).
        line_number: u32,
        /// The offending word, e.g. `X1..5`.
        word: String,
        /// The reason the value could not be parsed.
        reason: String,
    },

    /// Standard I/O error while reading the toolpath source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a parse error
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::InvalidParameter { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
