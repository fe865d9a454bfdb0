//! Error types for AST traversal output

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors raised while writing a traversal to a sink.
///
/// Building nodes and stringifying values never fail; only the output
/// side of a traversal does.
#[derive(Error, Debug)]
pub enum PrintError {
    /// The output sink rejected a write
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tree is deeper than the configured limit
    #[error("Depth limit exceeded: tree is deeper than {limit}")]
    DepthLimit {
        /// Configured maximum depth
        limit: usize,
    },

    /// Printed bytes were not valid UTF-8
    #[error("Invalid UTF-8 in output: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Result type alias for traversal operations
pub type Result<T> = std::result::Result<T, PrintError>;
