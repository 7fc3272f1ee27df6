//! Error types for repl-blocks operations.

use thiserror::Error;

/// Errors that can occur while reading input or dispatching blocks.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown block kind: {0}")]
    UnknownBlock(String),
}

pub type Result<T> = std::result::Result<T, Error>;
