//! tkc error types.

use thiserror::Error;

/// Errors produced by the token counting pipeline.
///
/// Unresolved model or encoding names are deliberately *not* represented
/// here: name resolution always recovers via the fallback encoding.
#[derive(Error, Debug)]
pub enum TkcError {
    /// Command line usage error.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Tokenizer data could not be loaded.
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tkc operations
pub type Result<T> = std::result::Result<T, TkcError>;

impl From<toml::de::Error> for TkcError {
    fn from(err: toml::de::Error) -> Self {
        TkcError::Config(err.to_string())
    }
}
