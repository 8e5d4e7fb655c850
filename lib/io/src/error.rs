//! # error.rs
//!
//! Error type for text input: square names and match config files.
//!
//! # Author
//! Alden Luthfi

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("`{0}` is not a square on this board")]
    BadCoord(String),

    #[error("line {line}: expected `key = value`, found `{text}`")]
    BadConfigLine { line: usize, text: String },

    #[error("line {line}: unknown key `{key}`")]
    UnknownKey { line: usize, key: String },

    #[error("line {line}: `{value}` is not a valid value for `{key}`")]
    BadValue {
        line: usize,
        key: String,
        value: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
