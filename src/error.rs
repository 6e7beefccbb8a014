use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatmultError {
    #[error("value {value:#X} does not fit in {digits} hex digits")]
    ValueOutOfRange { value: u64, digits: usize },

    #[error("line {line}: invalid hex token {token:?}")]
    InvalidHexToken { line: usize, token: String },

    #[error("insufficient data for {name}: expected {expected} values, got {got}")]
    InsufficientData {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatmultError>;
