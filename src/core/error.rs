//! Error types for SVM training and prediction

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvmError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Kernel error: {0}")]
    KernelError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid label: expected 0 or 1, got {0}")]
    InvalidLabel(f64),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, SvmError>;
