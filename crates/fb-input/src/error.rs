use fb_core::FbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    Invalid(#[from] FbError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;
