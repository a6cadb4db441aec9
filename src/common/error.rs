use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactorialError {
    #[error("invalid input: factorial is undefined for negative n ({0})")]
    NegativeInput(i32),

    #[error("out of range: {0}! does not fit in 64 bits")]
    Overflow(i32),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("out of range: {0} is not a 32-bit integer")]
    OutOfRange(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FactorialError>;
