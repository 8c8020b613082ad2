use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type SimResult<T> = Result<T, SimError>;
