use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("invalid entry policy: {0}")]
    InvalidEntryPolicy(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
