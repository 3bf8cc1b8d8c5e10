use bankq_collections::CollectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("event queue error: {0}")]
    Collection(#[from] CollectionError),

    #[error("malformed customer input: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
