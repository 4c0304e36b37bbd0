use crate::model::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid command format! \n{0}")]
    Usage(String),

    #[error("The person index provided is invalid")]
    IndexOutOfRange(usize),

    #[error("Person could not be found in address book")]
    RecordNotFound,

    #[error("This person already exists in the address book")]
    DuplicateRecord,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl RoloError {
    /// Errors raised while reading or writing the backing store.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            RoloError::Io(_) | RoloError::Serialization(_) | RoloError::Storage(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RoloError>;
