use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid task ID: {0}")]
    InvalidTaskId(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timestamp formatting error: {0}")]
    Timestamp(#[from] time::error::Format),
}

pub type Result<T> = std::result::Result<T, Error>;
