use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Signature must not be empty")]
    InvalidSignature,

    #[error("Buffer overflow: {required} bytes required, capacity is {capacity}")]
    BufferOverflow { required: usize, capacity: usize },

    #[error("Insertion point {at} is past the end of the buffer (length {len})")]
    InsertionOutOfBounds { at: usize, len: usize },

    #[error("Invalid array name: {0:?}")]
    InvalidArrayName(String),

    #[error("Invalid signature table: {0}")]
    InvalidTable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a capacity overflow
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::BufferOverflow { .. })
    }
}
