use std::fmt;

/// Errors that can occur while serializing quads to JSON-LD.
#[derive(Debug, thiserror::Error)]
pub enum SerializerError {
    #[error("Context error: {0}")]
    ContextError(String),

    #[error("JSON encoding error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for serializer operations.
pub type Result<T> = std::result::Result<T, SerializerError>;

impl SerializerError {
    pub fn context(msg: impl fmt::Display) -> Self {
        Self::ContextError(msg.to_string())
    }
}
