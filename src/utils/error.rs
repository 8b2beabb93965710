use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Unexpected response shape: {message}")]
    Schema { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl EtlError {
    pub fn schema(message: impl Into<String>) -> Self {
        EtlError::Schema {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
