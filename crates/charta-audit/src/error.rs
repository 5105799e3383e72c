use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("invalid scoring policy: {0}")]
    InvalidPolicy(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
