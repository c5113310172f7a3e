use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("entity not found: {0}")]
    NotFound(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("backend error: {0}")]
    Backend(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("response carried no data: {0}")]
    MissingData(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
