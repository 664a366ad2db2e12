pub use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the strategy backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to backend failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend answered with status {0}")]
    Status(StatusCode),

    #[error("unexpected backend response body: {0}")]
    Decode(String),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;
