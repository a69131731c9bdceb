use async_trait::async_trait;
use thiserror::Error;

use super::EditTaskRequest;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to the task service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("task service responded with {0}")]
    Status(reqwest::StatusCode),
}

/// Remote task service. Only the operations the edit dialog needs.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn edit_task(&self, request: &EditTaskRequest) -> Result<(), ApiError>;
}
