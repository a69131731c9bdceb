use std::time::Duration;

use async_trait::async_trait;

use crate::appsettings::ApiSettings;

use super::{ApiError, EditTaskRequest, TaskApi};

const EDIT_TASK_PATH: &str = "edit_task";

pub struct HttpTaskApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn edit_task(&self, request: &EditTaskRequest) -> Result<(), ApiError> {
        let url = self.endpoint(EDIT_TASK_PATH);
        log::debug!("Sending edit request for task {} to {}", request.task_id, url);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        log::info!(
            "Task service accepted edit of task {} [status = {}]",
            request.task_id,
            status
        );
        Ok(())
    }
}
