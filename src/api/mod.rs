mod http_task_api;
mod model;
mod task_api;

pub use http_task_api::HttpTaskApi;
pub use model::EditTaskRequest;
pub use task_api::{ApiError, TaskApi};
