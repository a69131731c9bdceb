use serde::Serialize;

use crate::{reminder::ReminderId, session::UserId};

/// Body of `POST /edit_task`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTaskRequest {
    pub task_id: ReminderId,
    pub user_id: UserId,
    pub title: String,
    pub notes: String,
    pub date: String,
    pub time: String,
    pub flag: bool,
}
