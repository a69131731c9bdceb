use std::sync::Arc;

use async_trait::async_trait;

use crate::reminder::Reminder;

/// Callbacks of the container that owns the edit dialog.
///
/// The container keeps the visibility flag and the selected reminder; the form
/// only asks it to change them and to reload its task list.
#[async_trait]
pub trait EditReminderHost: Send + Sync {
    async fn set_edit_reminder_open(&self, open: bool);
    async fn set_reminder_details(&self, details: Option<Arc<Reminder>>);
    async fn fetch_all_tasks(&self);
}
