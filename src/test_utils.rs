use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    api::{ApiError, EditTaskRequest, TaskApi},
    host::EditReminderHost,
    notify::Notifier,
    reminder::{Reminder, ReminderId},
};

pub type Recorded<T> = Arc<Mutex<Vec<T>>>;

fn recorded<T>() -> Recorded<T> {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn reminder(id: &str) -> Arc<Reminder> {
    Arc::new(Reminder {
        id: ReminderId::new(id),
        title: "Dentist".to_string(),
        notes: "Bring the insurance card".to_string(),
        date: Some("2025-05-31T00:00:00.000Z".to_string()),
        time: "13:00".to_string(),
        flag: Some(true),
    })
}

pub struct RecordingTaskApi {
    pub requests: Recorded<EditTaskRequest>,
    fail: bool,
}

impl RecordingTaskApi {
    pub fn succeeding() -> Self {
        Self {
            requests: recorded(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            requests: recorded(),
            fail: true,
        }
    }
}

#[async_trait]
impl TaskApi for RecordingTaskApi {
    async fn edit_task(&self, request: &EditTaskRequest) -> Result<(), ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Recorded<Notification>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push(Notification::Error(message.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    SetOpen(bool),
    SetDetails(Option<ReminderId>),
    FetchAllTasks,
}

#[derive(Default)]
pub struct RecordingHost {
    pub events: Recorded<HostEvent>,
}

impl RecordingHost {
    pub fn fetch_count(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| **event == HostEvent::FetchAllTasks)
            .count()
    }
}

#[async_trait]
impl EditReminderHost for RecordingHost {
    async fn set_edit_reminder_open(&self, open: bool) {
        self.events.lock().unwrap().push(HostEvent::SetOpen(open));
    }

    async fn set_reminder_details(&self, details: Option<Arc<Reminder>>) {
        self.events
            .lock()
            .unwrap()
            .push(HostEvent::SetDetails(details.map(|r| r.id.clone())));
    }

    async fn fetch_all_tasks(&self) {
        self.events.lock().unwrap().push(HostEvent::FetchAllTasks);
    }
}
