use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{host::EditReminderHost, reminder::Reminder};

#[derive(Default)]
struct BoardState {
    is_edit_reminder_open: bool,
    reminder_details: Option<Arc<Reminder>>,
    refreshes: usize,
}

/// Terminal stand-in for the task list that opens the edit dialog.
#[derive(Default)]
pub struct TerminalBoard {
    state: RwLock<BoardState>,
}

impl TerminalBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `reminder` and show the edit dialog for it.
    pub async fn open_with(&self, reminder: Reminder) {
        let mut state = self.state.write().await;
        state.reminder_details = Some(Arc::new(reminder));
        state.is_edit_reminder_open = true;
    }

    pub async fn is_edit_reminder_open(&self) -> bool {
        self.state.read().await.is_edit_reminder_open
    }

    pub async fn reminder_details(&self) -> Option<Arc<Reminder>> {
        self.state.read().await.reminder_details.clone()
    }

    pub async fn refreshes(&self) -> usize {
        self.state.read().await.refreshes
    }
}

#[async_trait]
impl EditReminderHost for TerminalBoard {
    async fn set_edit_reminder_open(&self, open: bool) {
        log::debug!("Edit dialog open = {open}");
        self.state.write().await.is_edit_reminder_open = open;
    }

    async fn set_reminder_details(&self, details: Option<Arc<Reminder>>) {
        self.state.write().await.reminder_details = details;
    }

    async fn fetch_all_tasks(&self) {
        let mut state = self.state.write().await;
        state.refreshes += 1;
        log::info!("Task list refresh requested [refreshes = {}]", state.refreshes);
    }
}
