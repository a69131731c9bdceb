use crate::{
    api::EditTaskRequest,
    reminder::{NOTES_MAX_LEN, Reminder, ReminderId, TITLE_MAX_LEN},
    session::UserId,
};

/// Unsaved copy of the editable reminder fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderDraft {
    title: String,
    notes: String,
    date: String,
    time: String,
    flag: bool,
}

impl ReminderDraft {
    pub fn from_reminder(reminder: &Reminder) -> Self {
        Self {
            title: reminder.title.clone(),
            notes: reminder.notes.clone(),
            date: reminder.calendar_date().to_string(),
            time: reminder.time.clone(),
            flag: reminder.is_flagged(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn flag(&self) -> bool {
        self.flag
    }

    /// Typed input is capped like the dialog's input boxes; values loaded
    /// from a record are not, validation catches those.
    pub fn set_title(&mut self, value: &str) {
        self.title = truncate_chars(value, TITLE_MAX_LEN);
    }

    pub fn set_notes(&mut self, value: &str) {
        self.notes = truncate_chars(value, NOTES_MAX_LEN);
    }

    pub fn set_date(&mut self, value: &str) {
        self.date = value.trim().to_string();
    }

    pub fn set_time(&mut self, value: &str) {
        self.time = value.trim().to_string();
    }

    pub fn set_flag(&mut self, value: bool) {
        self.flag = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_request(&self, task_id: ReminderId, user_id: UserId) -> EditTaskRequest {
        EditTaskRequest {
            task_id,
            user_id,
            title: self.title.clone(),
            notes: self.notes.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            flag: self.flag,
        }
    }
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => value[..byte_index].to_string(),
        None => value.to_string(),
    }
}
