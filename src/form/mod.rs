//! The "Edit Reminder" dialog, without any rendering.
//!
//! [`EditReminderForm`] keeps a draft of the reminder that its host selected,
//! applies field edits, validates and sends the update to the task service.
//! The host owns visibility and selection; the form only asks it to change them.

mod draft;
mod validation;


use std::sync::Arc;

use serde::Deserialize;

use crate::{
    api::{ApiError, EditTaskRequest, TaskApi},
    host::EditReminderHost,
    notify::Notifier,
    reminder::Reminder,
    session::Session,
};

pub use draft::ReminderDraft;
pub use validation::{Field, FieldError, validate};

pub const HEADING: &str = "Edit Reminder";
pub const SAVED_MESSAGE: &str = "Reminder changed successfully";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error has occurred. Please try again";

/// When the form asks its host to hide the dialog after a save attempt.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseBehavior {
    /// Only once the task service accepted the edit.
    #[default]
    Success,
    /// On every save attempt, before validation and regardless of the outcome.
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    /// Still mounted and holding its draft, but not interactive.
    Collapsed,
}

#[derive(Debug, Clone)]
pub enum Message {
    TitleInput(String),
    NotesInput(String),
    DateInput(String),
    TimeInput(String),
    FlagToggled(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Invalid(FieldError),
    Failed,
    Busy,
    NoReminder,
    Collapsed,
}

/// An accepted save attempt whose request has not completed yet.
#[derive(Debug)]
pub struct PendingSubmit {
    request: EditTaskRequest,
}

impl PendingSubmit {
    pub fn request(&self) -> &EditTaskRequest {
        &self.request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveButton {
    pub enabled: bool,
    pub dimmed: bool,
}

#[derive(Debug)]
pub struct FormView<'a> {
    pub heading: &'static str,
    pub visibility: Visibility,
    pub draft: &'a ReminderDraft,
    pub save: SaveButton,
}

pub struct EditReminderForm {
    api: Arc<dyn TaskApi>,
    host: Arc<dyn EditReminderHost>,
    notifier: Arc<dyn Notifier>,
    close_on: CloseBehavior,

    reminder: Option<Arc<Reminder>>,
    draft: ReminderDraft,
    visibility: Visibility,
    submitting: bool,
}

impl EditReminderForm {
    pub fn new(
        api: Arc<dyn TaskApi>,
        host: Arc<dyn EditReminderHost>,
        notifier: Arc<dyn Notifier>,
        close_on: CloseBehavior,
    ) -> Self {
        Self {
            api,
            host,
            notifier,
            close_on,
            reminder: None,
            draft: ReminderDraft::default(),
            visibility: Visibility::Collapsed,
            submitting: false,
        }
    }

    /// Take over the host's current state.
    ///
    /// The draft is reset only when the reminder reference differs from the
    /// one seen last time; toggling visibility alone keeps the draft.
    pub fn sync(&mut self, reminder: Option<Arc<Reminder>>, is_open: bool) {
        self.visibility = if is_open {
            Visibility::Shown
        } else {
            Visibility::Collapsed
        };

        let changed = match (&self.reminder, &reminder) {
            (Some(current), Some(next)) => !Arc::ptr_eq(current, next),
            (None, None) => false,
            _ => true,
        };
        if !changed {
            return;
        }

        match &reminder {
            Some(reminder) => {
                log::debug!("Loading reminder {} into the edit form", reminder.id);
                self.draft = ReminderDraft::from_reminder(reminder);
            }
            None => self.draft.clear(),
        }
        self.reminder = reminder;
    }

    pub fn update(&mut self, message: Message) {
        if self.visibility == Visibility::Collapsed {
            log::debug!("Ignoring {message:?}, the edit form is collapsed");
            return;
        }

        match message {
            Message::TitleInput(value) => self.draft.set_title(&value),
            Message::NotesInput(value) => self.draft.set_notes(&value),
            Message::DateInput(value) => self.draft.set_date(&value),
            Message::TimeInput(value) => self.draft.set_time(&value),
            Message::FlagToggled(value) => self.draft.set_flag(value),
        }
    }

    pub fn draft(&self) -> &ReminderDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn view(&self) -> FormView<'_> {
        FormView {
            heading: HEADING,
            visibility: self.visibility,
            draft: &self.draft,
            save: SaveButton {
                enabled: !self.submitting,
                dimmed: self.submitting,
            },
        }
    }

    /// Validate the draft and send it to the task service.
    pub async fn submit(&mut self, session: &Session) -> SubmitOutcome {
        let pending = match self.begin_submit(session).await {
            Ok(pending) => pending,
            Err(outcome) => return outcome,
        };

        let result = self.api.edit_task(pending.request()).await;
        self.finish_submit(pending, result).await
    }

    /// First half of [`submit`](Self::submit): checks that a request may be
    /// sent and marks the form as submitting.
    pub async fn begin_submit(&mut self, session: &Session) -> Result<PendingSubmit, SubmitOutcome> {
        if self.visibility == Visibility::Collapsed {
            return Err(SubmitOutcome::Collapsed);
        }
        if self.submitting {
            log::debug!("Save requested while a previous save is still running");
            return Err(SubmitOutcome::Busy);
        }

        if self.close_on == CloseBehavior::Click {
            self.host.set_edit_reminder_open(false).await;
        }

        if let Some(error) = validate(&self.draft).into_iter().next() {
            log::debug!("Edit form rejected: {error}");
            self.notifier.error(&error.to_string());
            return Err(SubmitOutcome::Invalid(error));
        }

        let Some(reminder) = &self.reminder else {
            log::warn!("Save requested without a reminder loaded");
            self.notifier.error(INTERNAL_ERROR_MESSAGE);
            return Err(SubmitOutcome::NoReminder);
        };

        let request = self
            .draft
            .to_request(reminder.id.clone(), session.user_id.clone());
        self.submitting = true;

        Ok(PendingSubmit { request })
    }

    /// Second half of [`submit`](Self::submit): reports the service's answer.
    pub async fn finish_submit(
        &mut self,
        pending: PendingSubmit,
        result: Result<(), ApiError>,
    ) -> SubmitOutcome {
        self.submitting = false;
        let task_id = &pending.request.task_id;

        match result {
            Ok(()) => {
                log::info!("Reminder {task_id} saved");
                self.notifier.success(SAVED_MESSAGE);
                self.host.fetch_all_tasks().await;
                self.draft.clear();

                if self.close_on == CloseBehavior::Success {
                    self.host.set_edit_reminder_open(false).await;
                }
                SubmitOutcome::Saved
            }
            Err(error) => {
                log::error!("Could not save reminder {task_id}: {error}");
                self.notifier.error(INTERNAL_ERROR_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }

    /// Drop the selection and hide the dialog without saving.
    pub async fn cancel(&mut self) {
        self.host.set_edit_reminder_open(false).await;
        self.host.set_reminder_details(None).await;
        self.draft.clear();
    }
}
