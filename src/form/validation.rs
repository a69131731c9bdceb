use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::reminder::{NOTES_MAX_LEN, TITLE_MAX_LEN};

use super::ReminderDraft;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Notes,
    Date,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be at most {max} characters", max = TITLE_MAX_LEN)]
    TitleTooLong,
    #[error("A note is required")]
    NotesRequired,
    #[error("Notes must be at most {max} characters", max = NOTES_MAX_LEN)]
    NotesTooLong,
    #[error("Please add a date")]
    DateRequired,
    #[error("Please add a valid date")]
    DateInvalid,
    #[error("Please add a time")]
    TimeRequired,
    #[error("Please add a valid time")]
    TimeInvalid,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::TitleRequired | FieldError::TitleTooLong => Field::Title,
            FieldError::NotesRequired | FieldError::NotesTooLong => Field::Notes,
            FieldError::DateRequired | FieldError::DateInvalid => Field::Date,
            FieldError::TimeRequired | FieldError::TimeInvalid => Field::Time,
        }
    }
}

/// Checks the draft and returns its errors in display priority: title, notes, date, time.
pub fn validate(draft: &ReminderDraft) -> Vec<FieldError> {
    [
        check_title(draft.title()),
        check_notes(draft.notes()),
        check_date(draft.date()),
        check_time(draft.time()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn check_title(title: &str) -> Option<FieldError> {
    if title.is_empty() {
        Some(FieldError::TitleRequired)
    } else if title.chars().count() > TITLE_MAX_LEN {
        Some(FieldError::TitleTooLong)
    } else {
        None
    }
}

fn check_notes(notes: &str) -> Option<FieldError> {
    if notes.is_empty() {
        Some(FieldError::NotesRequired)
    } else if notes.chars().count() > NOTES_MAX_LEN {
        Some(FieldError::NotesTooLong)
    } else {
        None
    }
}

fn check_date(date: &str) -> Option<FieldError> {
    if date.is_empty() {
        Some(FieldError::DateRequired)
    } else if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
        Some(FieldError::DateInvalid)
    } else {
        None
    }
}

fn check_time(time: &str) -> Option<FieldError> {
    if time.is_empty() {
        Some(FieldError::TimeRequired)
    } else if TIME_FORMATS
        .iter()
        .all(|format| NaiveTime::parse_from_str(time, format).is_err())
    {
        Some(FieldError::TimeInvalid)
    } else {
        None
    }
}
