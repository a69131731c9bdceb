use std::{fmt, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LEN: usize = 50;
pub const NOTES_MAX_LEN: usize = 2000;

/// The API stores calendar dates as timestamps pinned to UTC midnight.
const MIDNIGHT_SUFFIX: &str = "T00:00:00.000Z";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(String);

impl ReminderId {
    pub fn new(inner: impl Into<String>) -> Self {
        Self(inner.into())
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reminder record as the task service returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Reminder {
    #[serde(rename = "_id")]
    pub id: ReminderId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub flag: Option<bool>,
}

impl Reminder {
    /// Calendar part of the stored date, or an empty string when the record has none.
    pub fn calendar_date(&self) -> &str {
        self.date.as_deref().map(strip_midnight_suffix).unwrap_or_default()
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.unwrap_or(false)
    }
}

pub fn strip_midnight_suffix(date: &str) -> &str {
    match date.strip_suffix(MIDNIGHT_SUFFIX) {
        Some(calendar_date) => calendar_date,
        None => {
            if date.contains('T') {
                log::warn!("Reminder date {date:?} is not pinned to midnight, keeping it as is");
            }
            date
        }
    }
}

pub async fn load_from_file(path: &Path) -> anyhow::Result<Reminder> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read reminder from {}", path.display()))?;

    let reminder: Reminder = serde_json::from_str(&contents)
        .with_context(|| format!("{} does not contain a reminder record", path.display()))?;

    log::info!("Loaded reminder {} from {}", reminder.id, path.display());
    Ok(reminder)
}
