use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use chorecal_core::types::Frequency;

/// Recurrence rule attached to a chore.
///
/// `end_date` is inclusive: an occurrence landing exactly on it is part of
/// the series. `None` leaves the series open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// A scheduled task, one-off or recurring.
///
/// `date` is the series anchor (first occurrence) as a `YYYY-MM-DD` string.
/// It stays a string here because the store must round-trip whatever was
/// persisted; the expansion layer parses it and reports a malformed value
/// as a per-chore error instead of refusing to load the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    pub id: uuid::Uuid,
    pub title: String,
    pub description: String,
    pub date: String,
    pub color: String,
    #[serde(default)]
    pub recurrence: Option<RecurrenceRule>,
    /// Completion flags keyed by occurrence key. Entries exist only for
    /// dates explicitly toggled; a missing key means "not completed".
    /// Keys are never validated against the current series: editing
    /// `date` or `recurrence` may strand old entries, and they stay.
    #[serde(default)]
    pub completed: HashMap<String, bool>,
}

impl Chore {
    /// Whether the occurrence on `key` (a `YYYY-MM-DD` string) has been
    /// marked complete.
    #[must_use]
    pub fn is_completed_on(&self, key: &str) -> bool {
        self.completed.get(key).copied().unwrap_or(false)
    }
}

/// Fields supplied when creating a chore. The id and the empty completion
/// map are filled in by the service.
#[derive(Debug, Clone)]
pub struct NewChore {
    pub title: String,
    pub description: String,
    pub date: String,
    pub color: String,
    pub recurrence: Option<RecurrenceRule>,
}

/// Partial field update for an existing chore. `None` leaves a field
/// untouched; `recurrence` is doubly optional so a rule can be cleared
/// (`Some(None)`) as well as replaced.
#[derive(Debug, Clone, Default)]
pub struct ChoreUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub color: Option<String>,
    pub recurrence: Option<Option<RecurrenceRule>>,
}

impl ChoreUpdate {
    /// Apply this update in place. Changing `date` or `recurrence`
    /// silently reinterprets the whole series from the new anchor;
    /// completion entries are never touched here.
    pub fn apply(self, chore: &mut Chore) {
        if let Some(title) = self.title {
            chore.title = title;
        }
        if let Some(description) = self.description {
            chore.description = description;
        }
        if let Some(date) = self.date {
            chore.date = date;
        }
        if let Some(color) = self.color {
            chore.color = color;
        }
        if let Some(recurrence) = self.recurrence {
            chore.recurrence = recurrence;
        }
    }
}
