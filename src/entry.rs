//! Entry records held by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Active,
    Finished,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Active => write!(f, "active"),
            EntryStatus::Finished => write!(f, "finished"),
        }
    }
}

/// A single submitted project.
///
/// Entries are created by the store and never change afterwards, so all
/// fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    id: String,
    title: String,
    description: String,
    count: i64,
    status: EntryStatus,
    created_at: DateTime<Utc>,
}

impl Entry {
    pub(crate) fn new(
        id: String,
        title: impl Into<String>,
        description: impl Into<String>,
        count: i64,
        status: EntryStatus,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            count,
            status,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of people assigned.
    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn status(&self) -> EntryStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
pub(crate) fn entry_with_status(id: &str, title: &str, status: EntryStatus) -> Entry {
    Entry::new(id.to_string(), title, "some description", 1, status)
}
