//! Conflict log types: tracked family conflicts and their progress.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::query::{Entry, Filter};

/// Progress at or above this value resolves a conflict.
pub const RESOLVED_AT: u8 = 100;

/// A conflict recorded in the family conflict log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictLogEntry {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: ConflictStatus,

    /// Percent complete, 0–100.
    pub progress: u8,

    /// Who logged the conflict.
    pub created_by: String,
    pub created_on: Date,

    /// Progress history, oldest first.
    pub updates: Vec<ProgressNote>,
}

/// Where a conflict stands.
///
/// Derived from progress: only [`ConflictStatus::New`] is ever set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConflictStatus {
    New,
    InProgress,
    Resolved,
}

impl ConflictStatus {
    /// The status implied by a progress value.
    pub fn for_progress(progress: u8) -> Self {
        if progress >= RESOLVED_AT {
            ConflictStatus::Resolved
        } else {
            ConflictStatus::InProgress
        }
    }

    /// Translation key for display.
    pub fn label_key(self) -> &'static str {
        match self {
            ConflictStatus::New => "conflict.status.new",
            ConflictStatus::InProgress => "conflict.status.in-progress",
            ConflictStatus::Resolved => "conflict.status.resolved",
        }
    }
}

/// One recorded step of progress on a conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressNote {
    pub progress: u8,
    pub description: String,
    pub recorded_on: Date,
}

/// The form data for logging a new conflict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictDraft {
    pub title: String,
    pub description: String,
}

/// A requested progress change. Both fields are required; zero progress is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub progress: Option<u8>,
    pub description: Option<String>,
}

/// A suggested approach for working through a conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub title: String,
    pub description: String,

    /// Words that make this solution relevant to a conflict.
    #[serde(skip)]
    pub keywords: Vec<String>,
}

/// A conflict together with suggested solutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictLogDetail {
    pub entry: ConflictLogEntry,
    pub solutions: Vec<Solution>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictLogFilters {
    pub status: Filter<ConflictStatus>,
}

impl Entry for ConflictLogEntry {
    type Filters = ConflictLogFilters;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn admits(&self, filters: &ConflictLogFilters) -> bool {
        filters.status.admits(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_progress_threshold() {
        assert_eq!(ConflictStatus::for_progress(0), ConflictStatus::InProgress);
        assert_eq!(ConflictStatus::for_progress(99), ConflictStatus::InProgress);
        assert_eq!(ConflictStatus::for_progress(100), ConflictStatus::Resolved);
        assert_eq!(ConflictStatus::for_progress(u8::MAX), ConflictStatus::Resolved);
    }
}
