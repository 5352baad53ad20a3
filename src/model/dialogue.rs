//! Family dialogue sessions: guided conversations and their records.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::query::{Entry, Filter};
use super::resource::Topic;

/// A guided conversation script families can work through together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueScript {
    pub id: u64,
    pub title: String,
    pub topic: Topic,
    pub steps: Vec<DialogueStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueStep {
    pub title: String,
    pub prompt: String,
    pub minutes: u32,
}

impl DialogueScript {
    /// Suggested length of the whole session.
    pub fn minutes(&self) -> u32 {
        self.steps.iter().map(|s| s.minutes).sum()
    }
}

/// A dialogue session a family has held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueSession {
    pub id: u64,
    pub script_id: u64,
    pub title: String,
    pub topic: Topic,
    pub participants: Vec<String>,
    pub held_on: Date,
    pub minutes: u32,

    /// What the family took away from the session.
    pub reflection: String,
}

/// The form data for recording a held session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDraft {
    pub script_id: u64,
    pub participants: Vec<String>,

    /// Defaults to the script's suggested length when absent.
    pub minutes: Option<u32>,
    pub reflection: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueFilters {
    pub topic: Filter<Topic>,
}

impl Entry for DialogueSession {
    type Filters = DialogueFilters;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.reflection.as_str()];
        fields.extend(self.participants.iter().map(String::as_str));
        fields
    }

    fn admits(&self, filters: &DialogueFilters) -> bool {
        filters.topic.admits(&self.topic)
    }
}
