//! Survey types: the family conflict survey and its completed results.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::query::{Entry, Filter};

/// The highest value an answer option can carry.
pub const MAX_OPTION_VALUE: u8 = 4;

/// A survey definition with its questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u64,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// A selectable answer, valued 0 through [`MAX_OPTION_VALUE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub label: String,
    pub value: u8,
}

/// The option value chosen for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u64,
    pub value: u8,
}

/// Ordinal result band for a scaled survey score.
///
/// Ordered: a higher score never maps to a lower category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreCategory {
    Low,
    Medium,
    High,
}

impl ScoreCategory {
    /// Translation key for display.
    pub fn label_key(self) -> &'static str {
        match self {
            ScoreCategory::Low => "survey.category.low",
            ScoreCategory::Medium => "survey.category.medium",
            ScoreCategory::High => "survey.category.high",
        }
    }
}

/// A completed survey in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyHistoryItem {
    pub id: u64,
    pub survey_id: u64,
    pub title: String,
    pub completed_on: Date,

    /// Scaled score, 0–100.
    pub score: u8,
    pub category: ScoreCategory,

    /// How many questions were answered.
    pub answered: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyHistoryFilters {
    pub category: Filter<ScoreCategory>,
}

impl Entry for SurveyHistoryItem {
    type Filters = SurveyHistoryFilters;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn admits(&self, filters: &SurveyHistoryFilters) -> bool {
        filters.category.admits(&self.category)
    }
}
