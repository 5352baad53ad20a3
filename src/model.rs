//! Core data model for Kinship.
//!
//! These types represent the platform's features:
//! library resources, the conflict log, surveys, and dialogue sessions,
//! plus the query and page types every feature shares.

mod conflict;
mod dialogue;
mod query;
mod resource;
mod survey;

pub use conflict::{
    ConflictDraft, ConflictLogDetail, ConflictLogEntry, ConflictLogFilters, ConflictStatus,
    ProgressNote, ProgressUpdate, RESOLVED_AT, Solution,
};
pub use dialogue::{DialogueFilters, DialogueScript, DialogueSession, DialogueStep, SessionDraft};
pub use query::{Entry, Filter, ListQuery, Page};
pub use resource::{Resource, ResourceDetail, ResourceFilters, ResourceKind, Topic};
pub use survey::{
    Answer, AnswerOption, MAX_OPTION_VALUE, Question, ScoreCategory, Survey, SurveyHistoryFilters,
    SurveyHistoryItem,
};
