//! Library resources: articles, videos, and guides for families and schools.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::query::{Entry, Filter};

/// A single item in the content library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: u64,
    pub title: String,
    pub summary: String,
    pub kind: ResourceKind,
    pub topic: Topic,
    pub author: String,
    pub published_on: Date,

    /// Reading or viewing time.
    pub minutes: u32,
}

/// The format of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Article,
    Video,
    Guide,
    Worksheet,
    Podcast,
}

/// What a resource or dialogue session is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Topic {
    Communication,
    ConflictResolution,
    EmotionalWellbeing,
    Academics,
    ScreenTime,
    Boundaries,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFilters {
    pub kind: Filter<ResourceKind>,
    pub topic: Filter<Topic>,
}

/// A resource together with related reading on the same topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDetail {
    pub resource: Resource,
    pub related: Vec<Resource>,
}

impl Entry for Resource {
    type Filters = ResourceFilters;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.summary.as_str(),
            self.author.as_str(),
        ]
    }

    fn admits(&self, filters: &ResourceFilters) -> bool {
        filters.kind.admits(&self.kind) && filters.topic.admits(&self.topic)
    }
}

impl ResourceKind {
    /// Translation key for display.
    pub fn label_key(self) -> &'static str {
        match self {
            ResourceKind::Article => "resource.kind.article",
            ResourceKind::Video => "resource.kind.video",
            ResourceKind::Guide => "resource.kind.guide",
            ResourceKind::Worksheet => "resource.kind.worksheet",
            ResourceKind::Podcast => "resource.kind.podcast",
        }
    }
}

impl Topic {
    /// Translation key for display.
    pub fn label_key(self) -> &'static str {
        match self {
            Topic::Communication => "topic.communication",
            Topic::ConflictResolution => "topic.conflict-resolution",
            Topic::EmotionalWellbeing => "topic.emotional-wellbeing",
            Topic::Academics => "topic.academics",
            Topic::ScreenTime => "topic.screen-time",
            Topic::Boundaries => "topic.boundaries",
        }
    }
}
