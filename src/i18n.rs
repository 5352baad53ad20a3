//! Translation of display labels.
//!
//! Model enums expose translation keys (`label_key`); the CLI turns them into
//! text through a [`Translator`]. Unknown keys come back unchanged so a
//! missing entry shows up as its key rather than as an empty label.

use std::collections::HashMap;

const ENGLISH: &[(&str, &str)] = &[
    ("resource.kind.article", "Article"),
    ("resource.kind.video", "Video"),
    ("resource.kind.guide", "Guide"),
    ("resource.kind.worksheet", "Worksheet"),
    ("resource.kind.podcast", "Podcast"),
    ("topic.communication", "Communication"),
    ("topic.conflict-resolution", "Conflict resolution"),
    ("topic.emotional-wellbeing", "Emotional wellbeing"),
    ("topic.academics", "Academics"),
    ("topic.screen-time", "Screen time"),
    ("topic.boundaries", "Boundaries"),
    ("conflict.status.new", "New"),
    ("conflict.status.in-progress", "In progress"),
    ("conflict.status.resolved", "Resolved"),
    ("survey.category.low", "Low conflict"),
    ("survey.category.medium", "Moderate conflict"),
    ("survey.category.high", "High conflict"),
    ("list.empty", "Nothing to show"),
    ("list.more", "More available"),
    ("list.end", "End of list"),
    ("list.load-failed", "Could not load items. Pull to refresh to try again."),
];

/// A key-to-text lookup for one language.
#[derive(Debug, Clone)]
pub struct Translator {
    entries: HashMap<&'static str, &'static str>,
}

impl Translator {
    pub fn english() -> Self {
        Self {
            entries: ENGLISH.iter().copied().collect(),
        }
    }

    pub fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .map_or_else(|| key.to_string(), |text| (*text).to_string())
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::english()
    }
}
