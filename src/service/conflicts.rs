//! Conflict log service: log conflicts and track progress toward resolution.

use std::sync::Arc;

use jiff::Zoned;
use tracing::{info, warn};

use crate::backend::{Backend, MemoryBackend, seed};
use crate::model::{
    ConflictDraft, ConflictLogDetail, ConflictLogEntry, ConflictLogFilters, ConflictStatus,
    ListQuery, Page, ProgressNote, ProgressUpdate, Solution,
};
use crate::publish::Subscription;
use crate::session::Session;

use super::{Catalog, ListSource};

/// How many suggestions a detail view carries.
const SOLUTION_LIMIT: usize = 3;

pub struct ConflictLogService<B = MemoryBackend<ConflictLogEntry>> {
    catalog: Catalog<ConflictLogEntry, B>,
    solutions: Vec<Solution>,
    current: Option<ConflictLogDetail>,
}

impl ConflictLogService {
    /// A service over the seeded conflict log and solution library.
    pub fn seeded() -> Self {
        Self::new(
            MemoryBackend::with_entries(seed::conflict_logs()),
            seed::solutions(),
        )
    }
}

impl<B: Backend<ConflictLogEntry>> ConflictLogService<B> {
    pub fn new(backend: B, solutions: Vec<Solution>) -> Self {
        Self {
            catalog: Catalog::new("conflicts", backend),
            solutions,
            current: None,
        }
    }

    pub fn list(&self, query: &ListQuery<ConflictLogFilters>) -> Page<ConflictLogEntry> {
        self.catalog.list(query)
    }

    pub fn get(&self, id: u64) -> Option<ConflictLogEntry> {
        self.catalog.get(id)
    }

    /// Logs a new conflict as the session's current user.
    ///
    /// Returns `None` when the title is blank, nobody is signed in, or the
    /// backend rejects the write.
    pub fn create(
        &mut self,
        draft: ConflictDraft,
        session: &dyn Session,
    ) -> Option<ConflictLogEntry> {
        if draft.title.trim().is_empty() {
            warn!("conflict title is required");
            return None;
        }
        let created_by = match session.current_user() {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "cannot log conflict");
                return None;
            }
        };

        let created = self.catalog.insert(|id| ConflictLogEntry {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            status: ConflictStatus::New,
            progress: 0,
            created_by,
            created_on: Zoned::now().date(),
            updates: Vec::new(),
        })?;
        info!(id = created.id, "logged conflict");
        Some(created)
    }

    /// Records progress on a conflict and derives its new status.
    ///
    /// Both fields of `update` are required; zero is a valid progress value,
    /// values above 100 are not. Returns false, leaving the collection
    /// unchanged, for a missing id, missing or invalid fields, or a backend
    /// failure.
    pub fn update_progress(&mut self, id: u64, update: ProgressUpdate) -> bool {
        let (Some(progress), Some(description)) = (update.progress, update.description) else {
            warn!(id, "progress update needs both progress and description");
            return false;
        };
        if progress > 100 {
            warn!(id, progress, "progress must be between 0 and 100");
            return false;
        }
        let Some(mut entry) = self.catalog.get(id) else {
            warn!(id, "no conflict to update");
            return false;
        };

        entry.progress = progress;
        entry.status = ConflictStatus::for_progress(progress);
        entry.updates.push(ProgressNote {
            progress,
            description,
            recorded_on: Zoned::now().date(),
        });

        if !self.catalog.replace(entry.clone()) {
            return false;
        }
        info!(id, progress, status = ?entry.status, "recorded progress");

        if let Some(current) = &mut self.current
            && current.entry.id == id
        {
            current.entry = entry;
        }
        true
    }

    /// Loads a conflict with suggested solutions.
    ///
    /// Replaces the previously cached detail, if any.
    pub fn detail(&mut self, id: u64) -> Option<ConflictLogDetail> {
        let entry = self.catalog.get(id)?;
        let solutions = self.suggest(&entry);
        let detail = ConflictLogDetail { entry, solutions };
        self.current = Some(detail.clone());
        Some(detail)
    }

    /// The most recently loaded detail.
    pub fn current(&self) -> Option<&ConflictLogDetail> {
        self.current.as_ref()
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn published(&self) -> Arc<Vec<ConflictLogEntry>> {
        self.catalog.published()
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&Arc<Vec<ConflictLogEntry>>) + 'static,
    ) -> Subscription {
        self.catalog.subscribe(callback)
    }

    /// Solutions whose keywords appear in the conflict, else the general ones.
    fn suggest(&self, entry: &ConflictLogEntry) -> Vec<Solution> {
        let text = format!("{} {}", entry.title, entry.description).to_lowercase();
        let matched: Vec<Solution> = self
            .solutions
            .iter()
            .filter(|s| s.keywords.iter().any(|k| text.contains(k.as_str())))
            .take(SOLUTION_LIMIT)
            .cloned()
            .collect();
        if !matched.is_empty() {
            return matched;
        }
        self.solutions
            .iter()
            .filter(|s| s.keywords.is_empty())
            .take(SOLUTION_LIMIT)
            .cloned()
            .collect()
    }
}

impl<B: Backend<ConflictLogEntry>> ListSource<ConflictLogEntry> for ConflictLogService<B> {
    fn fetch(&self, query: &ListQuery<ConflictLogFilters>) -> Option<Page<ConflictLogEntry>> {
        self.catalog.fetch(query)
    }
}
