//! Dialogue session service: guided scripts and the sessions families hold.

use std::sync::Arc;

use jiff::Zoned;
use tracing::{info, warn};

use crate::backend::{Backend, MemoryBackend, seed};
use crate::model::{
    DialogueFilters, DialogueScript, DialogueSession, ListQuery, Page, SessionDraft,
};
use crate::publish::Subscription;

use super::{Catalog, ListSource};

pub struct DialogueService<B = MemoryBackend<DialogueSession>> {
    sessions: Catalog<DialogueSession, B>,
    scripts: Vec<DialogueScript>,
    current: Option<DialogueScript>,
}

impl DialogueService {
    /// A service over the seeded scripts and session history.
    pub fn seeded() -> Self {
        Self::new(
            MemoryBackend::with_entries(seed::dialogue_sessions()),
            seed::dialogue_scripts(),
        )
    }
}

impl<B: Backend<DialogueSession>> DialogueService<B> {
    pub fn new(backend: B, scripts: Vec<DialogueScript>) -> Self {
        Self {
            sessions: Catalog::new("dialogues", backend),
            scripts,
            current: None,
        }
    }

    /// Sessions already held.
    pub fn list(&self, query: &ListQuery<DialogueFilters>) -> Page<DialogueSession> {
        self.sessions.list(query)
    }

    pub fn get(&self, id: u64) -> Option<DialogueSession> {
        self.sessions.get(id)
    }

    pub fn scripts(&self) -> &[DialogueScript] {
        &self.scripts
    }

    /// Loads a script with its steps.
    ///
    /// Replaces the previously cached script, if any.
    pub fn script(&mut self, id: u64) -> Option<DialogueScript> {
        let script = self.scripts.iter().find(|s| s.id == id).cloned()?;
        self.current = Some(script.clone());
        Some(script)
    }

    pub fn current(&self) -> Option<&DialogueScript> {
        self.current.as_ref()
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    /// Records a session held from one of the scripts.
    ///
    /// Returns `None` for an unknown script, no participants, or a backend
    /// failure.
    pub fn record(&mut self, draft: SessionDraft) -> Option<DialogueSession> {
        let Some(script) = self.scripts.iter().find(|s| s.id == draft.script_id) else {
            warn!(script_id = draft.script_id, "no such dialogue script");
            return None;
        };
        let participants: Vec<String> = draft
            .participants
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
        if participants.is_empty() {
            warn!(script_id = script.id, "a session needs at least one participant");
            return None;
        }

        let title = script.title.clone();
        let topic = script.topic;
        let minutes = draft.minutes.unwrap_or_else(|| script.minutes());

        let session = self.sessions.insert(|id| DialogueSession {
            id,
            script_id: draft.script_id,
            title,
            topic,
            participants,
            held_on: Zoned::now().date(),
            minutes,
            reflection: draft.reflection.trim().to_string(),
        })?;
        info!(id = session.id, script_id = session.script_id, "recorded dialogue session");
        Some(session)
    }

    pub fn published(&self) -> Arc<Vec<DialogueSession>> {
        self.sessions.published()
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&Arc<Vec<DialogueSession>>) + 'static,
    ) -> Subscription {
        self.sessions.subscribe(callback)
    }
}

impl<B: Backend<DialogueSession>> ListSource<DialogueSession> for DialogueService<B> {
    fn fetch(&self, query: &ListQuery<DialogueFilters>) -> Option<Page<DialogueSession>> {
        self.sessions.fetch(query)
    }
}
