//! Survey service: survey definitions, submissions, and completed history.

use std::collections::HashSet;
use std::sync::Arc;

use jiff::Zoned;
use tracing::{info, warn};

use crate::backend::{Backend, MemoryBackend, seed};
use crate::model::{
    Answer, ListQuery, MAX_OPTION_VALUE, Page, Survey, SurveyHistoryFilters, SurveyHistoryItem,
};
use crate::publish::Subscription;
use crate::scoring::{ScoreBands, score_answers};

use super::{Catalog, ListSource};

pub struct SurveyService<B = MemoryBackend<SurveyHistoryItem>> {
    history: Catalog<SurveyHistoryItem, B>,
    surveys: Vec<Survey>,
    bands: ScoreBands,
    current: Option<Survey>,
}

impl SurveyService {
    /// A service over the seeded surveys and history.
    pub fn seeded(bands: ScoreBands) -> Self {
        Self::new(
            MemoryBackend::with_entries(seed::survey_history()),
            seed::surveys(),
            bands,
        )
    }
}

impl<B: Backend<SurveyHistoryItem>> SurveyService<B> {
    pub fn new(backend: B, surveys: Vec<Survey>, bands: ScoreBands) -> Self {
        Self {
            history: Catalog::new("surveys", backend),
            surveys,
            bands,
            current: None,
        }
    }

    /// Completed surveys.
    pub fn history(&self, query: &ListQuery<SurveyHistoryFilters>) -> Page<SurveyHistoryItem> {
        self.history.list(query)
    }

    /// Every survey that can be taken.
    pub fn surveys(&self) -> &[Survey] {
        &self.surveys
    }

    /// Loads a survey with its questions.
    ///
    /// Replaces the previously cached survey, if any.
    pub fn survey(&mut self, id: u64) -> Option<Survey> {
        let survey = self.surveys.iter().find(|s| s.id == id).cloned()?;
        self.current = Some(survey.clone());
        Some(survey)
    }

    /// The most recently loaded survey.
    pub fn current(&self) -> Option<&Survey> {
        self.current.as_ref()
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    /// Scores a submission and records it in the history.
    ///
    /// Unanswered questions are allowed and lower the answered count.
    /// Returns `None` for an unknown survey, an answer to an unknown
    /// question, a question answered twice, a value off the option scale,
    /// or a backend failure.
    pub fn submit(&mut self, survey_id: u64, answers: &[Answer]) -> Option<SurveyHistoryItem> {
        let Some(survey) = self.surveys.iter().find(|s| s.id == survey_id) else {
            warn!(survey_id, "no such survey");
            return None;
        };

        let mut seen = HashSet::new();
        for answer in answers {
            let Some(question) = survey.questions.iter().find(|q| q.id == answer.question_id)
            else {
                warn!(survey_id, question_id = answer.question_id, "no such question");
                return None;
            };
            if !seen.insert(question.id) {
                warn!(survey_id, question_id = question.id, "question answered twice");
                return None;
            }
            if answer.value > MAX_OPTION_VALUE
                || !question.options.iter().any(|o| o.value == answer.value)
            {
                warn!(
                    survey_id,
                    question_id = question.id,
                    value = answer.value,
                    "answer is not one of the question's options"
                );
                return None;
            }
        }

        let values: Vec<u8> = answers.iter().map(|a| a.value).collect();
        let score = score_answers(&values, &self.bands);
        let title = survey.title.clone();

        let item = self.history.insert(|id| SurveyHistoryItem {
            id,
            survey_id,
            title,
            completed_on: Zoned::now().date(),
            score: score.scaled,
            category: score.category,
            answered: score.answered,
        })?;
        info!(id = item.id, survey_id, score = item.score, "survey completed");
        Some(item)
    }

    pub fn published(&self) -> Arc<Vec<SurveyHistoryItem>> {
        self.history.published()
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&Arc<Vec<SurveyHistoryItem>>) + 'static,
    ) -> Subscription {
        self.history.subscribe(callback)
    }
}

impl<B: Backend<SurveyHistoryItem>> ListSource<SurveyHistoryItem> for SurveyService<B> {
    fn fetch(&self, query: &ListQuery<SurveyHistoryFilters>) -> Option<Page<SurveyHistoryItem>> {
        self.history.fetch(query)
    }
}
