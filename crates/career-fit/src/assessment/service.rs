use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::answers::{AnswerError, AnswerStore, RawAnswer};
use super::catalog::QuestionCatalog;
use super::flow::AssessmentSession;
use super::scoring::{ScoringConfig, ScoringEngine};
use super::snapshot::{Snapshot, SnapshotError, SnapshotStore};

/// Service composing the catalog, the scoring engine, and the snapshot store.
pub struct AssessmentService<S> {
    catalog: Arc<QuestionCatalog>,
    engine: ScoringEngine,
    store: Arc<S>,
}

impl<S> AssessmentService<S>
where
    S: SnapshotStore + 'static,
{
    pub fn new(catalog: QuestionCatalog, store: Arc<S>, config: ScoringConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            engine: ScoringEngine::new(config),
            store,
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Open a fresh session positioned on the first question.
    ///
    /// The stored snapshot is left alone; the next completed session replaces it.
    pub fn start_session(self: &Arc<Self>) -> AssessmentSession<S> {
        debug!(questions = self.catalog.count(), "starting assessment session");
        AssessmentSession::new(Arc::clone(self))
    }

    /// Score `answers` and persist the result as the current snapshot.
    pub fn complete(&self, answers: &AnswerStore) -> Result<Snapshot, AssessmentServiceError> {
        let report = self.engine.score(&self.catalog, answers);
        let snapshot = Snapshot {
            report,
            answers: answers.entries().clone(),
            completed_at: Utc::now(),
        };

        self.store.save(&snapshot)?;
        info!(
            overall = snapshot.report.overall_score,
            recommendation = snapshot.report.recommendation.label(),
            answered = answers.len(),
            "assessment snapshot saved"
        );

        Ok(snapshot)
    }

    /// Validate a complete answer sheet, then score and persist it.
    pub fn submit(
        &self,
        responses: BTreeMap<String, RawAnswer>,
    ) -> Result<Snapshot, AssessmentServiceError> {
        let mut answers = AnswerStore::new();
        for (question_id, raw) in responses {
            let question = self
                .catalog
                .find(&question_id)
                .ok_or(AssessmentServiceError::UnknownQuestion(question_id))?;
            answers.set(question, raw)?;
        }

        let missing: Vec<String> = self
            .catalog
            .questions()
            .iter()
            .filter(|question| !answers.is_answered(question.id))
            .map(|question| question.id.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(AssessmentServiceError::MissingAnswers(missing));
        }

        self.complete(&answers)
    }

    pub fn latest(&self) -> Result<Option<Snapshot>, AssessmentServiceError> {
        Ok(self.store.load()?)
    }

    pub fn reset(&self) -> Result<(), AssessmentServiceError> {
        self.store.clear()?;
        info!("assessment snapshot cleared");
        Ok(())
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("question {0} is not part of the assessment")]
    UnknownQuestion(String),
    #[error("answers missing for: {}", .0.join(", "))]
    MissingAnswers(Vec<String>),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
