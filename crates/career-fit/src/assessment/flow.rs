use std::sync::Arc;

use tracing::{debug, warn};

use super::answers::{Answer, AnswerError, AnswerStore, RawAnswer};
use super::domain::Question;
use super::navigation::Screen;
use super::render::QuestionView;
use super::service::{AssessmentService, AssessmentServiceError};
use super::snapshot::{Snapshot, SnapshotStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress { index: usize },
    Submitted,
}

/// Result of a successful `next`.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowStep {
    Advanced { index: usize },
    Submitted { snapshot: Snapshot, screen: Screen },
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("question {0} must be answered before moving on")]
    Unanswered(&'static str),
    #[error("assessment has already been submitted")]
    AlreadySubmitted,
    #[error("question {0} is not part of the assessment")]
    UnknownQuestion(String),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Submit(#[from] AssessmentServiceError),
}

/// One pass through the catalog.
///
/// The session owns its answers and position. The index only moves through
/// [`next`](Self::next) and [`previous`](Self::previous) and always stays within
/// the catalog bounds; the only way out is submitting from the last question.
pub struct AssessmentSession<S> {
    service: Arc<AssessmentService<S>>,
    answers: AnswerStore,
    state: SessionState,
}

impl<S> AssessmentSession<S>
where
    S: SnapshotStore + 'static,
{
    pub(crate) fn new(service: Arc<AssessmentService<S>>) -> Self {
        Self {
            service,
            answers: AnswerStore::new(),
            state: SessionState::InProgress { index: 0 },
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn index(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { index } => Some(index),
            SessionState::Submitted => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SessionState::Submitted
    }

    pub fn total(&self) -> usize {
        self.service.catalog().count()
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn current(&self) -> Option<&Question> {
        self.index()
            .map(|index| self.service.catalog().question(index))
    }

    /// Everything a renderer needs to draw the current question.
    pub fn view(&self) -> Option<QuestionView<'_>> {
        let index = self.index()?;
        let question = self.service.catalog().question(index);
        Some(QuestionView::new(
            question,
            self.answers.get(question.id),
            index,
            self.total(),
        ))
    }

    /// Record an answer for the current question.
    pub fn answer(&mut self, raw: RawAnswer) -> Result<&Answer, FlowError> {
        let index = self.index().ok_or(FlowError::AlreadySubmitted)?;
        let question = self.service.catalog().question(index);
        Ok(self.answers.set(question, raw)?)
    }

    /// Record an answer for any question by id without moving.
    pub fn answer_question(&mut self, question_id: &str, raw: RawAnswer) -> Result<&Answer, FlowError> {
        if self.is_submitted() {
            return Err(FlowError::AlreadySubmitted);
        }
        let question = self
            .service
            .catalog()
            .find(question_id)
            .ok_or_else(|| FlowError::UnknownQuestion(question_id.to_string()))?;
        Ok(self.answers.set(question, raw)?)
    }

    /// True when the current question holds any answer, an empty edit included.
    pub fn can_advance(&self) -> bool {
        self.current()
            .is_some_and(|question| self.answers.is_answered(question.id))
    }

    pub fn can_go_back(&self) -> bool {
        self.index().is_some_and(|index| index > 0)
    }

    /// Move forward, or score and persist when on the last question.
    pub fn next(&mut self) -> Result<FlowStep, FlowError> {
        let index = self.index().ok_or(FlowError::AlreadySubmitted)?;
        let question = self.service.catalog().question(index);
        if !self.answers.is_answered(question.id) {
            return Err(FlowError::Unanswered(question.id));
        }

        if index + 1 < self.total() {
            let index = index + 1;
            self.state = SessionState::InProgress { index };
            debug!(index, "advanced to next question");
            return Ok(FlowStep::Advanced { index });
        }

        let snapshot = match self.service.complete(&self.answers) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "assessment could not be saved");
                return Err(err.into());
            }
        };
        self.state = SessionState::Submitted;

        Ok(FlowStep::Submitted {
            snapshot,
            screen: Screen::Results,
        })
    }

    /// Step back one question. No-op on the first question.
    pub fn previous(&mut self) -> Result<usize, FlowError> {
        let index = self.index().ok_or(FlowError::AlreadySubmitted)?;
        let index = index.saturating_sub(1);
        self.state = SessionState::InProgress { index };
        debug!(index, "returned to previous question");
        Ok(index)
    }
}
