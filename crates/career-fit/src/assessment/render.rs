use std::collections::VecDeque;
use std::io;

use super::answers::{Answer, RawAnswer};
use super::domain::{Question, QuestionKind, SCALE_DEFAULT, SCALE_MAX, SCALE_MIN};
use super::flow::{AssessmentSession, FlowError, FlowStep};
use super::snapshot::{Snapshot, SnapshotStore};

/// Type-specific input state for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSurface {
    /// `value` falls back to the midpoint; `recorded` is false until the user commits a value.
    Scale {
        min: u8,
        max: u8,
        value: u8,
        recorded: bool,
    },
    Choice {
        scenario: Option<&'static str>,
        options: Vec<&'static str>,
        selected: Option<usize>,
    },
    Edit {
        original: &'static str,
        instruction: &'static str,
        text: Option<String>,
    },
}

impl InputSurface {
    pub fn for_question(question: &Question, current: Option<&Answer>) -> Self {
        match &question.kind {
            QuestionKind::Scale => {
                let recorded = match current {
                    Some(Answer::Scale(value)) => Some(*value),
                    _ => None,
                };
                Self::Scale {
                    min: SCALE_MIN,
                    max: SCALE_MAX,
                    value: recorded.unwrap_or(SCALE_DEFAULT),
                    recorded: recorded.is_some(),
                }
            }
            QuestionKind::SingleChoice { options } | QuestionKind::ScenarioChoice { options, .. } => {
                let scenario = match &question.kind {
                    QuestionKind::ScenarioChoice { scenario, .. } => Some(*scenario),
                    _ => None,
                };
                let selected = match current {
                    Some(Answer::Choice(label)) => options
                        .iter()
                        .position(|option| option.label == label.as_str()),
                    _ => None,
                };
                Self::Choice {
                    scenario,
                    options: options.iter().map(|option| option.label).collect(),
                    selected,
                }
            }
            QuestionKind::FreeTextEdit { task } => Self::Edit {
                original: task.original,
                instruction: task.instruction,
                text: match current {
                    Some(Answer::Text(text)) => Some(text.clone()),
                    _ => None,
                },
            },
        }
    }
}

/// Render model for the question at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub question: &'a Question,
    pub surface: InputSurface,
    pub index: usize,
    pub total: usize,
    pub answered: bool,
}

impl<'a> QuestionView<'a> {
    pub fn new(question: &'a Question, current: Option<&Answer>, index: usize, total: usize) -> Self {
        Self {
            question,
            surface: InputSurface::for_question(question, current),
            index,
            total,
            answered: current.is_some(),
        }
    }

    pub fn position_label(&self) -> String {
        format!("Question {} of {}", self.index + 1, self.total)
    }

    pub fn progress_pct(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.index + 1) * 100 / self.total).min(100) as u8
    }

    pub fn badge(&self) -> &'static str {
        self.question.category.badge()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_advance(&self) -> bool {
        self.answered
    }

    pub fn is_final(&self) -> bool {
        self.index + 1 == self.total
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_final() {
            "Complete Assessment"
        } else {
            "Next"
        }
    }
}

/// What the user did on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Answer(RawAnswer),
    Next,
    Previous,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("input cancelled")]
    Cancelled,
    #[error("no scripted actions remain")]
    Exhausted,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("renderer failed: {0}")]
    Backend(String),
}

/// Front-end that draws a question and reports the next user action.
///
/// Renderers keep no answer state of their own: every value change comes back
/// as a [`UserAction::Answer`] and the session decides what to keep.
pub trait QuestionRenderer {
    fn render(&mut self, view: &QuestionView<'_>) -> Result<UserAction, RenderError>;

    /// Called when the session refused the last action.
    fn reject(&mut self, _view: &QuestionView<'_>, _message: &str) {}
}

/// Renderer that replays a fixed queue of actions.
#[derive(Debug, Default)]
pub struct ScriptedRenderer {
    actions: VecDeque<UserAction>,
    rendered: Vec<&'static str>,
    rejections: Vec<String>,
}

impl ScriptedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, raw: impl Into<RawAnswer>) -> Self {
        self.actions.push_back(UserAction::Answer(raw.into()));
        self
    }

    pub fn next(mut self) -> Self {
        self.actions.push_back(UserAction::Next);
        self
    }

    pub fn previous(mut self) -> Self {
        self.actions.push_back(UserAction::Previous);
        self
    }

    pub fn quit(mut self) -> Self {
        self.actions.push_back(UserAction::Quit);
        self
    }

    /// Answer then advance, once per value.
    pub fn answering<I>(mut self, answers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RawAnswer>,
    {
        for raw in answers {
            self = self.answer(raw).next();
        }
        self
    }

    /// Question ids in the order they were shown.
    pub fn rendered(&self) -> &[&'static str] {
        &self.rendered
    }

    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl QuestionRenderer for ScriptedRenderer {
    fn render(&mut self, view: &QuestionView<'_>) -> Result<UserAction, RenderError> {
        self.rendered.push(view.question.id);
        self.actions.pop_front().ok_or(RenderError::Exhausted)
    }

    fn reject(&mut self, _view: &QuestionView<'_>, message: &str) {
        self.rejections.push(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DriveOutcome {
    Submitted(Snapshot),
    Abandoned { index: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum DriveError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// Feed renderer actions into `session` until it is submitted or the user quits.
///
/// Invalid answers and a blocked `next` are reported back through
/// [`QuestionRenderer::reject`] and the loop continues.
pub fn drive<S, R>(session: &mut AssessmentSession<S>, renderer: &mut R) -> Result<DriveOutcome, DriveError>
where
    S: SnapshotStore + 'static,
    R: QuestionRenderer + ?Sized,
{
    loop {
        let (index, action) = {
            let view = session.view().ok_or(FlowError::AlreadySubmitted)?;
            (view.index, renderer.render(&view)?)
        };

        let refused = match action {
            UserAction::Answer(raw) => match session.answer(raw) {
                Ok(_) => None,
                Err(FlowError::Answer(err)) => Some(err.to_string()),
                Err(other) => return Err(other.into()),
            },
            UserAction::Next => match session.next() {
                Ok(FlowStep::Advanced { .. }) => None,
                Ok(FlowStep::Submitted { snapshot, .. }) => {
                    return Ok(DriveOutcome::Submitted(snapshot))
                }
                Err(err @ FlowError::Unanswered(_)) => Some(err.to_string()),
                Err(other) => return Err(other.into()),
            },
            UserAction::Previous => {
                session.previous()?;
                None
            }
            UserAction::Quit => return Ok(DriveOutcome::Abandoned { index }),
        };

        if let Some(message) = refused {
            if let Some(view) = session.view() {
                renderer.reject(&view, &message);
            }
        }
    }
}
