//! Career-fit assessment: question catalog, answer capture, flow control,
//! scoring, and results persistence.

pub mod answers;
pub mod catalog;
pub mod domain;
pub mod flow;
pub mod navigation;
pub mod render;
pub mod results;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use answers::{Answer, AnswerError, AnswerStore, RawAnswer};
pub use catalog::{CatalogError, QuestionCatalog};
pub use domain::{
    ChoiceOption, EditingTask, Question, QuestionCategory, QuestionId, QuestionKind,
    WiscarDimension, SCALE_DEFAULT, SCALE_MAX, SCALE_MIN,
};
pub use flow::{AssessmentSession, FlowError, FlowStep, SessionState};
pub use navigation::{AssessmentApp, Feature, LandingPage, ResultsPage, Screen};
pub use render::{
    drive, DriveError, DriveOutcome, InputSurface, QuestionRenderer, QuestionView, RenderError,
    ScriptedRenderer, UserAction,
};
pub use results::{ResultsView, ScoreLine};
pub use router::{assessment_router, SubmissionRequest};
pub use scoring::{
    CareerPath, Recommendation, ScoreComponent, ScoreReport, ScoringConfig, ScoringEngine,
};
pub use service::{AssessmentService, AssessmentServiceError};
pub use snapshot::{
    FileSnapshotStore, InMemorySnapshotStore, Snapshot, SnapshotError, SnapshotStore,
};
