use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::{
    assessment_router, AssessmentService, ChoiceOption, InMemorySnapshotStore, Question,
    QuestionCatalog, QuestionCategory, QuestionKind, RawAnswer, ScoringConfig, Snapshot,
    SnapshotError, SnapshotStore, WiscarDimension,
};

pub(super) const EDIT_ANSWER: &str = "Free trial, 30 days";

/// Scale 4, first option, or the stock rewrite, depending on the question kind.
pub(super) fn typical_answer(question: &Question) -> RawAnswer {
    match &question.kind {
        QuestionKind::Scale => RawAnswer::Number(4),
        QuestionKind::SingleChoice { options } | QuestionKind::ScenarioChoice { options, .. } => {
            RawAnswer::Text(options[0].label.to_string())
        }
        QuestionKind::FreeTextEdit { .. } => RawAnswer::Text(EDIT_ANSWER.to_string()),
    }
}

pub(super) fn typical_answers(catalog: &QuestionCatalog) -> Vec<RawAnswer> {
    catalog.questions().iter().map(typical_answer).collect()
}

/// Maximum scale, best-weighted option, and rewrites that meet every rubric criterion.
pub(super) fn best_answer(question: &Question) -> RawAnswer {
    match &question.kind {
        QuestionKind::Scale => RawAnswer::Number(7),
        QuestionKind::SingleChoice { options } | QuestionKind::ScenarioChoice { options, .. } => {
            let best = options
                .iter()
                .max_by_key(|option| option.weight)
                .expect("choice question has options");
            RawAnswer::Text(best.label.to_string())
        }
        QuestionKind::FreeTextEdit { .. } => RawAnswer::Text(
            match question.id {
                "tech_2" => "That email looks incomplete. Check it and try again.",
                "tech_4" => "Get updates",
                _ => "Open Settings to create your profile.",
            }
            .to_string(),
        ),
    }
}

pub(super) fn sheet<F>(catalog: &QuestionCatalog, answer: F) -> BTreeMap<String, RawAnswer>
where
    F: Fn(&Question) -> RawAnswer,
{
    catalog
        .questions()
        .iter()
        .map(|question| (question.id.to_string(), answer(question)))
        .collect()
}

pub(super) fn build_service() -> (
    Arc<AssessmentService<InMemorySnapshotStore>>,
    Arc<InMemorySnapshotStore>,
) {
    let store = Arc::new(InMemorySnapshotStore::new());
    let service = Arc::new(AssessmentService::new(
        QuestionCatalog::standard(),
        store.clone(),
        ScoringConfig::default(),
    ));
    (service, store)
}

pub(super) fn service_with<S>(store: S) -> Arc<AssessmentService<S>>
where
    S: SnapshotStore + 'static,
{
    Arc::new(AssessmentService::new(
        QuestionCatalog::standard(),
        Arc::new(store),
        ScoringConfig::default(),
    ))
}

/// One single-option-pair choice question per dimension; picking "target"
/// scores `weight` in every dimension.
pub(super) fn uniform_catalog(weight: u8) -> QuestionCatalog {
    const IDS: [&str; 8] = [
        "uniform_psych",
        "uniform_tech",
        "uniform_will",
        "uniform_interest",
        "uniform_skill",
        "uniform_cognitive",
        "uniform_ability",
        "uniform_real_world",
    ];

    let questions = QuestionCategory::dimensions()
        .into_iter()
        .zip(IDS)
        .map(|(category, id)| Question {
            id,
            category,
            prompt: "Pick the target",
            kind: QuestionKind::SingleChoice {
                options: vec![ChoiceOption::new("target", weight), ChoiceOption::new("other", 0)],
            },
        })
        .collect();

    QuestionCatalog::new(questions).expect("uniform catalog validates")
}

pub(super) fn wiscar_dimensions() -> [WiscarDimension; 6] {
    WiscarDimension::ordered()
}

/// Store that keeps every snapshot it was asked to save.
#[derive(Default, Clone)]
pub(super) struct RecordingStore {
    pub(super) saved: Arc<Mutex<Vec<Snapshot>>>,
}

impl RecordingStore {
    pub(super) fn saves(&self) -> Vec<Snapshot> {
        self.saved.lock().expect("store mutex poisoned").clone()
    }
}

impl SnapshotStore for RecordingStore {
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        self.saved
            .lock()
            .expect("store mutex poisoned")
            .push(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        Ok(self
            .saved
            .lock()
            .expect("store mutex poisoned")
            .last()
            .cloned())
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        self.saved.lock().expect("store mutex poisoned").clear();
        Ok(())
    }
}

/// Store whose writes always fail.
pub(super) struct UnavailableStore;

impl SnapshotStore for UnavailableStore {
    fn save(&self, _snapshot: &Snapshot) -> Result<(), SnapshotError> {
        Err(SnapshotError::Unavailable("disk offline".to_string()))
    }

    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        Ok(None)
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        Err(SnapshotError::Unavailable("disk offline".to_string()))
    }
}

/// Store holding an unparseable snapshot.
pub(super) struct CorruptStore;

impl SnapshotStore for CorruptStore {
    fn save(&self, _snapshot: &Snapshot) -> Result<(), SnapshotError> {
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let err = serde_json::from_str::<Snapshot>("{\"report\":")
            .expect_err("truncated json never parses");
        Err(SnapshotError::Malformed(err))
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        Ok(())
    }
}

pub(super) fn router_with_service(
    service: Arc<AssessmentService<InMemorySnapshotStore>>,
) -> axum::Router {
    assessment_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
