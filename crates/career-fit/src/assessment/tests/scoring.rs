use super::common::*;
use crate::assessment::{
    AnswerStore, Question, QuestionCatalog, RawAnswer, Recommendation, ScoringConfig,
    ScoringEngine, WiscarDimension,
};

fn answers_for<F>(catalog: &QuestionCatalog, answer: F) -> AnswerStore
where
    F: Fn(&Question) -> RawAnswer,
{
    let mut answers = AnswerStore::new();
    for question in catalog.questions() {
        answers
            .set(question, answer(question))
            .expect("fixture answer accepted");
    }
    answers
}

fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

#[test]
fn typical_answers_produce_expected_dimension_scores() {
    let catalog = QuestionCatalog::standard();
    let answers = answers_for(&catalog, typical_answer);

    let report = engine().score(&catalog, &answers);

    assert_eq!(report.psychometric_score, 44);
    assert_eq!(report.technical_score, 36);
    assert_eq!(report.wiscar_score(WiscarDimension::Will), 35);
    assert_eq!(report.wiscar_score(WiscarDimension::Interest), 70);
    assert_eq!(report.wiscar_score(WiscarDimension::Skill), 80);
    assert_eq!(report.wiscar_score(WiscarDimension::Cognitive), 80);
    assert_eq!(report.wiscar_score(WiscarDimension::Ability), 65);
    assert_eq!(report.wiscar_score(WiscarDimension::RealWorld), 50);
    assert_eq!(report.overall_score, 47);
    assert_eq!(report.recommendation, Recommendation::LowFit);
}

#[test]
fn best_answers_score_a_strong_fit() {
    let catalog = QuestionCatalog::standard();
    let answers = answers_for(&catalog, best_answer);

    let report = engine().score(&catalog, &answers);

    assert_eq!(report.psychometric_score, 100);
    assert_eq!(report.technical_score, 100);
    for dimension in wiscar_dimensions() {
        assert_eq!(report.wiscar_score(dimension), 100, "{dimension:?}");
    }
    assert_eq!(report.overall_score, 100);
    assert_eq!(report.recommendation, Recommendation::StrongFit);
}

#[test]
fn scoring_is_deterministic() {
    let catalog = QuestionCatalog::standard();
    let answers = answers_for(&catalog, typical_answer);
    let engine = engine();

    let first = engine.score(&catalog, &answers);
    let second = engine.score(&catalog, &answers);

    assert_eq!(first, second);
}

#[test]
fn unanswered_questions_contribute_zero() {
    let catalog = QuestionCatalog::standard();

    let report = engine().score(&catalog, &AnswerStore::new());

    assert_eq!(report.overall_score, 0);
    assert_eq!(report.recommendation, Recommendation::LowFit);
    assert_eq!(report.components.len(), catalog.count());
    assert!(report
        .components
        .iter()
        .all(|component| component.score == 0 && component.notes == "unanswered"));
}

#[test]
fn components_follow_catalog_order() {
    let catalog = QuestionCatalog::standard();
    let answers = answers_for(&catalog, typical_answer);

    let report = engine().score(&catalog, &answers);

    let ids: Vec<&str> = report
        .components
        .iter()
        .map(|component| component.question_id.as_str())
        .collect();
    let expected: Vec<&str> = catalog.questions().iter().map(|question| question.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn recommendation_boundaries_hold_through_the_engine() {
    for (weight, expected) in [
        (85, Recommendation::StrongFit),
        (65, Recommendation::ModerateFit),
        (64, Recommendation::LowFit),
    ] {
        let catalog = uniform_catalog(weight);
        let answers = answers_for(&catalog, |_| RawAnswer::Text("target".to_string()));

        let report = engine().score(&catalog, &answers);

        assert_eq!(report.overall_score, weight);
        assert_eq!(report.recommendation, expected, "overall {weight}");
    }
}

#[test]
fn configured_thresholds_change_the_recommendation() {
    let catalog = uniform_catalog(70);
    let answers = answers_for(&catalog, |_| RawAnswer::Text("target".to_string()));
    let engine = ScoringEngine::new(ScoringConfig {
        strong_fit_threshold: 70,
        moderate_fit_threshold: 50,
    });

    let report = engine.score(&catalog, &answers);

    assert_eq!(report.recommendation, Recommendation::StrongFit);
}
