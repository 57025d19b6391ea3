use super::common::*;
use crate::assessment::{
    AssessmentApp, FlowStep, Recommendation, ResultsPage, Screen, SessionState, SnapshotStore,
};

#[test]
fn app_starts_on_landing() {
    let (service, _) = build_service();
    let app = AssessmentApp::new(service);

    assert_eq!(app.screen(), Screen::Landing);
    assert_eq!(Screen::Landing.path(), "/");
}

#[test]
fn results_without_a_snapshot_redirect_to_a_fresh_assessment() {
    let (service, _) = build_service();
    let mut app = AssessmentApp::new(service);

    match app.open_results() {
        ResultsPage::Redirected(session) => {
            assert_eq!(session.state(), SessionState::InProgress { index: 0 });
            assert!(session.answers().is_empty());
        }
        ResultsPage::Ready(view) => panic!("expected redirect, got {view:?}"),
    }
    assert_eq!(app.screen(), Screen::Assessment);
}

#[test]
fn malformed_snapshot_redirects_like_missing_data() {
    let service = service_with(CorruptStore);
    let mut app = AssessmentApp::new(service);

    assert!(matches!(app.open_results(), ResultsPage::Redirected(_)));
    assert_eq!(app.screen(), Screen::Assessment);
}

#[test]
fn completed_assessment_is_shown_on_results() {
    let (service, _) = build_service();
    let mut app = AssessmentApp::new(service.clone());
    let mut session = app.start_assessment();
    assert_eq!(app.screen(), Screen::Assessment);

    let questions = service.catalog().questions().to_vec();
    let mut destination = None;
    for question in &questions {
        session.answer(best_answer(question)).expect("answer");
        if let FlowStep::Submitted { screen, .. } = session.next().expect("next") {
            destination = Some(screen);
        }
    }
    let destination = destination.expect("last next submits");
    app.go_to(destination);
    assert_eq!(app.screen(), Screen::Results);

    match app.open_results() {
        ResultsPage::Ready(view) => {
            assert_eq!(view.overall_score, 100);
            assert_eq!(view.recommendation, Recommendation::StrongFit);
            assert_eq!(view.recommendation_label, "Strong Fit");
            assert_eq!(view.core_scores.len(), 2);
            assert_eq!(view.wiscar_scores.len(), 6);
            assert_eq!(view.wiscar_scores[5].label, "Real-World Fit");
            assert_eq!(view.career_paths[0].title, "Primary: UX Copywriter");
            assert_eq!(view.next_steps.len(), 4);
        }
        ResultsPage::Redirected(_) => panic!("expected stored results"),
    }
    assert_eq!(app.screen(), Screen::Results);
}

#[test]
fn starting_again_keeps_previous_results_until_overwritten() {
    let (service, store) = build_service();
    let mut app = AssessmentApp::new(service.clone());

    let first = service
        .submit(sheet(service.catalog(), typical_answer))
        .expect("first submission");
    app.go_home();
    let _session = app.start_assessment();

    assert_eq!(store.load().expect("load"), Some(first));
}
