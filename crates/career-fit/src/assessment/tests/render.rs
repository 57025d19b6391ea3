use super::common::*;
use crate::assessment::{
    drive, Answer, DriveError, DriveOutcome, InputSurface, QuestionCatalog, QuestionView,
    RenderError, ScriptedRenderer, SnapshotStore, SCALE_MAX, SCALE_MIN,
};

#[test]
fn scale_surface_shows_midpoint_until_recorded() {
    let catalog = QuestionCatalog::standard();
    let question = catalog.find("psych_1").expect("psych_1");

    assert_eq!(
        InputSurface::for_question(question, None),
        InputSurface::Scale {
            min: 1,
            max: 7,
            value: 4,
            recorded: false,
        }
    );
    assert_eq!(
        InputSurface::for_question(question, Some(&Answer::Scale(2))),
        InputSurface::Scale {
            min: 1,
            max: 7,
            value: 2,
            recorded: true,
        }
    );
}

#[test]
fn choice_surface_tracks_the_selected_option() {
    let catalog = QuestionCatalog::standard();
    let question = catalog.find("psych_5").expect("psych_5");

    let selected = Answer::Choice("Add more explanatory text around the button".to_string());
    match InputSurface::for_question(question, Some(&selected)) {
        InputSurface::Choice {
            scenario,
            options,
            selected,
        } => {
            assert!(scenario.is_some_and(|text| text.contains("checkout button")));
            assert_eq!(options.len(), 4);
            assert_eq!(selected, Some(2));
        }
        other => panic!("expected choice surface, got {other:?}"),
    }

    let plain = catalog.find("tech_1").expect("tech_1");
    match InputSurface::for_question(plain, None) {
        InputSurface::Choice {
            scenario, selected, ..
        } => {
            assert!(scenario.is_none());
            assert!(selected.is_none());
        }
        other => panic!("expected choice surface, got {other:?}"),
    }
}

#[test]
fn edit_surface_carries_the_task_and_text() {
    let catalog = QuestionCatalog::standard();
    let question = catalog.find("tech_4").expect("tech_4");

    assert_eq!(
        InputSurface::for_question(question, Some(&Answer::Text(String::new()))),
        InputSurface::Edit {
            original: "Click Here",
            instruction: "Rewrite this button text to be more specific and action-oriented for a newsletter signup.",
            text: Some(String::new()),
        }
    );
}

#[test]
fn view_reports_position_and_final_action() {
    let catalog = QuestionCatalog::standard();
    let total = catalog.count();

    let first = QuestionView::new(catalog.question(0), None, 0, total);
    assert_eq!(first.position_label(), "Question 1 of 19");
    assert_eq!(first.progress_pct(), 5);
    assert_eq!(first.badge(), "PSYCHOMETRIC");
    assert!(!first.can_go_back());
    assert!(!first.can_advance());
    assert_eq!(first.next_label(), "Next");

    let last_index = total - 1;
    let last = QuestionView::new(
        catalog.question(last_index),
        Some(&Answer::Scale(4)),
        last_index,
        total,
    );
    assert_eq!(last.position_label(), "Question 19 of 19");
    assert_eq!(last.progress_pct(), 100);
    assert_eq!(last.badge(), "WISCAR");
    assert!(last.can_go_back());
    assert!(last.can_advance());
    assert!(last.is_final());
    assert_eq!(last.next_label(), "Complete Assessment");
}

#[test]
fn drive_submits_a_scripted_run() {
    let (service, store) = build_service();
    let mut session = service.start_session();
    let mut renderer = ScriptedRenderer::new().answering(typical_answers(service.catalog()));

    let outcome = drive(&mut session, &mut renderer).expect("scripted run completes");

    let DriveOutcome::Submitted(snapshot) = outcome else {
        panic!("expected submission");
    };
    assert_eq!(snapshot.report.overall_score, 47);
    assert_eq!(store.load().expect("load"), Some(snapshot));
    assert!(renderer.rejections().is_empty());
    assert_eq!(renderer.remaining(), 0);
}

#[test]
fn drive_reports_refused_actions_and_keeps_going() {
    let (service, _) = build_service();
    let mut session = service.start_session();
    let mut renderer = ScriptedRenderer::new()
        .next()
        .answer(12_i64)
        .answer(3_i64)
        .next()
        .previous()
        .quit();

    let outcome = drive(&mut session, &mut renderer).expect("quit is not an error");

    assert_eq!(outcome, DriveOutcome::Abandoned { index: 0 });
    assert_eq!(renderer.rejections().len(), 2);
    assert!(renderer.rejections()[0].contains("must be answered"));
    assert!(renderer.rejections()[1]
        .contains(&format!("between {SCALE_MIN} and {SCALE_MAX}")));
    assert_eq!(
        renderer.rendered(),
        ["psych_1", "psych_1", "psych_1", "psych_1", "psych_2", "psych_1"]
    );
}

#[test]
fn drive_surfaces_an_exhausted_script() {
    let (service, _) = build_service();
    let mut session = service.start_session();
    let mut renderer = ScriptedRenderer::new().answer(4_i64).next();

    match drive(&mut session, &mut renderer) {
        Err(DriveError::Render(RenderError::Exhausted)) => {}
        other => panic!("expected exhausted script, got {other:?}"),
    }
    assert_eq!(session.index(), Some(1));
}
