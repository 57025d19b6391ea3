use crate::infra::{load_runtime, memory_backed_service};
use crate::terminal::results_text;
use career_fit::assessment::{
    drive, AssessmentApp, DriveError, DriveOutcome, Question, QuestionKind, RawAnswer,
    RenderError, ResultsView, Screen, ScoringConfig, ScriptedRenderer, Snapshot,
};
use career_fit::error::AppError;
use clap::{Args, ValueEnum};
use serde_json::json;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoProfile {
    /// Mid-scale ratings, first options, and a terse rewrite
    Typical,
    /// Top ratings, best options, and rewrites that meet the rubric
    Strong,
}

impl DemoProfile {
    fn answer(self, question: &Question) -> RawAnswer {
        match &question.kind {
            QuestionKind::Scale => RawAnswer::Number(match self {
                Self::Typical => 4,
                Self::Strong => 7,
            }),
            QuestionKind::SingleChoice { options } | QuestionKind::ScenarioChoice { options, .. } => {
                let picked = match self {
                    Self::Typical => options.first(),
                    Self::Strong => options.iter().max_by_key(|option| option.weight),
                };
                RawAnswer::from(picked.map_or("", |option| option.label))
            }
            QuestionKind::FreeTextEdit { .. } => RawAnswer::from(self.rewrite(question.id)),
        }
    }

    fn rewrite(self, question_id: &str) -> &'static str {
        match (self, question_id) {
            (Self::Typical, _) => "Free trial, 30 days",
            (Self::Strong, "tech_2") => "That email looks incomplete. Check it and try again.",
            (Self::Strong, "tech_4") => "Get updates",
            (Self::Strong, _) => "Open Settings to create your profile.",
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Answer profile to replay
    #[arg(long, value_enum, default_value_t = DemoProfile::Typical)]
    pub(crate) profile: DemoProfile,
    /// Print the report and results view as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = load_runtime()?;
    let snapshot = scripted_run(args.profile, config.scoring)?;
    let view = ResultsView::from_snapshot(&snapshot);

    if args.json {
        let payload = json!({
            "profile": format!("{:?}", args.profile).to_lowercase(),
            "report": &snapshot.report,
            "results": view,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).map_err(std::io::Error::from)?
        );
    } else {
        println!("Demo profile: {:?}", args.profile);
        println!("{}", results_text(&view));
    }
    Ok(())
}

/// Replay `profile` through a full session backed by in-memory storage.
fn scripted_run(profile: DemoProfile, scoring: ScoringConfig) -> Result<Snapshot, AppError> {
    let service = memory_backed_service(scoring);
    let mut app = AssessmentApp::new(service.clone());
    let mut session = app.start_assessment();
    let mut renderer = ScriptedRenderer::new().answering(
        service
            .catalog()
            .questions()
            .iter()
            .map(|question| profile.answer(question)),
    );

    match drive(&mut session, &mut renderer)? {
        DriveOutcome::Submitted(snapshot) => {
            app.go_to(Screen::Results);
            info!(
                profile = ?profile,
                overall = snapshot.report.overall_score,
                "demo assessment complete"
            );
            Ok(snapshot)
        }
        DriveOutcome::Abandoned { .. } => Err(DriveError::Render(RenderError::Exhausted).into()),
    }
}
