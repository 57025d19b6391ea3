use crate::infra::{file_backed_service, load_runtime};
use crate::terminal::{
    confirm_start, landing_text, question_list, results_text, TerminalRenderer,
};
use career_fit::assessment::{
    drive, AssessmentApp, AssessmentSession, DriveError, DriveOutcome, LandingPage,
    QuestionCatalog, RenderError, ResultsPage, ResultsView, Screen, SnapshotStore,
};
use career_fit::error::AppError;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Override where completed results are stored
    #[arg(long)]
    pub(crate) snapshot_path: Option<PathBuf>,
    /// Skip the landing screen confirmation
    #[arg(long, short = 'y')]
    pub(crate) yes: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ResultsArgs {
    /// Override where completed results are stored
    #[arg(long)]
    pub(crate) snapshot_path: Option<PathBuf>,
    /// Print the results as JSON instead of starting a new assessment when none exist
    #[arg(long, conflicts_with = "clear")]
    pub(crate) json: bool,
    /// Delete the stored results
    #[arg(long)]
    pub(crate) clear: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_take(args: TakeArgs) -> Result<(), AppError> {
    let config = load_runtime()?;
    let mut app = AssessmentApp::new(file_backed_service(&config, args.snapshot_path));

    println!("{}", landing_text(&LandingPage::standard()));
    if !args.yes && !confirm_start().map_err(DriveError::from)? {
        return Ok(());
    }

    let session = app.start_assessment();
    take_assessment(&mut app, session)
}

pub(crate) fn run_results(args: ResultsArgs) -> Result<(), AppError> {
    let config = load_runtime()?;
    let service = file_backed_service(&config, args.snapshot_path);

    if args.clear {
        service.reset()?;
        println!("Stored results cleared.");
        return Ok(());
    }

    if args.json {
        let payload = match service.latest() {
            Ok(Some(snapshot)) => serde_json::to_value(ResultsView::from_snapshot(&snapshot))
                .map_err(std::io::Error::from)?,
            Ok(None) => json!({ "redirect": Screen::Assessment.path() }),
            Err(err) => {
                warn!(error = %err, "stored results unreadable");
                json!({ "redirect": Screen::Assessment.path() })
            }
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).map_err(std::io::Error::from)?
        );
        return Ok(());
    }

    let mut app = AssessmentApp::new(service);
    match app.open_results() {
        ResultsPage::Ready(view) => {
            println!("{}", results_text(&view));
            Ok(())
        }
        ResultsPage::Redirected(session) => {
            println!("No saved results yet. Starting the assessment.");
            take_assessment(&mut app, session)
        }
    }
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    if args.json {
        let payload = json!({
            "count": catalog.count(),
            "questions": catalog.questions(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).map_err(std::io::Error::from)?
        );
    } else {
        print!("{}", question_list(catalog.questions()));
    }
    Ok(())
}

fn take_assessment<S>(
    app: &mut AssessmentApp<S>,
    mut session: AssessmentSession<S>,
) -> Result<(), AppError>
where
    S: SnapshotStore + 'static,
{
    let total = session.total();
    let mut renderer = TerminalRenderer::new();

    match drive(&mut session, &mut renderer) {
        Ok(DriveOutcome::Submitted(snapshot)) => {
            app.go_to(Screen::Results);
            println!("{}", results_text(&ResultsView::from_snapshot(&snapshot)));
            Ok(())
        }
        Ok(DriveOutcome::Abandoned { index }) => {
            println!(
                "Stopped at question {} of {total}. Answers were not saved.",
                index + 1
            );
            app.go_home();
            Ok(())
        }
        Err(DriveError::Render(RenderError::Cancelled)) => {
            println!("\nAssessment cancelled. Answers were not saved.");
            app.go_home();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
