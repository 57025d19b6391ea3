use crate::commands::{
    run_questions, run_results, run_take, QuestionsArgs, ResultsArgs, TakeArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use career_fit::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Career Fit",
    about = "Take the UX copywriting career-fit assessment or serve it over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Take the assessment interactively in the terminal
    Take(TakeArgs),
    /// Show, export, or clear the stored results
    Results(ResultsArgs),
    /// List the question catalog
    Questions(QuestionsArgs),
    /// Run a scripted assessment against in-memory storage
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override where completed results are stored
    #[arg(long)]
    pub(crate) snapshot_path: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Take(args) => run_take(args),
        Command::Results(args) => run_results(args),
        Command::Questions(args) => run_questions(args),
        Command::Demo(args) => run_demo(args),
    }
}
