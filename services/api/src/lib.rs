mod cli;
mod commands;
mod demo;
mod infra;
mod routes;
mod server;
mod terminal;

use career_fit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
