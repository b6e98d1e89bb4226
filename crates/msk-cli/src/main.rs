//! MSK dashboard CLI
//!
//! Command-line surface over the suggestion store: sign in, seed sample data,
//! browse employees and suggestions, and record status changes.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use msk_core::{AuthService, RepositoryBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        session_file,
        no_color,
        overdue_days,
        command,
    } = Args::parse();

    let repository = RepositoryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize database")?;

    let auth = match session_file {
        Some(path) => AuthService::new(path),
        None => AuthService::with_default_path().context("Failed to locate session file")?,
    };

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(repository, auth, renderer, overdue_days);

    info!("MSK dashboard started");

    match command {
        Some(Login { email }) => cli.login(&email),
        Some(Logout) => cli.logout(),
        Some(Whoami) => cli.whoami(),
        Some(Seed) => cli.seed().await,
        Some(Employee { command }) => cli.handle_employee_command(command).await,
        Some(Suggestion { command }) => cli.handle_suggestion_command(command).await,
        Some(Stats) => cli.stats().await,
        None => cli.overview().await,
    }
}
