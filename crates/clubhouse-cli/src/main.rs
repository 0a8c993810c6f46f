//! Club House CLI - operator console for the admin backend
//!
//! Lists, inspects and edits tags, evidence records and golf courses from
//! the terminal.

mod cli;
mod commands;
mod error;


use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::common::Console;
use crate::commands::completions::run_completions;
use crate::commands::courses::run_courses;
use crate::commands::evidence::run_evidence;
use crate::commands::health::run_health;
use crate::commands::request::run_request;
use crate::commands::tags::run_tags;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "clubhouse=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let console = Console::from_env(cli.api_url, cli.token)?;
    match cli.command {
        Commands::Health { json } => run_health(&console, json).await?,
        Commands::Tags { command } => run_tags(&console, command).await?,
        Commands::Evidence { command } => run_evidence(&console, command).await?,
        Commands::Courses { command } => run_courses(&console, command).await?,
        Commands::Request {
            method,
            endpoint,
            data,
            message,
        } => run_request(&console, method, &endpoint, data.as_deref(), message).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
