//! Timetable CLI Application
//!
//! Command-line interface for planning weekly course timetables.

mod args;
mod cli;
mod exporter;
mod handler;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handler::Cli;
use log::info;
use renderer::TerminalRenderer;
use timetable_core::SessionBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog,
        no_color,
        command,
    } = Args::parse();

    let session = SessionBuilder::new()
        .with_database_path(database_file)
        .with_catalog_path(catalog)
        .build()
        .await
        .context("Failed to initialize session")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(session, renderer);

    info!("Timetable started");

    match command {
        Some(Catalog { command }) => cli.handle_catalog_command(command).await,
        Some(Draft { command }) => cli.handle_draft_command(command).await,
        Some(Course { command }) => cli.handle_course_command(command).await,
        None => cli.show_grid(None).await,
    }
}
