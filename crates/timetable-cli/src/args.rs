use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CatalogCommands, CourseCommands, DraftCommands};

/// Plan weekly course timetables from the command line
///
/// Build several independent drafts of a Monday to Friday timetable from a
/// course catalog. Courses that would overlap are rejected, and courses
/// locked in the current draft are carried into the next fresh draft. With
/// no subcommand, the active draft's grid is shown.
#[derive(Parser)]
#[command(version, about, name = "tt")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/timetable/timetable.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON course catalog. Defaults to the built-in sample
    /// catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available command groups
///
/// - `catalog`: browse the course offerings
/// - `draft`: create, switch between, and export timetable drafts
/// - `course`: place, remove, recolor, and lock courses in the active draft
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the course catalog
    #[command(alias = "cat")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Manage timetable drafts
    #[command(alias = "d")]
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },
    /// Manage courses in the active draft
    #[command(alias = "c")]
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
}
