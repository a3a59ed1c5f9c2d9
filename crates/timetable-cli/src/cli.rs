//! Command-line argument types.
//!
//! Every subcommand has a clap `Args` struct that converts into the matching
//! core parameter type, so clap never leaks into `timetable-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Timetable engine
//! ```

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use timetable_core::{
    models::{Color, CourseType, Day, Period},
    params::*,
};

// ============================================================================
// Catalog
// ============================================================================

/// List catalog courses, optionally filtered
#[derive(Args)]
pub struct ListCoursesArgs {
    #[arg(short, long, help = "Only courses from this department (case-insensitive)")]
    pub department: Option<String>,
    #[arg(short = 't', long = "type", help = "Only courses of this type")]
    pub course_type: Option<CourseTypeArg>,
    #[arg(short, long, help = "Search code, name, and professor")]
    pub search: Option<String>,
}

impl From<ListCoursesArgs> for ListCourses {
    fn from(val: ListCoursesArgs) -> Self {
        ListCourses {
            department: val.department,
            course_type: val.course_type.map(Into::into),
            search: val.search,
        }
    }
}

#[derive(Args)]
pub struct ShowCourseArgs {
    #[arg(help = "Catalog ID of the course, e.g. CS101")]
    pub course_id: String,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List courses in the catalog
    #[command(alias = "ls")]
    List(ListCoursesArgs),
    /// Show the details of one course
    #[command(alias = "s")]
    Show(ShowCourseArgs),
    /// List the departments offering courses
    Departments,
}

/// Course type values accepted by `--type`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CourseTypeArg {
    Core,
    Elective,
    Lab,
    Seminar,
}

impl From<CourseTypeArg> for CourseType {
    fn from(val: CourseTypeArg) -> Self {
        match val {
            CourseTypeArg::Core => CourseType::Core,
            CourseTypeArg::Elective => CourseType::Elective,
            CourseTypeArg::Lab => CourseType::Lab,
            CourseTypeArg::Seminar => CourseType::Seminar,
        }
    }
}

// ============================================================================
// Drafts
// ============================================================================

/// Show one draft; the active draft when no ID is given
#[derive(Args)]
pub struct DraftRefArgs {
    #[arg(help = "ID of the draft (defaults to the active draft)")]
    pub id: Option<u64>,
}

/// Create a fresh draft seeded with the locked courses of the active draft
#[derive(Args)]
pub struct CreateDraftArgs {
    #[arg(help = "Name of the new draft (defaults to \"Draft N\")")]
    pub name: Option<String>,
}

impl From<CreateDraftArgs> for CreateDraft {
    fn from(val: CreateDraftArgs) -> Self {
        CreateDraft { name: val.name }
    }
}

/// Copy every course of a draft into a new draft
#[derive(Args)]
pub struct DuplicateDraftArgs {
    #[arg(help = "ID of the draft to copy")]
    pub source_id: u64,
    #[arg(short, long, help = "Name of the copy (defaults to \"<name> Copy\")")]
    pub name: Option<String>,
}

impl From<DuplicateDraftArgs> for DuplicateDraft {
    fn from(val: DuplicateDraftArgs) -> Self {
        DuplicateDraft {
            source_id: val.source_id,
            name: val.name,
        }
    }
}

#[derive(Args)]
pub struct DraftIdArgs {
    #[arg(help = "ID of the draft")]
    pub id: u64,
}

impl From<DraftIdArgs> for Id {
    fn from(val: DraftIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Args)]
pub struct RenameDraftArgs {
    #[arg(help = "ID of the draft to rename")]
    pub id: u64,
    #[arg(help = "New name")]
    pub name: String,
}

impl From<RenameDraftArgs> for RenameDraft {
    fn from(val: RenameDraftArgs) -> Self {
        RenameDraft {
            id: val.id,
            name: val.name,
        }
    }
}

/// Write a draft's grid to `<draft name>.md`
#[derive(Args)]
pub struct ExportDraftArgs {
    #[arg(help = "ID of the draft (defaults to the active draft)")]
    pub id: Option<u64>,
    #[arg(short, long, default_value = ".", help = "Directory to write the export to")]
    pub output_dir: PathBuf,
}

impl From<&ExportDraftArgs> for ExportDraft {
    fn from(val: &ExportDraftArgs) -> Self {
        ExportDraft { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum DraftCommands {
    /// List all drafts
    #[command(alias = "ls")]
    List,
    /// Show a draft's courses and grid
    #[command(alias = "s")]
    Show(DraftRefArgs),
    /// Create a new draft carrying over locked courses
    #[command(alias = "new")]
    Create(CreateDraftArgs),
    /// Duplicate a draft with all its courses
    #[command(alias = "dup")]
    Duplicate(DuplicateDraftArgs),
    /// Delete a draft (the last draft cannot be deleted)
    #[command(alias = "rm")]
    Delete(DraftIdArgs),
    /// Make a draft the active one
    #[command(alias = "sw")]
    Switch(DraftIdArgs),
    /// Rename a draft
    Rename(RenameDraftArgs),
    /// Export a draft's grid as a markdown file
    Export(ExportDraftArgs),
    /// List a draft's weekly meetings with clock times
    Calendar(DraftRefArgs),
}

// ============================================================================
// Courses
// ============================================================================

/// Schedule a catalog course in the active draft
#[derive(Args)]
pub struct AddCourseArgs {
    #[arg(help = "Catalog ID of the course, e.g. CS101")]
    pub course_id: String,
    #[arg(
        short,
        long,
        default_value = "blue",
        help = "Palette color for the course (name or hex)"
    )]
    pub color: Color,
    #[arg(long, help = "Only check for conflicts, do not add the course")]
    pub check: bool,
}

impl From<AddCourseArgs> for AddCourse {
    fn from(val: AddCourseArgs) -> Self {
        AddCourse {
            course_id: val.course_id,
            color: val.color,
        }
    }
}

/// One occupied cell of the active draft
#[derive(Args)]
pub struct CellArgs {
    #[arg(help = "ID of the course occupying the cell")]
    pub course_id: String,
    #[arg(help = "Day of the week, e.g. Monday or mon")]
    pub day: Day,
    #[arg(help = "Period label (e.g. 8:30am-10:00am) or row number 1-6")]
    pub period: Period,
}

impl From<CellArgs> for CellRef {
    fn from(val: CellArgs) -> Self {
        CellRef {
            course_id: val.course_id,
            day: val.day,
            period: val.period,
        }
    }
}

#[derive(Args)]
pub struct RecolorCourseArgs {
    #[command(flatten)]
    pub cell: CellArgs,
    #[arg(short, long, help = "New palette color (name or hex)")]
    pub color: Color,
}

impl From<RecolorCourseArgs> for RecolorCourse {
    fn from(val: RecolorCourseArgs) -> Self {
        RecolorCourse {
            cell: val.cell.into(),
            color: val.color,
        }
    }
}

#[derive(Subcommand)]
pub enum CourseCommands {
    /// Add a course to the active draft
    #[command(alias = "a")]
    Add(AddCourseArgs),
    /// Remove the course at a cell from the active draft
    #[command(alias = "rm")]
    Remove(CellArgs),
    /// Change the color of the course at a cell
    Recolor(RecolorCourseArgs),
    /// Toggle the lock on a cell
    #[command(alias = "l")]
    Lock(CellArgs),
    /// List the color palette
    Colors,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;
    use crate::args::{Args, Commands};

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_cell_args_parse_short_forms() {
        let args = Args::parse_from(["tt", "course", "lock", "CS101", "mon", "1"]);
        let Some(Commands::Course {
            command: CourseCommands::Lock(cell),
        }) = args.command
        else {
            panic!("expected course lock");
        };
        let cell: CellRef = cell.into();
        assert_eq!(cell.day, Day::Monday);
        assert_eq!(cell.period, Period::EarlyMorning);
    }

    #[test]
    fn test_add_course_default_color() {
        let args = Args::parse_from(["tt", "course", "add", "MATH201"]);
        let Some(Commands::Course {
            command: CourseCommands::Add(add),
        }) = args.command
        else {
            panic!("expected course add");
        };
        assert!(!add.check);
        let params: AddCourse = add.into();
        assert_eq!(params.color, Color::Blue);
    }

    #[test]
    fn test_list_courses_type_filter() {
        let args = Args::parse_from(["tt", "catalog", "list", "--type", "lab"]);
        let Some(Commands::Catalog {
            command: CatalogCommands::List(list),
        }) = args.command
        else {
            panic!("expected catalog list");
        };
        let params: ListCourses = list.into();
        assert_eq!(params.course_type, Some(CourseType::Lab));
    }

    #[test]
    fn test_lunch_is_parsed_but_rejected_later() {
        // Parsing accepts the lunch row; the engine rejects it as not occupied
        let args = Args::try_parse_from(["tt", "course", "remove", "CS101", "friday", "lunch"]);
        assert!(args.is_ok());
        assert!(Args::try_parse_from(["tt", "course", "remove", "CS101", "sunday", "1"]).is_err());
    }
}
