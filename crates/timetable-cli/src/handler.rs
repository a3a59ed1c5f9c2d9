//! Command handlers.
//!
//! Each invocation loads the stored session, runs one engine operation, and
//! saves only if the operation succeeded. Read-only commands never save.

use anyhow::{Context, Result, bail};
use timetable_core::{
    CourseFilter, Courses, CreateResult, DeleteResult, Drafts, GridExporter, OperationStatus,
    Session, TimetableError, UpdateResult, calendar_entries,
    display::ClockTime,
    models::Color,
    params::{
        AddCourse, CellRef, CreateDraft, DuplicateDraft, ExportDraft, Id, ListCourses,
        RecolorCourse, RenameDraft,
    },
};

use crate::{
    cli::{CatalogCommands, CourseCommands, DraftCommands},
    exporter::MarkdownExporter,
    renderer::TerminalRenderer,
};

pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    pub async fn handle_catalog_command(&self, command: CatalogCommands) -> Result<()> {
        let catalog = self.session.catalog();
        match command {
            CatalogCommands::List(args) => {
                let params: ListCourses = args.into();
                let courses: Courses<'_> = catalog
                    .filter(&CourseFilter::from(&params))
                    .into_iter()
                    .collect();
                self.renderer.render(&courses.to_string())
            }
            CatalogCommands::Show(args) => {
                let course = catalog.require(&args.course_id)?;
                self.renderer.render(&course.to_string())
            }
            CatalogCommands::Departments => {
                let listing: String = catalog
                    .departments()
                    .into_iter()
                    .map(|department| format!("- {department}\n"))
                    .collect();
                self.renderer.render(&listing)
            }
        }
    }

    pub async fn handle_draft_command(&self, command: DraftCommands) -> Result<()> {
        match command {
            DraftCommands::List => {
                let timetable = self.session.load().await?;
                let drafts = Drafts::new(timetable.drafts(), timetable.active_draft().id);
                self.renderer.render(&drafts.to_string())
            }
            DraftCommands::Show(args) => {
                let timetable = self.session.load().await?;
                let draft = timetable.draft(args.id)?;
                let grid = timetable.grid(args.id)?;
                self.renderer.render(&format!("{draft}\n{grid}"))
            }
            DraftCommands::Create(args) => {
                let params: CreateDraft = args.into();
                let draft = self
                    .session
                    .apply(move |timetable, _| timetable.create_draft(params.name.as_deref()).cloned())
                    .await?;
                self.renderer.render(&CreateResult::new(draft).to_string())
            }
            DraftCommands::Duplicate(args) => {
                let params: DuplicateDraft = args.into();
                let draft = self
                    .session
                    .apply(move |timetable, _| {
                        timetable
                            .duplicate_draft(params.source_id, params.name.as_deref())
                            .cloned()
                    })
                    .await?;
                self.renderer.render(&CreateResult::new(draft).to_string())
            }
            DraftCommands::Delete(args) => {
                let params: Id = args.into();
                let deleted = self
                    .session
                    .apply(move |timetable, _| timetable.delete_draft(params.id))
                    .await?;
                self.renderer.render(&DeleteResult::new(deleted).to_string())
            }
            DraftCommands::Switch(args) => {
                let Id { id } = args.into();
                let name = self
                    .session
                    .apply(move |timetable, _| {
                        timetable.switch_draft(id).map(|draft| draft.name.clone())
                    })
                    .await?;
                let status = OperationStatus::success(format!("Switched to draft {id}: {name}"));
                self.renderer.render(&status.to_string())
            }
            DraftCommands::Rename(args) => {
                let params: RenameDraft = args.into();
                let change = format!("Renamed to '{}'", params.name.trim());
                let draft = self
                    .session
                    .apply(move |timetable, _| timetable.rename_draft(params.id, &params.name).cloned())
                    .await?;
                self.renderer
                    .render(&UpdateResult::with_changes(draft, vec![change]).to_string())
            }
            DraftCommands::Export(args) => {
                let params = ExportDraft::from(&args);
                let timetable = self.session.load().await?;
                let request = timetable.export_request(params.id)?;
                let grid = timetable.grid(params.id)?;
                let path = MarkdownExporter::new(&args.output_dir)
                    .export(&request, &grid)
                    .with_context(|| format!("Failed to export draft {}", request.draft_id))?;
                let status = OperationStatus::success(format!(
                    "Exported draft {} to {}",
                    request.draft_id,
                    path.display()
                ));
                self.renderer.render(&status.to_string())
            }
            DraftCommands::Calendar(args) => {
                let timetable = self.session.load().await?;
                let draft = timetable.draft(args.id)?;
                let entries = calendar_entries(draft);
                let mut output = format!("# {}. {}\n\n", draft.id, draft.name);
                if entries.is_empty() {
                    output.push_str("No meetings scheduled.\n");
                }
                for entry in entries {
                    output.push_str(&format!(
                        "- {} {}-{}: **{}** {}\n",
                        entry.day,
                        ClockTime(entry.start),
                        ClockTime(entry.end),
                        entry.code,
                        entry.name
                    ));
                }
                self.renderer.render(&output)
            }
        }
    }

    pub async fn handle_course_command(&self, command: CourseCommands) -> Result<()> {
        match command {
            CourseCommands::Add(args) if args.check => {
                let params: AddCourse = args.into();
                let mut timetable = self.session.load().await?;
                let course = self.session.catalog().require(&params.course_id)?;
                let draft_id = timetable.active_draft().id;
                let checked = timetable.begin_add(course).map(|_| ());
                timetable.cancel_add();
                match checked {
                    Ok(()) => {
                        let status = OperationStatus::success(format!(
                            "{} fits in draft {}",
                            params.course_id, draft_id
                        ));
                        self.renderer.render(&status.to_string())
                    }
                    Err(err @ TimetableError::Conflict { .. }) => {
                        self.renderer
                            .render(&OperationStatus::failure(err.to_string()).to_string())?;
                        bail!("{} does not fit in draft {}", params.course_id, draft_id)
                    }
                    Err(err) => Err(err.into()),
                }
            }
            CourseCommands::Add(args) => {
                let params: AddCourse = args.into();
                let scheduled = self
                    .session
                    .apply(move |timetable, catalog| {
                        let course = catalog.require(&params.course_id)?;
                        timetable.begin_add(course)?;
                        timetable.commit_add(params.color)
                    })
                    .await?;
                self.renderer.render(&CreateResult::new(scheduled).to_string())
            }
            CourseCommands::Remove(args) => {
                let cell: CellRef = args.into();
                let removed = self
                    .session
                    .apply(move |timetable, _| timetable.remove_course(&cell.course_id, &cell.slot()))
                    .await?;
                self.renderer.render(&DeleteResult::new(removed).to_string())
            }
            CourseCommands::Recolor(args) => {
                let params: RecolorCourse = args.into();
                let change = format!("Color set to {}", params.color);
                let scheduled = self
                    .session
                    .apply(move |timetable, _| {
                        timetable
                            .recolor_course(&params.cell.course_id, &params.cell.slot(), params.color)
                            .cloned()
                    })
                    .await?;
                self.renderer
                    .render(&UpdateResult::with_changes(scheduled, vec![change]).to_string())
            }
            CourseCommands::Lock(args) => {
                let cell: CellRef = args.into();
                let key = cell.lock_key();
                let locked = self
                    .session
                    .apply(move |timetable, _| timetable.toggle_lock(&cell.course_id, &cell.slot()))
                    .await?;
                let verb = if locked { "Locked" } else { "Unlocked" };
                let status =
                    OperationStatus::success(format!("{verb} {} at {}", key.course_id, key.slot()));
                self.renderer.render(&status.to_string())
            }
            CourseCommands::Colors => {
                let palette: String = Color::PALETTE
                    .iter()
                    .map(|color| format!("- {} `{}`\n", color, color.hex()))
                    .collect();
                self.renderer.render(&palette)
            }
        }
    }

    /// Shows the grid of a draft (default: active), as `tt` does with no
    /// subcommand.
    pub async fn show_grid(&self, draft_id: Option<u64>) -> Result<()> {
        let timetable = self.session.load().await?;
        let grid = timetable.grid(draft_id)?;
        self.renderer.render(&grid.to_string())
    }
}
