//! Core library for the course timetable planner.
//!
//! This crate holds the scheduling engine: a set of independent timetable
//! drafts built from a read-only course catalog, conflict checking that
//! keeps every draft overlap-free, and cell locks that carry courses into
//! the next fresh draft. Persistence and presentation sit around it.
//!
//! # Layers
//!
//! - **Engine** ([`engine`]): synchronous, in-memory [`Timetable`] state.
//!   Every operation applies fully or fails with no change.
//! - **Catalog** ([`catalog`]): validated course offerings.
//! - **Session** ([`session`]): async load/save of the engine state to
//!   SQLite via [`db`].
//! - **Display** ([`display`]): markdown `Display` impls and wrappers,
//!   rendered by the CLI's terminal renderer.
//! - **Grid** ([`grid`]): the logical week grid and the export boundary.
//!
//! # Quick Start
//!
//! ```rust
//! use timetable_core::{Catalog, Color, Day, Period, TimeSlot, Timetable};
//!
//! let catalog = Catalog::builtin()?;
//! let mut timetable = Timetable::new();
//!
//! timetable.add_course(catalog.require("CS101")?, Color::Blue)?;
//! timetable.toggle_lock("CS101", &TimeSlot::new(Day::Monday, Period::EarlyMorning))?;
//!
//! // The locked course is carried into the new draft
//! let draft = timetable.create_draft(Some("Plan B"))?;
//! assert_eq!(draft.courses.len(), 1);
//!
//! println!("{}", timetable.grid(None)?);
//! # Ok::<(), timetable_core::TimetableError>(())
//! ```

pub mod catalog;
pub mod conflict;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod grid;
pub mod models;
pub mod params;
pub mod session;

// Re-export commonly used types
pub use catalog::Catalog;
pub use conflict::{Conflict, find_conflict, has_conflict};
pub use db::Database;
pub use display::{
    Courses, CreateResult, DeleteResult, Drafts, OperationStatus, UpdateResult,
};
pub use engine::{PendingAddition, Timetable};
pub use error::{Result, TimetableError};
pub use grid::{CalendarEntry, ExportRequest, Grid, GridExporter, calendar_entries};
pub use models::{
    Color, Course, CourseFilter, CourseType, Day, LockKey, Period, ScheduledCourse, TimeSlot,
    TimetableDraft, TimetableSnapshot,
};
pub use params::{
    AddCourse, CellRef, CreateDraft, DuplicateDraft, ExportDraft, Id, ListCourses, RecolorCourse,
    RenameDraft,
};
pub use session::{Session, SessionBuilder};
