//! Markdown presentation of timetable state.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes go through small wrapper types so each output
//! context can pick its framing.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Markdown      │
//! │ (Draft, Grid)   │───▶│ & Result Types  │───▶│ (terminal/file) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: `Drafts`, `Courses`
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: `LocalDateTime`, `ClockTime`
//!
//! # Examples
//!
//! ```rust
//! use timetable_core::{Timetable, display::OperationStatus};
//!
//! let timetable = Timetable::new();
//! let grid = timetable.grid(None)?;
//! let output = grid.to_string();
//! assert!(output.starts_with("# 1. Draft 1"));
//! assert!(output.contains("| LUNCH |"));
//!
//! let status = OperationStatus::success("Switched to draft 1");
//! assert_eq!(status.to_string(), "Success: Switched to draft 1\n");
//! # Ok::<(), timetable_core::TimetableError>(())
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Courses, Drafts};
pub use datetime::{ClockTime, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
