//! Data models for courses, drafts, and locks.
//!
//! This module contains the domain types of the timetable engine. Display
//! implementations for these models live in [`crate::display::models`] so the
//! data structures stay free of presentation logic.
//!
//! # Model Overview
//!
//! ```text
//! Course ──(color chosen on add)──▶ ScheduledCourse ──owned by──▶ TimetableDraft
//!   │                                                                 │
//!   └── time_slots: Vec<TimeSlot { day, period }>                     │
//!                                                                     ▼
//! LockKey { course_id, day, period }  ◀── cells of scheduled courses  TimetableSnapshot
//! ```
//!
//! - [`Course`] is catalog data and is never mutated by the engine.
//! - [`ScheduledCourse`] is a per-draft copy of a course with a [`Color`].
//! - [`TimetableDraft`] holds scheduled courses whose slots never overlap.
//! - [`LockKey`] marks one occupied cell; the set of keys spans all drafts.
//! - [`TimetableSnapshot`] is the persisted form of a whole session.
//!
//! # Examples
//!
//! ```rust
//! use timetable_core::models::{Color, Course, CourseType, Day, Period, ScheduledCourse, TimeSlot};
//!
//! let course = Course {
//!     id: "CS101".to_string(),
//!     code: "CS101".to_string(),
//!     name: "Intro to Programming".to_string(),
//!     professor: "Dr. Smith".to_string(),
//!     department: "Computer Science".to_string(),
//!     course_type: CourseType::Core,
//!     credits: 3,
//!     time_slots: vec![TimeSlot::new(Day::Monday, Period::EarlyMorning)],
//! };
//! let scheduled = ScheduledCourse::new(course, Color::Teal);
//! assert!(scheduled.matches("CS101", &TimeSlot::new(Day::Monday, Period::EarlyMorning)));
//! println!("{}", scheduled); // Markdown line with code, name, and color
//! ```

pub mod color;
pub mod course;
pub mod draft;
pub mod filters;
pub mod lock;
pub mod slot;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use course::{Course, CourseType};
pub use draft::{ScheduledCourse, TimetableDraft};
pub use filters::CourseFilter;
pub use lock::LockKey;
pub use slot::{Day, Period, TimeSlot};
pub use snapshot::TimetableSnapshot;
