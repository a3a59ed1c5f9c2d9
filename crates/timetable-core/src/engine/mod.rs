//! The scheduling and draft-management engine.
//!
//! This module provides [`Timetable`], the in-memory state of one planning
//! session, and the components it is assembled from:
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  DraftLifecycle  │    │   DraftStore    │    │ conflict checker│
//! │ (create, dup,    │───▶│ (drafts, active │───▶│ (find_conflict) │
//! │  delete, switch) │    │  id, mutations) │    │                 │
//! └──────────────────┘    └─────────────────┘    └─────────────────┘
//!          │
//!          ▼ read-only
//! ┌──────────────────┐
//! │   LockTracker    │  cell keys shared by all drafts
//! └──────────────────┘
//! ```
//!
//! Every public operation runs to completion and either applies fully or
//! returns an error with the state untouched. The engine is synchronous;
//! persistence and export happen after it has produced a consistent state.
//!
//! # Examples
//!
//! ```rust
//! use timetable_core::{Catalog, Color, Timetable};
//!
//! let catalog = Catalog::builtin()?;
//! let cs101 = catalog.get("CS101").expect("sample catalog has CS101");
//!
//! let mut timetable = Timetable::new();
//! timetable.begin_add(cs101)?;
//! timetable.commit_add(Color::Blue)?;
//! assert_eq!(timetable.active_draft().courses.len(), 1);
//!
//! // Adding it again collides with itself
//! assert!(timetable.begin_add(cs101).is_err());
//! # Ok::<(), timetable_core::TimetableError>(())
//! ```

use log::{debug, error};

use crate::{
    error::{Result, TimetableError},
    grid::{ExportRequest, Grid},
    models::{Color, LockKey, ScheduledCourse, TimeSlot, TimetableDraft, TimetableSnapshot},
};

pub mod lifecycle;
pub mod locks;
pub mod pending;
pub mod store;


pub use lifecycle::DraftLifecycle;
pub use locks::LockTracker;
pub use pending::PendingAddition;
pub use store::{DraftStore, INITIAL_DRAFT_NAME};

/// In-memory state of one planning session.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    store: DraftStore,
    locks: LockTracker,
    pending: Option<PendingAddition>,
}

impl Timetable {
    /// Starts a session with one empty, active "Draft 1" and no locks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a session from its persisted form.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::InvalidInput` if the snapshot breaks a draft
    /// invariant (no drafts, unknown active id, overlapping courses).
    pub fn from_snapshot(snapshot: TimetableSnapshot) -> Result<Self> {
        let store = DraftStore::from_drafts(snapshot.drafts, snapshot.active_draft_id)?;
        Ok(Self {
            store,
            locks: LockTracker::from_keys(snapshot.locked_keys),
            pending: None,
        })
    }

    /// The persisted form of this session. Pending additions are not saved.
    pub fn snapshot(&self) -> TimetableSnapshot {
        TimetableSnapshot {
            drafts: self.store.drafts().to_vec(),
            active_draft_id: self.store.active_draft_id(),
            locked_keys: self.locks.keys().cloned().collect(),
        }
    }

    pub fn store(&self) -> &DraftStore {
        &self.store
    }

    pub fn locks(&self) -> &LockTracker {
        &self.locks
    }

    pub fn drafts(&self) -> &[TimetableDraft] {
        self.store.drafts()
    }

    pub fn active_draft(&self) -> &TimetableDraft {
        self.store.active_draft()
    }

    /// Looks up a draft, defaulting to the active one.
    pub fn draft(&self, id: Option<u64>) -> Result<&TimetableDraft> {
        match id {
            None => Ok(self.store.active_draft()),
            Some(id) => self
                .store
                .draft(id)
                .ok_or(TimetableError::DraftNotFound { id }),
        }
    }

    /// Lifecycle operations over this session's drafts and locks.
    pub fn lifecycle(&mut self) -> DraftLifecycle<'_> {
        DraftLifecycle::new(&mut self.store, &self.locks)
    }

    pub fn create_draft(&mut self, name: Option<&str>) -> Result<&TimetableDraft> {
        self.lifecycle().create_draft(name)
    }

    pub fn duplicate_draft(&mut self, source_id: u64, name: Option<&str>) -> Result<&TimetableDraft> {
        self.lifecycle().duplicate_draft(source_id, name)
    }

    pub fn delete_draft(&mut self, id: u64) -> Result<TimetableDraft> {
        self.lifecycle().delete_draft(id)
    }

    pub fn switch_draft(&mut self, id: u64) -> Result<&TimetableDraft> {
        self.lifecycle().switch_draft(id)
    }

    pub fn rename_draft(&mut self, id: u64, name: &str) -> Result<&TimetableDraft> {
        self.lifecycle().rename_draft(id, name)
    }

    /// Removes the whole course from the active draft and drops every lock
    /// key that references it.
    pub fn remove_course(&mut self, course_id: &str, slot: &TimeSlot) -> Result<ScheduledCourse> {
        let removed = self.store.remove_course(course_id, slot)?;
        self.locks.release_course(course_id);
        Ok(removed)
    }

    /// Recolors the course in the active draft; other drafts keep their
    /// own colors.
    pub fn recolor_course(
        &mut self,
        course_id: &str,
        slot: &TimeSlot,
        color: Color,
    ) -> Result<&ScheduledCourse> {
        self.store.recolor_course(course_id, slot, color)
    }

    /// Flips the lock on one occupied cell of the active draft; returns
    /// whether the cell is now locked.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::CourseNotFound` if `course_id` does not
    /// occupy `slot` in the active draft.
    pub fn toggle_lock(&mut self, course_id: &str, slot: &TimeSlot) -> Result<bool> {
        let draft = self.store.active_draft();
        if draft.find_course(course_id, slot).is_none() {
            error!(
                "cannot lock '{}' at {}: not scheduled there in draft {}",
                course_id,
                slot,
                draft.id
            );
            return Err(TimetableError::CourseNotFound {
                course_id: course_id.to_string(),
                slot: *slot,
            });
        }
        Ok(self.locks.toggle(LockKey::new(course_id, *slot)))
    }

    /// Grid of a draft (default: active), with lock markers.
    pub fn grid(&self, draft_id: Option<u64>) -> Result<Grid> {
        let draft = self.draft(draft_id)?;
        Ok(Grid::for_draft(draft, &self.locks))
    }

    /// Describes what an external renderer needs to export a draft.
    pub fn export_request(&self, draft_id: Option<u64>) -> Result<ExportRequest> {
        let draft = self.draft(draft_id)?;
        debug!("export requested for draft {} ('{}')", draft.id, draft.name);
        Ok(ExportRequest::for_draft(draft))
    }
}
