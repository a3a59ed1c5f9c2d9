//! Draft lifecycle: create, duplicate, delete, switch, rename.

use log::{debug, error, info};

use super::{DraftStore, LockTracker};
use crate::{
    error::{Result, TimetableError},
    models::{ScheduledCourse, TimetableDraft},
};

/// Orchestrates changes to the set of drafts.
///
/// Borrows the lock set read-only: creating a fresh draft consults it,
/// nothing here ever changes it. Each operation consumes the borrow so the
/// returned draft can outlive it.
pub struct DraftLifecycle<'a> {
    store: &'a mut DraftStore,
    locks: &'a LockTracker,
}

impl<'a> DraftLifecycle<'a> {
    pub fn new(store: &'a mut DraftStore, locks: &'a LockTracker) -> Self {
        Self { store, locks }
    }

    /// Creates a draft seeded with copies of the active draft's locked
    /// courses and makes it active.
    ///
    /// The seed is neither empty nor a full copy: only courses with at least
    /// one locked cell come along, each with all of its slots and its color.
    pub fn create_draft(self, name: Option<&str>) -> Result<&'a TimetableDraft> {
        let Self { store, locks } = self;
        let name = match name {
            Some(name) => normalize_name(name)?,
            None => format!("Draft {}", store.len() + 1),
        };

        let seed: Vec<ScheduledCourse> = locks
            .courses_locked_in(store.active_draft())
            .into_iter()
            .cloned()
            .collect();

        info!(
            "creating draft '{}' with {} locked course(s) carried over",
            name,
            seed.len()
        );
        Ok(store.push_draft(name, seed))
    }

    /// Creates a full copy of draft `source_id`, ignoring locks, and makes
    /// it active. The source is not modified and no lock keys are added.
    pub fn duplicate_draft(self, source_id: u64, name: Option<&str>) -> Result<&'a TimetableDraft> {
        let store = self.store;
        let source = store.draft(source_id).ok_or_else(|| {
            error!("cannot duplicate draft {source_id}: it does not exist");
            TimetableError::DraftNotFound { id: source_id }
        })?;

        let name = match name {
            Some(name) => normalize_name(name)?,
            None => format!("{} Copy", source.name),
        };
        let courses = source.courses.clone();

        info!("duplicating draft {source_id} as '{name}'");
        Ok(store.push_draft(name, courses))
    }

    /// Deletes draft `id` unless it is the last one. Lock keys are left
    /// alone.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::LastDraft` when only one draft exists and
    /// `TimetableError::DraftNotFound` for an unknown id.
    pub fn delete_draft(self, id: u64) -> Result<TimetableDraft> {
        let removed = self.store.remove_draft(id)?;
        info!(
            "deleted draft {} ('{}'); active draft is now {}",
            id,
            removed.name,
            self.store.active_draft_id()
        );
        Ok(removed)
    }

    pub fn switch_draft(self, id: u64) -> Result<&'a TimetableDraft> {
        let store = self.store;
        store.switch_active_draft(id)?;
        debug!("switched to draft {id}");
        Ok(store.active_draft())
    }

    pub fn rename_draft(self, id: u64, name: &str) -> Result<&'a TimetableDraft> {
        let name = normalize_name(name)?;
        let store = self.store;
        store.rename_draft(id, name)
    }
}

fn normalize_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TimetableError::invalid_input("name").with_reason("draft name must not be empty"));
    }
    Ok(trimmed.to_string())
}
