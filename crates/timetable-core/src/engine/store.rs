//! Draft storage and course-set mutations.

use std::collections::HashSet;

use log::{debug, error, warn};

use crate::{
    conflict::find_conflict,
    error::{Result, TimetableError},
    models::{Color, Course, ScheduledCourse, TimeSlot, TimetableDraft},
};

/// Name of the draft every new session starts with.
pub const INITIAL_DRAFT_NAME: &str = "Draft 1";

/// Owns every draft and the pointer to the active one.
///
/// At least one draft always exists and `active_draft_id` always names one
/// of them. Course additions are conflict-checked against the target draft
/// before anything is written.
#[derive(Debug, Clone)]
pub struct DraftStore {
    drafts: Vec<TimetableDraft>,
    active_draft_id: u64,
    next_id: u64,
}

impl DraftStore {
    /// Creates a store holding a single empty, active "Draft 1".
    pub fn new() -> Self {
        Self {
            drafts: vec![TimetableDraft::new(1, INITIAL_DRAFT_NAME, Vec::new())],
            active_draft_id: 1,
            next_id: 2,
        }
    }

    /// Rebuilds a store from persisted drafts.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::InvalidInput` if the list is empty, ids are
    /// duplicated, the active id is unknown, a scheduled course fails
    /// [`Course::validate`], or any draft holds the same course twice or two
    /// courses sharing a cell.
    pub fn from_drafts(drafts: Vec<TimetableDraft>, active_draft_id: u64) -> Result<Self> {
        if drafts.is_empty() {
            return Err(TimetableError::invalid_input("drafts").with_reason("at least one draft is required"));
        }

        let mut ids = HashSet::new();
        for draft in &drafts {
            if !ids.insert(draft.id) {
                return Err(TimetableError::invalid_input("drafts")
                    .with_reason(format!("duplicate draft ID {}", draft.id)));
            }
            let mut course_ids = HashSet::new();
            for (index, scheduled) in draft.courses.iter().enumerate() {
                scheduled.course.validate()?;
                if !course_ids.insert(scheduled.id()) {
                    return Err(TimetableError::invalid_input("drafts").with_reason(format!(
                        "draft {} schedules '{}' twice",
                        draft.id,
                        scheduled.id()
                    )));
                }
                if let Some(conflict) = find_conflict(&scheduled.course, &draft.courses[..index]) {
                    return Err(TimetableError::invalid_input("drafts").with_reason(format!(
                        "draft {} schedules '{}' and '{}' at {}",
                        draft.id,
                        conflict.existing.id(),
                        scheduled.id(),
                        conflict.slot
                    )));
                }
            }
        }

        if !ids.contains(&active_draft_id) {
            return Err(TimetableError::invalid_input("active_draft_id")
                .with_reason(format!("no draft with ID {active_draft_id}")));
        }

        let next_id = drafts.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        Ok(Self {
            drafts,
            active_draft_id,
            next_id,
        })
    }

    /// All drafts in list order.
    pub fn drafts(&self) -> &[TimetableDraft] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn active_draft_id(&self) -> u64 {
        self.active_draft_id
    }

    pub fn active_draft(&self) -> &TimetableDraft {
        let index = self.position(self.active_draft_id).unwrap_or(0);
        &self.drafts[index]
    }

    pub fn draft(&self, id: u64) -> Option<&TimetableDraft> {
        self.drafts.iter().find(|d| d.id == id)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.drafts.iter().position(|d| d.id == id)
    }

    fn draft_mut(&mut self, id: u64) -> Result<&mut TimetableDraft> {
        match self.drafts.iter_mut().find(|d| d.id == id) {
            Some(draft) => Ok(draft),
            None => {
                error!("draft {id} does not exist");
                Err(TimetableError::DraftNotFound { id })
            }
        }
    }

    /// Runs the conflict check for adding `course` to draft `draft_id`.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::InvalidInput` if the course itself is not
    /// bookable, `TimetableError::Conflict` naming the first blocking course,
    /// or `TimetableError::DraftNotFound` for an unknown draft.
    pub fn check_addition(&self, draft_id: u64, course: &Course) -> Result<()> {
        course.validate()?;

        let draft = self.draft(draft_id).ok_or_else(|| {
            error!("draft {draft_id} does not exist");
            TimetableError::DraftNotFound { id: draft_id }
        })?;

        match find_conflict(course, &draft.courses) {
            Some(conflict) => {
                warn!(
                    "rejected '{}' in draft {}: overlaps '{}' at {}",
                    course.id,
                    draft_id,
                    conflict.existing.id(),
                    conflict.slot
                );
                Err(TimetableError::Conflict {
                    course_id: course.id.clone(),
                    blocking_course_id: conflict.existing.id().to_string(),
                    slot: conflict.slot,
                })
            }
            None => Ok(()),
        }
    }

    /// Appends `course` to draft `draft_id` with `color`, checking for
    /// conflicts first. Nothing changes on error.
    pub fn commit_addition(
        &mut self,
        draft_id: u64,
        course: Course,
        color: Color,
    ) -> Result<&ScheduledCourse> {
        self.check_addition(draft_id, &course)?;

        let draft = self.draft_mut(draft_id)?;
        debug!("scheduled '{}' in draft {} as {}", course.id, draft_id, color);
        draft.courses.push(ScheduledCourse::new(course, color));
        draft.touch();

        let index = draft.courses.len() - 1;
        Ok(&draft.courses[index])
    }

    /// Removes the whole course `course_id` from the active draft, located
    /// through one of its cells. All of the course's cells are freed.
    ///
    /// Lock keys are not touched here; see
    /// [`Timetable::remove_course`](super::Timetable::remove_course).
    pub fn remove_course(&mut self, course_id: &str, slot: &TimeSlot) -> Result<ScheduledCourse> {
        let active_id = self.active_draft_id;
        let draft = self.draft_mut(active_id)?;

        let Some(index) = draft.courses.iter().position(|c| c.matches(course_id, slot)) else {
            error!("'{course_id}' is not scheduled at {slot} in draft {active_id}");
            return Err(TimetableError::CourseNotFound {
                course_id: course_id.to_string(),
                slot: *slot,
            });
        };

        let removed = draft.courses.remove(index);
        draft.touch();
        debug!("removed '{course_id}' from draft {active_id}");
        Ok(removed)
    }

    /// Changes the color of one course in the active draft only.
    pub fn recolor_course(
        &mut self,
        course_id: &str,
        slot: &TimeSlot,
        color: Color,
    ) -> Result<&ScheduledCourse> {
        let active_id = self.active_draft_id;
        let draft = self.draft_mut(active_id)?;

        let Some(index) = draft.courses.iter().position(|c| c.matches(course_id, slot)) else {
            error!("'{course_id}' is not scheduled at {slot} in draft {active_id}");
            return Err(TimetableError::CourseNotFound {
                course_id: course_id.to_string(),
                slot: *slot,
            });
        };

        draft.courses[index].color = color;
        draft.touch();
        debug!("recolored '{course_id}' in draft {active_id} to {color}");
        Ok(&draft.courses[index])
    }

    /// Points the store at another draft. An unknown id leaves the active
    /// draft unchanged.
    pub fn switch_active_draft(&mut self, id: u64) -> Result<()> {
        if self.position(id).is_none() {
            error!("cannot switch to draft {id}: it does not exist");
            return Err(TimetableError::DraftNotFound { id });
        }
        self.active_draft_id = id;
        Ok(())
    }

    /// Appends a new draft with a fresh id and makes it active.
    pub(crate) fn push_draft(
        &mut self,
        name: String,
        courses: Vec<ScheduledCourse>,
    ) -> &TimetableDraft {
        let id = self.next_id;
        self.next_id += 1;
        self.drafts.push(TimetableDraft::new(id, name, courses));
        self.active_draft_id = id;

        let index = self.drafts.len() - 1;
        &self.drafts[index]
    }

    /// Removes draft `id`. When the active draft goes, the first remaining
    /// draft in list order becomes active.
    pub(crate) fn remove_draft(&mut self, id: u64) -> Result<TimetableDraft> {
        let Some(index) = self.position(id) else {
            error!("cannot delete draft {id}: it does not exist");
            return Err(TimetableError::DraftNotFound { id });
        };
        if self.drafts.len() == 1 {
            warn!("refused to delete draft {id}: it is the last one");
            return Err(TimetableError::LastDraft { id });
        }

        let removed = self.drafts.remove(index);
        if self.active_draft_id == id {
            self.active_draft_id = self.drafts[0].id;
        }
        Ok(removed)
    }

    pub(crate) fn rename_draft(&mut self, id: u64, name: String) -> Result<&TimetableDraft> {
        let draft = self.draft_mut(id)?;
        draft.name = name;
        draft.touch();
        Ok(draft)
    }
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}
