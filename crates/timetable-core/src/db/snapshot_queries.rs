//! Snapshot save and load.

use jiff::Timestamp;
use log::debug;
use rusqlite::{OptionalExtension, params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result, TimetableError},
    models::{Color, Course, Day, LockKey, Period, ScheduledCourse, TimetableDraft, TimetableSnapshot},
};

const ACTIVE_DRAFT_KEY: &str = "active_draft_id";

const CLEAR_SQL: &str = "DELETE FROM scheduled_courses;
DELETE FROM drafts;
DELETE FROM locked_cells;
DELETE FROM session_meta;";
const INSERT_DRAFT_SQL: &str = "INSERT INTO drafts (id, name, position, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_COURSE_SQL: &str = "INSERT INTO scheduled_courses (draft_id, position, course_id, course_json, color) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_LOCK_SQL: &str = "INSERT INTO locked_cells (course_id, day, period) VALUES (?1, ?2, ?3)";
const INSERT_META_SQL: &str = "INSERT INTO session_meta (key, value) VALUES (?1, ?2)";

const SELECT_META_SQL: &str = "SELECT value FROM session_meta WHERE key = ?1";
const SELECT_DRAFTS_SQL: &str =
    "SELECT id, name, created_at, updated_at FROM drafts ORDER BY position";
const SELECT_COURSES_SQL: &str =
    "SELECT course_json, color FROM scheduled_courses WHERE draft_id = ?1 ORDER BY position";
const SELECT_LOCKS_SQL: &str = "SELECT course_id, day, period FROM locked_cells";

/// Wraps a parse failure so it can travel through a rusqlite row mapper.
fn conversion_error(column: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}

fn parse_timestamp(column: usize, raw: String) -> rusqlite::Result<Timestamp> {
    raw.parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Replaces the stored session with `snapshot`.
    ///
    /// Everything happens in one transaction: either the whole snapshot is
    /// written or the previous one stays intact.
    pub fn save_snapshot(&mut self, snapshot: &TimetableSnapshot) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute_batch(CLEAR_SQL)
            .db_context("Failed to clear previous session")?;

        for (position, draft) in snapshot.drafts.iter().enumerate() {
            tx.execute(
                INSERT_DRAFT_SQL,
                params![
                    draft.id as i64,
                    &draft.name,
                    position as i64,
                    draft.created_at.to_string(),
                    draft.updated_at.to_string()
                ],
            )
            .db_context("Failed to insert draft")?;

            for (course_position, scheduled) in draft.courses.iter().enumerate() {
                let course_json = serde_json::to_string(&scheduled.course)?;
                tx.execute(
                    INSERT_COURSE_SQL,
                    params![
                        draft.id as i64,
                        course_position as i64,
                        scheduled.id(),
                        course_json,
                        scheduled.color.as_str()
                    ],
                )
                .db_context("Failed to insert scheduled course")?;
            }
        }

        for key in &snapshot.locked_keys {
            tx.execute(
                INSERT_LOCK_SQL,
                params![&key.course_id, key.day.as_str(), key.period.label()],
            )
            .db_context("Failed to insert locked cell")?;
        }

        tx.execute(
            INSERT_META_SQL,
            params![ACTIVE_DRAFT_KEY, snapshot.active_draft_id.to_string()],
        )
        .db_context("Failed to record active draft")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "saved {} draft(s) and {} lock(s)",
            snapshot.drafts.len(),
            snapshot.locked_keys.len()
        );
        Ok(())
    }

    /// Reads the stored session, or `None` if nothing has been saved yet.
    ///
    /// The snapshot is returned as stored; restoring it into a
    /// [`Timetable`](crate::Timetable) is what validates it.
    pub fn load_snapshot(&self) -> Result<Option<TimetableSnapshot>> {
        let active: Option<String> = self
            .connection
            .query_row(SELECT_META_SQL, params![ACTIVE_DRAFT_KEY], |row| row.get(0))
            .optional()
            .db_context("Failed to read active draft")?;

        let Some(active) = active else {
            return Ok(None);
        };
        let active_draft_id = active.parse::<u64>().map_err(|_| {
            TimetableError::invalid_input(ACTIVE_DRAFT_KEY)
                .with_reason(format!("stored value '{active}' is not a draft ID"))
        })?;

        let mut drafts = self.load_drafts()?;
        for draft in &mut drafts {
            draft.courses = self.load_courses(draft.id)?;
        }

        Ok(Some(TimetableSnapshot {
            drafts,
            active_draft_id,
            locked_keys: self.load_locks()?,
        }))
    }

    fn load_drafts(&self) -> Result<Vec<TimetableDraft>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DRAFTS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(TimetableDraft {
                    id: row.get::<_, i64>(0)? as u64,
                    name: row.get(1)?,
                    courses: Vec::new(),
                    created_at: parse_timestamp(2, row.get(2)?)?,
                    updated_at: parse_timestamp(3, row.get(3)?)?,
                })
            })
            .db_context("Failed to query drafts")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read drafts")
    }

    fn load_courses(&self, draft_id: u64) -> Result<Vec<ScheduledCourse>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COURSES_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![draft_id as i64], |row| {
                let course_json: String = row.get(0)?;
                let course: Course = serde_json::from_str(&course_json).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
                })?;
                let color = row
                    .get::<_, String>(1)?
                    .parse::<Color>()
                    .map_err(|e| conversion_error(1, e))?;
                Ok(ScheduledCourse::new(course, color))
            })
            .db_context("Failed to query scheduled courses")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read scheduled courses")
    }

    fn load_locks(&self) -> Result<Vec<LockKey>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LOCKS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], |row| {
                let day = row
                    .get::<_, String>(1)?
                    .parse::<Day>()
                    .map_err(|e| conversion_error(1, e))?;
                let period = row
                    .get::<_, String>(2)?
                    .parse::<Period>()
                    .map_err(|e| conversion_error(2, e))?;
                Ok(LockKey {
                    course_id: row.get(0)?,
                    day,
                    period,
                })
            })
            .db_context("Failed to query locked cells")?;

        let mut keys = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read locked cells")?;
        keys.sort();
        Ok(keys)
    }
}
