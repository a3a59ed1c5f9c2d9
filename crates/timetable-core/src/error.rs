//! Error types for the timetable library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::TimeSlot;

/// Comprehensive error type for all timetable operations.
#[derive(Error, Debug)]
pub enum TimetableError {
    /// The candidate course shares a cell with a course already in the draft
    #[error(
        "Time conflict detected: course '{course_id}' overlaps '{blocking_course_id}' at {slot}; course not added"
    )]
    Conflict {
        course_id: String,
        blocking_course_id: String,
        slot: TimeSlot,
    },
    /// Attempted to delete the only remaining draft
    #[error("Cannot delete draft {id}: at least one draft must remain")]
    LastDraft { id: u64 },
    /// Draft not found for the given ID
    #[error("Draft with ID {id} not found")]
    DraftNotFound { id: u64 },
    /// No scheduled course occupies the given cell
    #[error("Course '{course_id}' is not scheduled at {slot} in the active draft")]
    CourseNotFound { course_id: String, slot: TimeSlot },
    /// Course ID is not part of the catalog
    #[error("Course '{course_id}' is not in the catalog")]
    UnknownCourse { course_id: String },
    /// Commit or cancel requested without a checked candidate
    #[error("No course is waiting for a color choice")]
    NoPendingAddition,
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TimetableError {
        TimetableError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TimetableError {
        TimetableError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TimetableError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true for failures the user can recover from by choosing a
    /// different action (conflicts, last-draft protection, bad input).
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Conflict { .. }
                | Self::LastDraft { .. }
                | Self::NoPendingAddition
                | Self::UnknownCourse { .. }
                | Self::InvalidInput { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to TimetableError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| TimetableError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TimetableError::database(message).with_source(e))
    }
}

/// Result type alias for timetable operations
pub type Result<T> = std::result::Result<T, TimetableError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Period};

    #[test]
    fn test_conflict_message_names_category() {
        let err = TimetableError::Conflict {
            course_id: "CS102".to_string(),
            blocking_course_id: "CS101".to_string(),
            slot: TimeSlot::new(Day::Monday, Period::EarlyMorning),
        };
        let message = err.to_string();
        assert!(message.contains("Time conflict detected"));
        assert!(message.contains("Monday 8:30am-10:00am"));
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_not_found_is_not_user_facing() {
        let err = TimetableError::DraftNotFound { id: 7 };
        assert_eq!(err.to_string(), "Draft with ID 7 not found");
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = TimetableError::invalid_input("name").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be empty"
        );
    }
}
