//! Builder for creating and configuring sessions.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Session;
use crate::{
    catalog::Catalog,
    db::Database,
    error::{Result, ResultExt, TimetableError},
};

/// Builder for [`Session`]: where the database lives and which catalog to
/// plan against.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    database_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/timetable/timetable.db` or
    /// `~/.local/share/timetable/timetable.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the catalog from a JSON file instead of the built-in sample.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the session, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::FileSystem` if the database directory or the
    /// catalog file cannot be accessed, `TimetableError::Database` if schema
    /// initialization fails, and `TimetableError::InvalidInput` for an
    /// invalid catalog.
    pub async fn build(self) -> Result<Session> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TimetableError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        let catalog_path = self.catalog_path;
        let catalog = task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            match catalog_path {
                Some(path) => Catalog::from_path(path),
                None => Catalog::builtin(),
            }
        })
        .await
        .with_context("Task join error")??;

        Ok(Session::new(db_path, catalog))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("timetable")
            .place_data_file("timetable.db")
            .map_err(|e| TimetableError::XdgDirectory(e.to_string()))
    }
}
