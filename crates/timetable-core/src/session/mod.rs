//! Async persistence facade.
//!
//! A [`Session`] ties a database file to a catalog. The engine itself is
//! synchronous; the session loads a [`Timetable`], lets the caller run one
//! operation against it, and saves the result. SQLite work runs on
//! `spawn_blocking` so callers on a tokio runtime never block a worker.
//!
//! ```text
//! ┌─────────────┐  load   ┌─────────────┐  save   ┌─────────────┐
//! │  Database   │────────▶│  Timetable  │────────▶│  Database   │
//! │ (snapshot)  │         │ (operation) │         │ (snapshot)  │
//! └─────────────┘         └─────────────┘         └─────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use timetable_core::{Color, SessionBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionBuilder::new()
//!     .with_database_path(Some("timetable.db"))
//!     .build()
//!     .await?;
//!
//! let added = session
//!     .apply(|timetable, catalog| {
//!         let course = catalog.require("CS101")?;
//!         timetable.add_course(course, Color::Green)
//!     })
//!     .await?;
//! println!("{added}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use crate::{
    catalog::Catalog,
    db::Database,
    engine::Timetable,
    error::{Result, ResultExt},
};

pub mod builder;


pub use builder::SessionBuilder;

/// A database file plus the catalog it is planned against.
#[derive(Debug, Clone)]
pub struct Session {
    db_path: PathBuf,
    catalog: Catalog,
}

impl Session {
    pub(crate) fn new(db_path: PathBuf, catalog: Catalog) -> Self {
        Self { db_path, catalog }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Loads the stored session, or starts a fresh one with a single empty
    /// draft if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::Database` on storage failures and
    /// `TimetableError::InvalidInput` if the stored snapshot is inconsistent.
    pub async fn load(&self) -> Result<Timetable> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            match db.load_snapshot()? {
                Some(snapshot) => Timetable::from_snapshot(snapshot),
                None => {
                    debug!("no saved session in {}, starting fresh", db_path.display());
                    Ok(Timetable::new())
                }
            }
        })
        .await
        .with_context("Task join error")?
    }

    /// Persists `timetable`, replacing whatever was stored before.
    pub async fn save(&self, timetable: &Timetable) -> Result<()> {
        let db_path = self.db_path.clone();
        let snapshot = timetable.snapshot();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_snapshot(&snapshot)
        })
        .await
        .with_context("Task join error")?
    }

    /// Loads the session, runs `operation`, and saves only if it succeeded.
    ///
    /// A failed operation leaves the stored session untouched.
    pub async fn apply<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut Timetable, &Catalog) -> Result<T>,
    {
        let mut timetable = self.load().await?;
        let output = operation(&mut timetable, &self.catalog)?;
        self.save(&timetable).await?;
        Ok(output)
    }
}
