//! Markdown grid exporter.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use timetable_core::{ExportRequest, Grid, GridExporter, Result, TimetableError};

/// Writes a draft's grid as `<file stem>.md` into a directory.
///
/// Turning the markdown into an image is left to whatever renders the file.
pub struct MarkdownExporter {
    output_dir: PathBuf,
}

impl MarkdownExporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

impl GridExporter for MarkdownExporter {
    fn export(&self, request: &ExportRequest, grid: &Grid) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|e| TimetableError::FileSystem {
            path: self.output_dir.clone(),
            source: e,
        })?;

        let path = self.output_dir.join(request.file_name("md"));
        fs::write(&path, grid.to_string()).map_err(|e| TimetableError::FileSystem {
            path: path.clone(),
            source: e,
        })?;

        debug!("exported draft {} to {}", request.draft_id, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use timetable_core::Timetable;

    use super::*;

    #[test]
    fn test_export_writes_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut timetable = Timetable::new();
        timetable.rename_draft(1, "Fall 2025").unwrap();

        let request = timetable.export_request(None).unwrap();
        let grid = timetable.grid(None).unwrap();
        let path = MarkdownExporter::new(temp_dir.path().join("out"))
            .export(&request, &grid)
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "Fall_2025.md");
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# 1. Fall 2025"));
    }

    #[test]
    fn test_export_failure_is_filesystem_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();

        let timetable = Timetable::new();
        let err = MarkdownExporter::new(&blocker)
            .export(
                &timetable.export_request(None).unwrap(),
                &timetable.grid(None).unwrap(),
            )
            .unwrap_err();
        assert!(matches!(err, TimetableError::FileSystem { .. }));
    }
}
