use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::gateway::ReportArtifact;
use crate::config::ExportConfig;

/// Receipt for an artifact handed over to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedReport {
    pub filename: String,
    pub location: String,
    pub size_bytes: usize,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("invalid report filename '{0}'")]
    InvalidFilename(String),
    #[error("unable to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Host capability that presents report bytes to the user as a file.
///
/// The artifact is moved in so the bytes are released as soon as the save has
/// been initiated.
pub trait ReportSaver: Debug + Send + Sync {
    fn save(&self, artifact: ReportArtifact, filename: &str) -> Result<SavedReport, SaveError>;
}

/// Saves reports into a fixed directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    directory: PathBuf,
}

impl DirectorySaver {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.report_dir.clone())
    }

    pub fn directory(&self) -> &PathBuf {
        &self.directory
    }
}

impl ReportSaver for DirectorySaver {
    fn save(&self, artifact: ReportArtifact, filename: &str) -> Result<SavedReport, SaveError> {
        if filename.is_empty() || filename.contains(['/', '\\']) || filename == ".." {
            return Err(SaveError::InvalidFilename(filename.to_string()));
        }

        fs::create_dir_all(&self.directory).map_err(|source| SaveError::Io {
            path: self.directory.clone(),
            source,
        })?;

        let path = self.directory.join(filename);
        let size_bytes = artifact.len();
        fs::write(&path, artifact.bytes).map_err(|source| SaveError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), size_bytes, "report written");

        Ok(SavedReport {
            filename: filename.to_string(),
            location: path.display().to_string(),
            size_bytes,
            saved_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn scratch_dir(label: &str) -> PathBuf {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "checkmate-saver-{label}-{}-{id}",
            std::process::id()
        ))
    }

    #[test]
    fn writes_artifact_under_requested_name() {
        let dir = scratch_dir("write");
        let saver = DirectorySaver::new(&dir);

        let saved = saver
            .save(ReportArtifact::text("요구사항 1: 충족\n"), "CheckMate_Report.txt")
            .expect("report saved");

        let written = fs::read_to_string(dir.join("CheckMate_Report.txt")).expect("file exists");
        assert_eq!(written, "요구사항 1: 충족\n");
        assert_eq!(saved.filename, "CheckMate_Report.txt");
        assert_eq!(saved.size_bytes, "요구사항 1: 충족\n".len());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn uses_configured_report_dir() {
        let config = ExportConfig {
            report_dir: PathBuf::from("reports/out"),
        };
        assert_eq!(
            DirectorySaver::from_config(&config).directory(),
            &PathBuf::from("reports/out")
        );
    }

    #[test]
    fn rejects_path_like_filenames() {
        let saver = DirectorySaver::new(scratch_dir("reject"));
        match saver.save(ReportArtifact::text("x"), "../escape.txt") {
            Err(SaveError::InvalidFilename(name)) => assert_eq!(name, "../escape.txt"),
            other => panic!("expected invalid filename, got {other:?}"),
        }
    }
}
