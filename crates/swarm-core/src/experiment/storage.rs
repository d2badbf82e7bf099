//! Experiment log storage implementations

use super::entry::ExperimentEntry;
use crate::error::{SwarmError, SwarmResult};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination for experiment entries
pub trait ExperimentSink: Send + Sync {
    /// Append an entry
    fn record(&self, entry: ExperimentEntry) -> SwarmResult<()>;

    /// All entries recorded so far, oldest first
    fn entries(&self) -> SwarmResult<Vec<ExperimentEntry>>;
}

/// JSON array file storage
///
/// The file and its parent directories are created on first write. A missing or
/// empty file reads as an empty log.
pub struct FileExperimentLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileExperimentLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> SwarmResult<Vec<ExperimentEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| SwarmError::io_with_path(e.to_string(), self.path.display().to_string()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl ExperimentSink for FileExperimentLog {
    fn record(&self, entry: ExperimentEntry) -> SwarmResult<()> {
        let _guard = self.write_lock.lock();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                SwarmError::io_with_path(
                    format!("Failed to create log directory: {}", e),
                    parent.display().to_string(),
                )
            })?;
        }

        let mut entries = self.read_all()?;
        entries.push(entry);

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)
            .map_err(|e| SwarmError::io_with_path(e.to_string(), self.path.display().to_string()))?;
        Ok(())
    }

    fn entries(&self) -> SwarmResult<Vec<ExperimentEntry>> {
        self.read_all()
    }
}

/// In-memory storage, for tests and embedding
#[derive(Default)]
pub struct MemoryExperimentLog {
    entries: Mutex<Vec<ExperimentEntry>>,
}

impl MemoryExperimentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl ExperimentSink for MemoryExperimentLog {
    fn record(&self, entry: ExperimentEntry) -> SwarmResult<()> {
        self.entries.lock().push(entry);
        Ok(())
    }

    fn entries(&self) -> SwarmResult<Vec<ExperimentEntry>> {
        Ok(self.entries.lock().clone())
    }
}
