//! Artifact sinks: where rendered files end up
//!
//! The emitter never touches the filesystem directly. [`FsSink`] writes under
//! an application root; [`MemorySink`] keeps everything in a map so tests can
//! assert on exact content, including the append-only routes file.
//!
//! Appends are not locked. Two runs against the same project at once can
//! interleave their route blocks.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AutoApiError, Result};

/// Destination for generated files
pub trait ArtifactSink {
    /// Replace the file at `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parents cannot be written.
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;

    /// Append to the file at `path`, creating it and its parents if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parents cannot be written.
    fn append(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// Writes artifacts relative to an application root on disk
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Create a sink rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The application root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn prepare(&self, path: &Path) -> Result<PathBuf> {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| AutoApiError::io(parent, e))?;
        }
        Ok(full_path)
    }
}

impl ArtifactSink for FsSink {
    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        let full_path = self.prepare(path)?;
        fs::write(&full_path, content).map_err(|e| AutoApiError::io(&full_path, e))
    }

    fn append(&mut self, path: &Path, content: &str) -> Result<()> {
        let full_path = self.prepare(path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&full_path)
            .map_err(|e| AutoApiError::io(&full_path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| AutoApiError::io(&full_path, e))
    }
}

/// In-memory sink keyed by relative path
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    /// Seed a file, as if it already existed in the project
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Content of a file, if it was written or seeded
    #[must_use]
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// All paths currently held
    #[must_use]
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Number of files held
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no file has been written or seeded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files
            .entry(path.to_path_buf())
            .or_default()
            .push_str(content);
        Ok(())
    }
}
