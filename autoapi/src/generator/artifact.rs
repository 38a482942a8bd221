//! Generated artifact descriptors

use std::fmt;
use std::path::PathBuf;

/// The kinds of file a run produces, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Eloquent model class
    Model,
    /// Schema migration
    Migration,
    /// API controller
    Controller,
    /// Route group appended to the shared routes file
    Routes,
    /// OpenAPI stub document
    OpenApi,
}

impl ArtifactKind {
    /// Every kind, in the order the emitter writes them
    pub const ALL: [Self; 5] = [
        Self::Model,
        Self::Migration,
        Self::Controller,
        Self::Routes,
        Self::OpenApi,
    ];

    /// How the artifact lands on disk
    #[must_use]
    pub const fn write_mode(self) -> WriteMode {
        match self {
            Self::Routes => WriteMode::Append,
            _ => WriteMode::Overwrite,
        }
    }

    /// Short label used in operator feedback
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Migration => "Migration",
            Self::Controller => "Controller",
            Self::Routes => "Routes",
            Self::OpenApi => "OpenAPI spec",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a write replaces the target or extends it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace any existing file
    Overwrite,
    /// Add to the end of the file, creating it if missing
    Append,
}

/// Represents a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// What was generated
    pub kind: ArtifactKind,
    /// Relative path from the application root
    pub path: PathBuf,
    /// File content (for appends, the appended block)
    pub content: String,
    /// How the content was written
    pub mode: WriteMode,
}

impl GeneratedArtifact {
    /// Operator-facing description, e.g. `Controller created`
    #[must_use]
    pub fn description(&self) -> String {
        match self.mode {
            WriteMode::Overwrite => format!("{} created", self.kind),
            WriteMode::Append => format!("{} added", self.kind),
        }
    }
}
