//! Emitter: renders a confirmed request and hands each artifact to a sink
//!
//! Artifacts are written in a fixed order (model, migration, controller,
//! routes, OpenAPI). There is no transaction across them: if a write fails,
//! the files written before it stay in place.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

use super::artifact::{ArtifactKind, GeneratedArtifact, WriteMode};
use super::request::GenerationRequest;
use super::sink::ArtifactSink;
use super::templates::TemplateRenderer;
use crate::config::{GeneratorConfig, PathSettings};
use crate::error::Result;

/// Migration file timestamp, e.g. `2025_01_31_142500`
const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// API module emitter
pub struct Emitter {
    renderer: TemplateRenderer,
    paths: PathSettings,
    timestamp: DateTime<Utc>,
}

impl Emitter {
    /// Create an emitter
    ///
    /// `timestamp` names the migration file; pass `Utc::now()` in production
    /// and a fixed instant in tests.
    ///
    /// # Errors
    ///
    /// Returns an error if template registration fails.
    pub fn new(config: &GeneratorConfig, timestamp: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            renderer: TemplateRenderer::new(config)?,
            paths: config.paths.clone(),
            timestamp,
        })
    }

    /// Relative path an artifact is written to
    #[must_use]
    pub fn path_for(&self, kind: ArtifactKind, request: &GenerationRequest) -> PathBuf {
        let model_name = request.model_name.as_str();

        match kind {
            ArtifactKind::Model => self.paths.models_dir.join(format!("{model_name}.php")),
            ArtifactKind::Migration => {
                let timestamp = self.timestamp.format(MIGRATION_TIMESTAMP_FORMAT);
                let table = request.route_segment();
                self.paths
                    .migrations_dir
                    .join(format!("{timestamp}_create_{table}_table.php"))
            }
            ArtifactKind::Controller => self
                .paths
                .controllers_dir
                .join(format!("{}.php", request.controller_name())),
            ArtifactKind::Routes => self.paths.routes_file.clone(),
            ArtifactKind::OpenApi => self.paths.openapi_dir.join(format!("{model_name}.json")),
        }
    }

    /// Render an artifact without writing it
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn artifact(
        &self,
        kind: ArtifactKind,
        request: &GenerationRequest,
    ) -> Result<GeneratedArtifact> {
        Ok(GeneratedArtifact {
            kind,
            path: self.path_for(kind, request),
            content: self.renderer.render(kind, request)?,
            mode: kind.write_mode(),
        })
    }

    /// Render and write a single artifact
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn emit_kind<S: ArtifactSink + ?Sized>(
        &self,
        kind: ArtifactKind,
        request: &GenerationRequest,
        sink: &mut S,
    ) -> Result<GeneratedArtifact> {
        let artifact = self.artifact(kind, request)?;

        match artifact.mode {
            WriteMode::Overwrite => sink.write(&artifact.path, &artifact.content)?,
            WriteMode::Append => sink.append(&artifact.path, &artifact.content)?,
        }

        tracing::info!(
            kind = %artifact.kind,
            path = %artifact.path.display(),
            "artifact written"
        );
        Ok(artifact)
    }

    /// Render and write every artifact for a request
    ///
    /// `on_written` runs after each successful write so callers can report
    /// progress as it happens.
    ///
    /// # Errors
    ///
    /// Returns the first rendering or write error. Artifacts written before
    /// the failure are not rolled back.
    pub fn emit<S, F>(
        &self,
        request: &GenerationRequest,
        sink: &mut S,
        mut on_written: F,
    ) -> Result<Vec<GeneratedArtifact>>
    where
        S: ArtifactSink + ?Sized,
        F: FnMut(&GeneratedArtifact),
    {
        for name in request.unknown_searchable_fields() {
            tracing::warn!(field = %name, "searchable field is not among the declared fields");
        }

        let mut written = Vec::with_capacity(ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            let artifact = self.emit_kind(kind, request, sink)?;
            on_written(&artifact);
            written.push(artifact);
        }

        Ok(written)
    }

    /// Write the model class
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn generate_model<S: ArtifactSink + ?Sized>(
        &self,
        request: &GenerationRequest,
        sink: &mut S,
    ) -> Result<GeneratedArtifact> {
        self.emit_kind(ArtifactKind::Model, request, sink)
    }

    /// Write the migration
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn generate_migration<S: ArtifactSink + ?Sized>(
        &self,
        request: &GenerationRequest,
        sink: &mut S,
    ) -> Result<GeneratedArtifact> {
        self.emit_kind(ArtifactKind::Migration, request, sink)
    }

    /// Write the controller, replacing any existing one
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn generate_controller<S: ArtifactSink + ?Sized>(
        &self,
        request: &GenerationRequest,
        sink: &mut S,
    ) -> Result<GeneratedArtifact> {
        self.emit_kind(ArtifactKind::Controller, request, sink)
    }

    /// Append the route group; repeated calls append duplicate groups
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn generate_routes<S: ArtifactSink + ?Sized>(
        &self,
        request: &GenerationRequest,
        sink: &mut S,
    ) -> Result<GeneratedArtifact> {
        self.emit_kind(ArtifactKind::Routes, request, sink)
    }

    /// Write the OpenAPI stub
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn generate_openapi_spec<S: ArtifactSink + ?Sized>(
        &self,
        request: &GenerationRequest,
        sink: &mut S,
    ) -> Result<GeneratedArtifact> {
        self.emit_kind(ArtifactKind::OpenApi, request, sink)
    }
}
