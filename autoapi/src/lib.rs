//! autoapi: scaffolding engine for Laravel REST API modules
//!
//! Turns a [`GenerationRequest`](generator::GenerationRequest) collected by the
//! interactive CLI into a set of source files for the host application:
//!
//! - an Eloquent model (`app/Models/{Name}.php`)
//! - a migration (`database/migrations/{timestamp}_create_{table}_table.php`)
//! - an API controller (`app/Http/Controllers/{Name}ApiController.php`)
//! - a route group appended to `routes/api.php`
//! - an OpenAPI stub (`openapi/{Name}.json`)
//!
//! Rendering is pure: [`TemplateRenderer`](generator::TemplateRenderer) maps an
//! artifact kind and a request to text. Writing goes through an
//! [`ArtifactSink`](generator::ArtifactSink), so tests can capture output in
//! memory instead of touching the filesystem.
//!
//! # Example
//!
//! ```rust
//! use autoapi::config::GeneratorConfig;
//! use autoapi::generator::{Emitter, GenerationRequest, MemorySink, ModelName};
//!
//! # fn main() -> autoapi::Result<()> {
//! let request = GenerationRequest::new(ModelName::parse("Post")?)
//!     .with_fields(vec!["title:string".into(), "body:text".into()]);
//!
//! let mut sink = MemorySink::default();
//! let config = GeneratorConfig::default();
//! let emitter = Emitter::new(&config, chrono::Utc::now())?;
//! emitter.emit(&request, &mut sink, |_| {})?;
//!
//! assert!(sink.contents("app/Http/Controllers/PostApiController.php").is_some());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod observability;

pub use error::{AutoApiError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::GeneratorConfig;
    pub use crate::error::{AutoApiError, Result};
    pub use crate::generator::{
        parse_fields, parse_list, ArtifactKind, ArtifactSink, Emitter, FieldSpec, FsSink,
        GeneratedArtifact, GenerationRequest, MemorySink, ModelName, TemplateRenderer, WriteMode,
    };
}
