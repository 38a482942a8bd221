//! API module generator
//!
//! Transforms a confirmed [`GenerationRequest`] into PHP sources for the host
//! application. Rendering ([`TemplateRenderer`]), path resolution and writing
//! ([`ArtifactSink`]) are separate so each can be exercised on its own.

pub mod artifact;
pub mod emitter;
pub mod field;
pub mod helpers;
pub mod request;
pub mod sink;
pub mod templates;

pub use artifact::{ArtifactKind, GeneratedArtifact, WriteMode};
pub use emitter::Emitter;
pub use field::{parse_fields, parse_list, FieldSpec, DEFAULT_FIELD_TYPE};
pub use helpers::TemplateHelpers;
pub use request::{GenerationRequest, ModelName};
pub use sink::{ArtifactSink, FsSink, MemorySink};
pub use templates::TemplateRenderer;
