//! CLI command implementations

pub mod make_api;

pub use make_api::{MakeApiCommand, Outcome};
