//! autoapi CLI library
//!
//! The interactive `make:auto-api` command and the prompt abstraction it
//! runs on, exposed so the whole dialogue can be driven from tests.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod prompt;

pub use commands::{MakeApiCommand, Outcome};
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
