//! `make:auto-api`: interactive REST API module generator
//!
//! Walks the operator through a short dialogue, shows a summary, and on
//! confirmation writes:
//! - an Eloquent model and a migration
//! - an API controller
//! - a route group appended to the routes file
//! - an OpenAPI stub
//!
//! # Example
//!
//! ```bash
//! cd my-laravel-app
//! autoapi make:auto-api
//! ```

use anyhow::{Context, Result};
use autoapi::config::GeneratorConfig;
use autoapi::generator::{
    parse_list, ArtifactSink, Emitter, FsSink, GeneratedArtifact, GenerationRequest, ModelName,
};
use chrono::{DateTime, Utc};
use console::style;
use std::path::PathBuf;

use crate::prompt::{Prompter, TerminalPrompter};

/// How a run ended
#[derive(Debug)]
pub enum Outcome {
    /// Files were written
    Generated(Vec<GeneratedArtifact>),
    /// The operator rejected the summary; nothing was written
    Cancelled,
}

/// Interactive API generator command
pub struct MakeApiCommand {
    /// Application root the artifacts are written under
    root: PathBuf,
    /// Paths, defaults and namespaces
    config: GeneratorConfig,
}

impl MakeApiCommand {
    /// Create the command for an application root
    #[must_use]
    pub const fn new(root: PathBuf, config: GeneratorConfig) -> Self {
        Self { root, config }
    }

    /// Run the dialogue on the terminal and write into the application root
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model name is empty or invalid (nothing is written)
    /// - A prompt cannot be read
    /// - A file cannot be written (earlier files are kept)
    pub fn execute(&self) -> Result<Outcome> {
        let mut prompter = TerminalPrompter;
        let mut sink = FsSink::new(&self.root);
        self.run(&mut prompter, &mut sink, Utc::now())
    }

    /// Run the dialogue with an explicit prompter, sink and clock
    ///
    /// # Errors
    ///
    /// See [`MakeApiCommand::execute`].
    pub fn run<P, S>(&self, prompter: &mut P, sink: &mut S, now: DateTime<Utc>) -> Result<Outcome>
    where
        P: Prompter + ?Sized,
        S: ArtifactSink + ?Sized,
    {
        println!(
            "\n{}",
            style("Welcome to AutoAPI Generator! Let's create your API step-by-step.")
                .blue()
                .bold()
        );

        let request = self.collect_request(prompter)?;

        Self::display_summary(&request);
        if !prompter.confirm("Proceed with these settings?", true)? {
            println!("{}", style("Generation cancelled.").red());
            return Ok(Outcome::Cancelled);
        }

        println!(
            "\n{} {}{}",
            style("Generating Auto API for").cyan().bold(),
            style(&request.model_name).green().bold(),
            style("...").cyan().bold()
        );

        let emitter = Emitter::new(&self.config, now).context("Failed to prepare templates")?;
        let artifacts = emitter
            .emit(&request, sink, |artifact| {
                println!(
                    "  {} {}: {}",
                    style("✓").green(),
                    artifact.description(),
                    style(artifact.path.display()).dim()
                );
            })
            .with_context(|| format!("Failed to generate API for {}", request.model_name))?;

        println!(
            "\n{} API for {} created successfully!",
            style("✨").green().bold(),
            style(&request.model_name).green().bold()
        );

        println!("\n{}", style("Next steps:").cyan().bold());
        println!("  1. Run the migration: {}", style("php artisan migrate").yellow());
        println!(
            "  2. Check the routes: {}",
            style(format!("php artisan route:list --path={}", request.route_segment())).yellow()
        );

        Ok(Outcome::Generated(artifacts))
    }

    /// Ask every question and build the request
    ///
    /// # Errors
    ///
    /// Returns an error if the model name is invalid or a prompt fails.
    pub fn collect_request<P: Prompter + ?Sized>(
        &self,
        prompter: &mut P,
    ) -> Result<GenerationRequest> {
        let model_name = Self::ask_model_name(prompter)?;
        let fields = Self::ask_fields(prompter, &model_name)?;
        let version = self.ask_version(prompter)?;
        let soft_deletes = Self::ask_soft_deletes(prompter)?;

        let mut request = GenerationRequest::new(model_name)
            .with_fields(fields)
            .with_version(version)
            .with_soft_deletes(soft_deletes);

        if let Some(searchable_fields) = Self::ask_search(prompter)? {
            request = request.with_search(searchable_fields);
        }

        Ok(request.with_middleware(self.ask_middleware(prompter)?))
    }

    fn ask_model_name<P: Prompter + ?Sized>(prompter: &mut P) -> Result<ModelName> {
        let answer =
            prompter.input("Model name? (e.g., Post; must start with a capital letter)", None)?;
        let model_name = ModelName::parse(answer.trim())?;
        tracing::debug!(model = %model_name, "model name accepted");
        Ok(model_name)
    }

    fn ask_fields<P: Prompter + ?Sized>(
        prompter: &mut P,
        model_name: &ModelName,
    ) -> Result<Vec<String>> {
        println!(
            "{}",
            style(format!(
                "Define fields for {model_name} (e.g., title:string, user_id:select). Leave blank to finish."
            ))
            .cyan()
        );

        let mut fields = Vec::new();
        loop {
            let field = prompter.input("Enter a field", None)?;
            let field = field.trim();
            if field.is_empty() {
                break;
            }
            fields.push(field.to_string());
        }
        Ok(fields)
    }

    fn ask_version<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<String> {
        let default = &self.config.defaults.version;
        let answer = prompter.input(
            &format!("API version? (e.g., v1, v2; default: {default})"),
            Some(default),
        )?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default.clone()
        } else {
            answer.to_string()
        })
    }

    fn ask_soft_deletes<P: Prompter + ?Sized>(prompter: &mut P) -> Result<bool> {
        prompter.confirm("Enable soft deletes?", false)
    }

    /// `None` when search is off; an empty list means every string field
    fn ask_search<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Option<Vec<String>>> {
        if !prompter.confirm("Enable search?", false)? {
            return Ok(None);
        }
        Self::ask_searchable_fields(prompter).map(Some)
    }

    fn ask_searchable_fields<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Vec<String>> {
        let answer = prompter.input(
            "Searchable fields (comma-separated; leave blank for all string fields)?",
            None,
        )?;
        Ok(parse_list(&answer))
    }

    fn ask_middleware<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<Vec<String>> {
        let answer = prompter.input("Middleware (comma-separated, e.g., auth:api,throttle)?", None)?;
        let middleware = parse_list(&answer);
        Ok(if middleware.is_empty() {
            self.config.defaults.middleware.clone()
        } else {
            middleware
        })
    }

    fn display_summary(request: &GenerationRequest) {
        let or_none = |items: &[String]| {
            if items.is_empty() {
                "None".to_string()
            } else {
                items.join(", ")
            }
        };
        let yes_no = |flag: bool| if flag { "Yes" } else { "No" };

        let search = if !request.search_enabled {
            "Disabled".to_string()
        } else if request.searchable_fields.is_empty() {
            "All string fields".to_string()
        } else {
            request.searchable_fields.join(", ")
        };

        println!("\n{}", style("API Settings:").cyan().bold());
        println!("  {} {}", style("Model:").green(), request.model_name);
        println!("  {} {}", style("Fields:").green(), or_none(&request.fields));
        println!("  {} {}", style("Version:").green(), request.version);
        println!("  {} {}", style("Soft deletes:").green(), yes_no(request.soft_deletes));
        println!("  {} {}", style("Search:").green(), search);
        println!("  {} {}", style("Middleware:").green(), or_none(&request.middleware));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    fn command() -> MakeApiCommand {
        MakeApiCommand::new(PathBuf::from("."), GeneratorConfig::default())
    }

    #[test]
    fn test_collect_minimal_request() {
        let mut prompter = ScriptedPrompter::new(["Post", "", "", "n", "n", ""]);
        let request = command().collect_request(&mut prompter).unwrap();

        assert_eq!(request.model_name.as_str(), "Post");
        assert!(request.fields.is_empty());
        assert_eq!(request.version, "v1");
        assert!(!request.soft_deletes);
        assert!(!request.search_enabled);
        assert!(request.middleware.is_empty());
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_collect_full_request() {
        let mut prompter = ScriptedPrompter::new([
            "Post",
            "title:string",
            "user_id:select",
            "  flag  ",
            "",
            "v2",
            "y",
            "y",
            "title, flag",
            "auth:api, throttle",
        ]);
        let request = command().collect_request(&mut prompter).unwrap();

        assert_eq!(request.fields, vec!["title:string", "user_id:select", "flag"]);
        assert_eq!(request.version, "v2");
        assert!(request.soft_deletes);
        assert!(request.search_enabled);
        assert_eq!(request.searchable_fields, vec!["title", "flag"]);
        assert_eq!(request.middleware, vec!["auth:api", "throttle"]);
    }

    #[test]
    fn test_invalid_model_name_stops_dialogue() {
        let mut prompter = ScriptedPrompter::new(["post", "title:string"]);
        let err = command().collect_request(&mut prompter).unwrap_err();

        assert!(err
            .downcast_ref::<autoapi::AutoApiError>()
            .is_some_and(|e| matches!(e, autoapi::AutoApiError::InvalidModelName(_))));
        assert_eq!(prompter.asked().len(), 1);
    }

    #[test]
    fn test_configured_default_middleware() {
        let mut config = GeneratorConfig::default();
        config.defaults.middleware = vec!["auth:api".to_string()];
        let command = MakeApiCommand::new(PathBuf::from("."), config);

        let mut prompter = ScriptedPrompter::new(["Post", "", "", "n", "n", " , "]);
        let request = command.collect_request(&mut prompter).unwrap();
        assert_eq!(request.middleware, vec!["auth:api"]);
    }
}
