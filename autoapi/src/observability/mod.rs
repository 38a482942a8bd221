//! Observability (structured logging)
//!
//! Log output goes to stderr so it never interleaves with the interactive
//! prompts on stdout. The filter is read from `AUTOAPI_LOG`, then `RUST_LOG`,
//! and falls back to `warn`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "AUTOAPI_LOG";

/// Initialize logging
///
/// Safe to call more than once; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```rust,no_run
/// autoapi::observability::init(&autoapi::observability::ObservabilityConfig::default());
/// tracing::info!("generator started");
/// ```
pub fn init(config: &ObservabilityConfig) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(&config.default_directive));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(config.show_targets)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// Observability configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Filter directive used when no environment override is set
    pub default_directive: String,

    /// Include module targets in log lines
    pub show_targets: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            default_directive: "warn".to_string(),
            show_targets: false,
        }
    }
}

impl ObservabilityConfig {
    /// Derive a config from a `-v` occurrence count
    #[must_use]
    pub fn from_verbosity(verbose: u8) -> Self {
        let default_directive = match verbose {
            0 => "warn",
            1 => "info,autoapi=debug",
            _ => "trace",
        }
        .to_string();

        Self {
            default_directive,
            show_targets: verbose > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.default_directive, "warn");
        assert!(!config.show_targets);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(ObservabilityConfig::from_verbosity(0).default_directive, "warn");
        assert_eq!(
            ObservabilityConfig::from_verbosity(1).default_directive,
            "info,autoapi=debug"
        );
        let trace = ObservabilityConfig::from_verbosity(3);
        assert_eq!(trace.default_directive, "trace");
        assert!(trace.show_targets);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(&ObservabilityConfig::default());
        init(&ObservabilityConfig::from_verbosity(2));
    }
}
