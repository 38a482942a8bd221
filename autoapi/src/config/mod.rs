//! Configuration management for autoapi
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `AUTOAPI_` prefix, `__` for nesting)
//! 2. `autoapi.toml` in the application root (or an explicit file)
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # autoapi.toml
//! [paths]
//! controllers_dir = "app/Http/Controllers/Api"
//! routes_file = "routes/api.php"
//!
//! [defaults]
//! version = "v2"
//! middleware = ["auth:api"]
//!
//! [namespaces]
//! controllers = "App\\Http\\Controllers\\Api"
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use autoapi::config::GeneratorConfig;
//!
//! # fn example() -> autoapi::Result<()> {
//! let config = GeneratorConfig::load_for_root(std::path::Path::new("."))?;
//! let version = config.defaults.version;
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AutoApiError, Result};

/// Name of the per-project configuration file
pub const CONFIG_FILE_NAME: &str = "autoapi.toml";

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "AUTOAPI_";

/// Output locations, relative to the application root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Directory for generated API controllers
    pub controllers_dir: PathBuf,

    /// Directory for generated Eloquent models
    pub models_dir: PathBuf,

    /// Directory for generated migrations
    pub migrations_dir: PathBuf,

    /// Shared route file that route groups are appended to
    pub routes_file: PathBuf,

    /// Directory for generated OpenAPI documents
    pub openapi_dir: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            controllers_dir: PathBuf::from("app/Http/Controllers"),
            models_dir: PathBuf::from("app/Models"),
            migrations_dir: PathBuf::from("database/migrations"),
            routes_file: PathBuf::from("routes/api.php"),
            openapi_dir: PathBuf::from("openapi"),
        }
    }
}

/// Answers used when the operator leaves a prompt blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSettings {
    /// API version prefix
    pub version: String,

    /// Middleware applied when the middleware prompt is left empty
    pub middleware: Vec<String>,

    /// `openapi` field written into generated documents
    pub openapi_version: String,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            version: "v1".to_string(),
            middleware: Vec::new(),
            openapi_version: "3.0.0".to_string(),
        }
    }
}

/// PHP namespaces the generated classes live in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceSettings {
    /// Namespace of generated controllers
    pub controllers: String,

    /// Namespace of generated models
    pub models: String,
}

impl Default for NamespaceSettings {
    fn default() -> Self {
        Self {
            controllers: "App\\Http\\Controllers".to_string(),
            models: "App\\Models".to_string(),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Output locations
    #[serde(default)]
    pub paths: PathSettings,

    /// Prompt defaults
    #[serde(default)]
    pub defaults: DefaultSettings,

    /// PHP namespaces
    #[serde(default)]
    pub namespaces: NamespaceSettings,
}

impl GeneratorConfig {
    /// Load configuration for an application root
    ///
    /// Reads `{root}/autoapi.toml` when present, then applies `AUTOAPI_*`
    /// environment overrides on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file contains invalid TOML or
    /// values of the wrong type.
    pub fn load_for_root(root: &Path) -> Result<Self> {
        let mut figment = Self::base_figment()?;

        let local_config = root.join(CONFIG_FILE_NAME);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, contains invalid TOML, or
    /// holds values of the wrong type.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AutoApiError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let config = Self::base_figment()?
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;
        Ok(config)
    }

    fn base_figment() -> Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.defaults.version, "v1");
        assert!(config.defaults.middleware.is_empty());
        assert_eq!(config.defaults.openapi_version, "3.0.0");
        assert_eq!(config.paths.routes_file, PathBuf::from("routes/api.php"));
        assert_eq!(config.namespaces.models, "App\\Models");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig::load_for_root(dir.path()).unwrap();
        assert_eq!(config.paths, PathSettings::default());
        assert_eq!(config.namespaces, NamespaceSettings::default());
    }

    #[test]
    fn test_load_merges_local_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[defaults]\nmiddleware = [\"auth:api\"]\n\n[paths]\nopenapi_dir = \"docs/openapi\"\n",
        )
        .unwrap();

        let config = GeneratorConfig::load_for_root(dir.path()).unwrap();
        assert_eq!(config.defaults.middleware, vec!["auth:api"]);
        assert_eq!(config.paths.openapi_dir, PathBuf::from("docs/openapi"));
        // Untouched keys keep their defaults
        assert_eq!(config.defaults.version, "v1");
        assert_eq!(config.paths.models_dir, PathBuf::from("app/Models"));
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = GeneratorConfig::load_from(&dir.path().join("missing.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[defaults\nversion = ").unwrap();

        let err = GeneratorConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, crate::AutoApiError::Config(_)));
    }
}
