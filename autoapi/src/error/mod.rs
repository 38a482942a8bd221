//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = AutoApiError> = std::result::Result<T, E>;

/// Generator error type
#[derive(Debug, Error)]
pub enum AutoApiError {
    /// Model name is empty or does not match `^[A-Z][a-zA-Z0-9_]*$`
    #[error("Invalid or empty model name: '{0}'")]
    InvalidModelName(String),

    /// An embedded template failed to compile
    #[error("Template registration error: {0}")]
    TemplateRegistration(#[from] Box<handlebars::TemplateError>),

    /// A template failed to render
    #[error("Template render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// JSON serialization of a generated document failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Filesystem operation failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AutoApiError {
    /// Wrap an I/O error with the path it occurred on
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for AutoApiError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AutoApiError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = AutoApiError::io(
            "routes/api.php",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("routes/api.php"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_invalid_model_name_message() {
        let err = AutoApiError::InvalidModelName("post".to_string());
        assert_eq!(err.to_string(), "Invalid or empty model name: 'post'");
    }
}
