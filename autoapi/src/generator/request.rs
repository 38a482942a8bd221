//! Generation request: the confirmed answers of one run

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::field::{parse_fields, FieldSpec};
use super::helpers::TemplateHelpers;
use crate::error::{AutoApiError, Result};

static MODEL_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9_]*$").expect("model name pattern is valid"));

/// A validated, `StudlyCase` model name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelName(String);

impl ModelName {
    /// Validate and normalise a model name
    ///
    /// The input must match `^[A-Z][a-zA-Z0-9_]*$`. Accepted names are then
    /// normalised to `StudlyCase`, so `User_profile` becomes `UserProfile`.
    ///
    /// ```
    /// # use autoapi::generator::ModelName;
    /// assert_eq!(ModelName::parse("Post").unwrap().as_str(), "Post");
    /// assert_eq!(ModelName::parse("User_profile").unwrap().as_str(), "UserProfile");
    /// assert!(ModelName::parse("post").is_err());
    /// assert!(ModelName::parse("").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`AutoApiError::InvalidModelName`] for empty or non-matching input.
    pub fn parse(input: &str) -> Result<Self> {
        if !MODEL_NAME_PATTERN.is_match(input) {
            return Err(AutoApiError::InvalidModelName(input.to_string()));
        }

        Ok(Self(TemplateHelpers::to_studly_case(input)))
    }

    /// The normalised name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything the emitter needs to generate one API module
///
/// Built once by the prompt dialogue and not modified after confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Model name
    pub model_name: ModelName,
    /// Raw field declarations, in entry order
    pub fields: Vec<String>,
    /// API version prefix
    pub version: String,
    /// Middleware names, in entry order
    pub middleware: Vec<String>,
    /// Generate soft-delete support
    pub soft_deletes: bool,
    /// Generate search support
    pub search_enabled: bool,
    /// Explicit searchable field names; empty means every string field
    pub searchable_fields: Vec<String>,
}

impl GenerationRequest {
    /// Create a request with no fields, version `v1` and no middleware
    #[must_use]
    pub fn new(model_name: ModelName) -> Self {
        Self {
            model_name,
            fields: Vec::new(),
            version: "v1".to_string(),
            middleware: Vec::new(),
            soft_deletes: false,
            search_enabled: false,
            searchable_fields: Vec::new(),
        }
    }

    /// Set the raw field declarations
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    /// Set the API version prefix
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the middleware list
    #[must_use]
    pub fn with_middleware(mut self, middleware: Vec<String>) -> Self {
        self.middleware = middleware;
        self
    }

    /// Enable or disable soft deletes
    #[must_use]
    pub const fn with_soft_deletes(mut self, enabled: bool) -> Self {
        self.soft_deletes = enabled;
        self
    }

    /// Enable search over the given fields (empty means every string field)
    #[must_use]
    pub fn with_search(mut self, searchable_fields: Vec<String>) -> Self {
        self.search_enabled = true;
        self.searchable_fields = searchable_fields;
        self
    }

    /// Parsed field declarations
    #[must_use]
    pub fn parsed_fields(&self) -> Vec<FieldSpec> {
        parse_fields(&self.fields)
    }

    /// Route segment and table name (`Post` → `posts`)
    #[must_use]
    pub fn route_segment(&self) -> String {
        TemplateHelpers::to_route_segment(self.model_name.as_str())
    }

    /// Controller class name (`Post` → `PostApiController`)
    #[must_use]
    pub fn controller_name(&self) -> String {
        TemplateHelpers::to_controller_name(self.model_name.as_str())
    }

    /// Fields the search feature filters on
    ///
    /// Empty when search is disabled. When search is enabled without an
    /// explicit list, every field whose parsed type is exactly `string` is
    /// searchable. An explicit list is returned as entered.
    #[must_use]
    pub fn resolved_searchable_fields(&self) -> Vec<String> {
        if !self.search_enabled {
            return Vec::new();
        }

        if self.searchable_fields.is_empty() {
            return self
                .parsed_fields()
                .into_iter()
                .filter(FieldSpec::is_string)
                .map(|field| field.name)
                .collect();
        }

        self.searchable_fields.clone()
    }

    /// Explicit searchable names that match no declared field
    #[must_use]
    pub fn unknown_searchable_fields(&self) -> Vec<String> {
        let declared = self.parsed_fields();
        self.searchable_fields
            .iter()
            .filter(|name| !declared.iter().any(|field| &field.name == *name))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> GenerationRequest {
        GenerationRequest::new(ModelName::parse("Post").unwrap()).with_fields(vec![
            "title:string".to_string(),
            "body:text".to_string(),
            "slug".to_string(),
            "user_id:select".to_string(),
        ])
    }

    #[test]
    fn test_model_name_accepts_pattern() {
        for name in ["Post", "UserProfile", "A", "Post2", "Blog_post"] {
            assert!(ModelName::parse(name).is_ok(), "should accept {name}");
        }
    }

    #[test]
    fn test_model_name_rejects_invalid() {
        for name in ["", "post", "2Post", "_Post", "Post-Tag", "Post Tag", " Post", "Pöst"] {
            let err = ModelName::parse(name).unwrap_err();
            assert!(matches!(err, AutoApiError::InvalidModelName(_)), "should reject {name:?}");
        }
    }

    #[test]
    fn test_model_name_normalises_to_studly() {
        assert_eq!(ModelName::parse("Blog_post").unwrap().as_str(), "BlogPost");
        assert_eq!(ModelName::parse("UserProfile").unwrap().as_str(), "UserProfile");
    }

    #[test]
    fn test_derived_names() {
        let request = post();
        assert_eq!(request.route_segment(), "posts");
        assert_eq!(request.controller_name(), "PostApiController");
    }

    #[test]
    fn test_search_disabled_resolves_nothing() {
        assert!(post().resolved_searchable_fields().is_empty());
    }

    #[test]
    fn test_empty_searchable_resolves_string_fields() {
        let request = post().with_search(Vec::new());
        assert_eq!(request.resolved_searchable_fields(), vec!["title", "slug"]);
    }

    #[test]
    fn test_explicit_searchable_kept_verbatim() {
        let request = post().with_search(vec!["body".to_string(), "missing".to_string()]);
        assert_eq!(request.resolved_searchable_fields(), vec!["body", "missing"]);
        assert_eq!(request.unknown_searchable_fields(), vec!["missing"]);
    }

    #[test]
    fn test_defaults() {
        let request = GenerationRequest::new(ModelName::parse("Tag").unwrap());
        assert_eq!(request.version, "v1");
        assert!(request.middleware.is_empty());
        assert!(!request.soft_deletes);
        assert!(!request.search_enabled);
    }
}
