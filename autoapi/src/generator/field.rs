//! Field declarations and comma-separated answer parsing
//!
//! A field declaration is the raw `name:type` string the operator typed.
//! Parsing splits once on the first `:`; the type defaults to `string`.
//! Type tags are not validated: whatever the operator wrote is carried
//! into the generated migration and controller as-is.
//!
//! ```text
//! title:string   → { name: "title",   type: "string" }
//! user_id:select → { name: "user_id", type: "select" }
//! flag           → { name: "flag",    type: "string" }
//! meta:json:x    → { name: "meta",    type: "json:x" }
//! ```

use serde::Serialize;
use std::fmt;

/// Type assigned to a declaration that names no type
pub const DEFAULT_FIELD_TYPE: &str = "string";

/// A parsed field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Column / attribute name
    pub name: String,
    /// Type tag, verbatim
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldSpec {
    /// Parse one raw declaration
    ///
    /// ```
    /// # use autoapi::generator::FieldSpec;
    /// let field = FieldSpec::parse("user_id:select");
    /// assert_eq!(field.name, "user_id");
    /// assert_eq!(field.field_type, "select");
    ///
    /// assert_eq!(FieldSpec::parse("flag").field_type, "string");
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let (name, field_type) = raw.split_once(':').unwrap_or((raw, DEFAULT_FIELD_TYPE));

        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
        }
    }

    /// Whether the declared type is exactly `string`
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.field_type == DEFAULT_FIELD_TYPE
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.field_type)
    }
}

/// Parse an ordered list of raw declarations
///
/// Order is preserved and duplicates are kept.
#[must_use]
pub fn parse_fields<S: AsRef<str>>(raw: &[S]) -> Vec<FieldSpec> {
    raw.iter().map(|field| FieldSpec::parse(field.as_ref())).collect()
}

/// Split a comma-separated answer into trimmed, non-empty items
///
/// ```
/// # use autoapi::generator::parse_list;
/// assert_eq!(parse_list("auth:api, throttle"), vec!["auth:api", "throttle"]);
/// assert!(parse_list(" , ").is_empty());
/// ```
#[must_use]
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields_defaults_type() {
        let fields = parse_fields(&["title:string", "user_id:select", "flag"]);
        assert_eq!(
            fields,
            vec![
                FieldSpec {
                    name: "title".to_string(),
                    field_type: "string".to_string()
                },
                FieldSpec {
                    name: "user_id".to_string(),
                    field_type: "select".to_string()
                },
                FieldSpec {
                    name: "flag".to_string(),
                    field_type: "string".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let field = FieldSpec::parse("meta:json:nullable");
        assert_eq!(field.name, "meta");
        assert_eq!(field.field_type, "json:nullable");
    }

    #[test]
    fn test_parse_empty_type_is_kept() {
        let field = FieldSpec::parse("title:");
        assert_eq!(field.name, "title");
        assert_eq!(field.field_type, "");
        assert!(!field.is_string());
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        let fields = parse_fields(&["b:integer", "a", "b:integer"]);
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_parse_list_trims_and_filters() {
        assert_eq!(parse_list("auth:api, throttle"), vec!["auth:api", "throttle"]);
        assert_eq!(parse_list("  a ,, b ,"), vec!["a", "b"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_display_round_trips_declaration() {
        assert_eq!(FieldSpec::parse("flag").to_string(), "flag:string");
    }
}
