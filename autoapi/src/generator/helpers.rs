//! Naming helpers for code generation
//!
//! Derives every convention-based name (table, route segment, controller
//! class) from the model name so that paths and rendered text agree.

/// Naming helpers shared by the renderer and path resolution
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Convert string to `snake_case`
    ///
    /// An underscore goes before every upper-case letter that is not the
    /// first character, then everything is lower-cased. Digits never start
    /// a new word (`Post2` becomes `post2`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use autoapi::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_snake_case("UserProfile"), "user_profile");
    /// assert_eq!(TemplateHelpers::to_snake_case("Post2"), "post2");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        let mut snake = String::with_capacity(input.len() + 4);
        for (index, c) in input.chars().enumerate() {
            if index > 0 && c.is_uppercase() {
                snake.push('_');
            }
            snake.extend(c.to_lowercase());
        }
        snake
    }

    /// Convert string to `StudlyCase`
    ///
    /// Underscores, hyphens and whitespace separate words; the first letter
    /// of each word is upper-cased and the rest is left untouched, so
    /// acronyms survive (`HTTPClient` stays `HTTPClient`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use autoapi::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_studly_case("User_profile"), "UserProfile");
    /// assert_eq!(TemplateHelpers::to_studly_case("HTTPClient"), "HTTPClient");
    /// ```
    #[must_use]
    pub fn to_studly_case(input: &str) -> String {
        input
            .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect()
    }

    /// Pluralize a word, or the last word of a `snake_case` name
    ///
    /// # Examples
    ///
    /// ```
    /// # use autoapi::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::pluralize("post"), "posts");
    /// assert_eq!(TemplateHelpers::pluralize("category"), "categories");
    /// assert_eq!(TemplateHelpers::pluralize("sales_person"), "sales_people");
    /// ```
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        match input.rsplit_once('_') {
            Some((head, last)) if !last.is_empty() => {
                format!("{head}_{}", pluralizer::pluralize(last, 2, false))
            }
            _ => pluralizer::pluralize(input, 2, false),
        }
    }

    /// Route segment and table name for a model (`snake_case` plural)
    ///
    /// # Examples
    ///
    /// ```
    /// # use autoapi::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_route_segment("Post"), "posts");
    /// assert_eq!(TemplateHelpers::to_route_segment("UserProfile"), "user_profiles");
    /// assert_eq!(TemplateHelpers::to_route_segment("Category"), "categories");
    /// ```
    #[must_use]
    pub fn to_route_segment(model: &str) -> String {
        Self::pluralize(&Self::to_snake_case(model))
    }

    /// Controller class name for a model
    ///
    /// ```
    /// # use autoapi::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_controller_name("Post"), "PostApiController");
    /// ```
    #[must_use]
    pub fn to_controller_name(model: &str) -> String {
        format!("{model}ApiController")
    }

    /// Single-quoted PHP string literal
    #[must_use]
    pub fn php_string(value: &str) -> String {
        format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
    }

    /// PHP array literal of strings, `[]` when empty
    ///
    /// ```
    /// # use autoapi::generator::TemplateHelpers;
    /// let middleware = vec!["auth:api".to_string(), "throttle".to_string()];
    /// assert_eq!(TemplateHelpers::php_string_array(&middleware), "['auth:api', 'throttle']");
    /// assert_eq!(TemplateHelpers::php_string_array(&[]), "[]");
    /// ```
    #[must_use]
    pub fn php_string_array(values: &[String]) -> String {
        let items: Vec<String> = values.iter().map(|v| Self::php_string(v)).collect();
        format!("[{}]", items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(TemplateHelpers::to_snake_case("UserProfile"), "user_profile");
        assert_eq!(TemplateHelpers::to_snake_case("Post"), "post");
        assert_eq!(TemplateHelpers::to_snake_case("simple"), "simple");
    }

    #[test]
    fn test_snake_case_keeps_digits_in_word() {
        assert_eq!(TemplateHelpers::to_snake_case("Post2"), "post2");
        assert_eq!(TemplateHelpers::to_snake_case("A1b2"), "a1b2");
        assert_eq!(TemplateHelpers::to_snake_case("Item2Tag"), "item2_tag");
    }

    #[test]
    fn test_studly_case() {
        assert_eq!(TemplateHelpers::to_studly_case("Post"), "Post");
        assert_eq!(TemplateHelpers::to_studly_case("User_profile"), "UserProfile");
        assert_eq!(TemplateHelpers::to_studly_case("Blog_post_tag"), "BlogPostTag");
        assert_eq!(TemplateHelpers::to_studly_case("Post_"), "Post");
        assert_eq!(TemplateHelpers::to_studly_case("HTTPClient"), "HTTPClient");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(TemplateHelpers::pluralize("post"), "posts");
        assert_eq!(TemplateHelpers::pluralize("category"), "categories");
        assert_eq!(TemplateHelpers::pluralize("comment"), "comments");
        assert_eq!(TemplateHelpers::pluralize("user"), "users");
    }

    #[test]
    fn test_pluralize_irregular() {
        assert_eq!(TemplateHelpers::pluralize("person"), "people");
        assert_eq!(TemplateHelpers::pluralize("mouse"), "mice");
        assert_eq!(TemplateHelpers::pluralize("sales_person"), "sales_people");
    }

    #[test]
    fn test_route_segment() {
        assert_eq!(TemplateHelpers::to_route_segment("Post"), "posts");
        assert_eq!(TemplateHelpers::to_route_segment("UserProfile"), "user_profiles");
        assert_eq!(TemplateHelpers::to_route_segment("Category"), "categories");
        assert_eq!(TemplateHelpers::to_route_segment("Person"), "people");
        assert_eq!(TemplateHelpers::to_route_segment("SalesPerson"), "sales_people");
        assert_eq!(TemplateHelpers::to_route_segment("Mouse"), "mice");
        assert_eq!(TemplateHelpers::to_route_segment("Post2"), "post2s");
        assert_eq!(TemplateHelpers::to_route_segment("A1b2"), "a1b2s");
    }

    #[test]
    fn test_controller_name() {
        assert_eq!(TemplateHelpers::to_controller_name("Post"), "PostApiController");
        assert_eq!(
            TemplateHelpers::to_controller_name("UserProfile"),
            "UserProfileApiController"
        );
    }

    #[test]
    fn test_php_literals() {
        assert_eq!(TemplateHelpers::php_string("auth:api"), "'auth:api'");
        assert_eq!(TemplateHelpers::php_string("it's"), "'it\\'s'");
        assert_eq!(
            TemplateHelpers::php_string_array(&["auth:api".to_string()]),
            "['auth:api']"
        );
        assert_eq!(TemplateHelpers::php_string_array(&[]), "[]");
    }
}
