//! Per-call context supplied by the calling UI layer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Caller-owned context passed into every check.
///
/// The engine only reads it. Dismissing a suggestion, for example, is the
/// caller adding the term with [`SessionContext::ignore`] before the next
/// call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    /// Case-folded terms the user dismissed for this session.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub ignored_terms: HashSet<String>,

    /// Current value of the artist field.
    #[serde(default)]
    pub artist_field_value: String,

    /// Current title, used as cross-field context for non-title fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SessionContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the artist field value.
    pub fn with_artist_field(mut self, value: impl Into<String>) -> Self {
        self.artist_field_value = value.into();
        self
    }

    /// Set the title used as cross-field context.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add an ignored term.
    pub fn with_ignored_term(mut self, term: impl AsRef<str>) -> Self {
        self.ignore(term);
        self
    }

    /// Dismiss a term for the rest of the session.
    pub fn ignore(&mut self, term: impl AsRef<str>) {
        self.ignored_terms.insert(term.as_ref().trim().to_lowercase());
    }

    /// Whether the user dismissed this term.
    pub fn is_ignored(&self, term: &str) -> bool {
        self.ignored_terms.contains(&term.trim().to_lowercase())
    }

    /// Whether `word` already appears in the artist field, either as a
    /// substring of the whole field or as one of its space-separated tokens.
    pub fn is_in_artist_field(&self, word: &str) -> bool {
        let field = self.artist_field_value.trim().to_lowercase();
        let word = word.trim().to_lowercase();
        if field.is_empty() || word.is_empty() {
            return false;
        }
        field.contains(&word) || field.split_whitespace().any(|token| token == word)
    }
}
