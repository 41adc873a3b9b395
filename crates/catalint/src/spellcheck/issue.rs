//! Spelling issue types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Listing field being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Title,
    Description,
    Condition,
    Keywords,
}

impl FieldType {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Title => "title",
            FieldType::Description => "description",
            FieldType::Condition => "condition report",
            FieldType::Keywords => "keywords",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Title => "title",
            FieldType::Description => "description",
            FieldType::Condition => "condition",
            FieldType::Keywords => "keywords",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(FieldType::Title),
            "description" => Ok(FieldType::Description),
            "condition" => Ok(FieldType::Condition),
            "keywords" => Ok(FieldType::Keywords),
            other => Err(format!(
                "unknown field '{}', expected title, description, condition or keywords",
                other
            )),
        }
    }
}

/// Which check produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSource {
    Dictionary,
    AiSpellcheck,
    BrandFuzzy,
}

impl fmt::Display for IssueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssueSource::Dictionary => "dictionary",
            IssueSource::AiSpellcheck => "ai_spellcheck",
            IssueSource::BrandFuzzy => "brand_fuzzy",
        };
        write!(f, "{}", name)
    }
}

/// Kind of problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Spelling,
    Brand,
    /// Artist field typed in lower case.
    ArtistCase,
    /// Artist field close to, but not exactly, a known artist.
    ArtistSpelling,
}

/// A suggested correction for one span of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellIssue {
    /// Text as written.
    pub original: String,
    /// Suggested replacement.
    pub corrected: String,
    /// Confidence in the suggestion (0.0-1.0).
    pub confidence: f64,
    pub source: IssueSource,
    /// Vocabulary group, e.g. "material", "brand" or "artist".
    pub category: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
}

impl SpellIssue {
    /// Create a spelling issue.
    pub fn spelling(
        original: impl Into<String>,
        corrected: impl Into<String>,
        confidence: f64,
        source: IssueSource,
    ) -> Self {
        Self {
            original: original.into(),
            corrected: corrected.into(),
            confidence,
            source,
            category: "spelling".to_string(),
            issue_type: IssueType::Spelling,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the issue type.
    pub fn with_type(mut self, issue_type: IssueType) -> Self {
        self.issue_type = issue_type;
        self
    }

    /// Case-folded original, the key issues are deduplicated on.
    pub fn key(&self) -> String {
        self.original.trim().to_lowercase()
    }
}
