//! Oracle trait and wire types.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spellcheck::FieldType;

/// Which question the oracle is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OracleTask {
    /// Is there an artist name in the title?
    DetectArtist,
    /// Which words in the text are misspelled?
    Spellcheck,
    /// Is this a real, documented artist?
    VerifyArtist,
}

/// A request to the oracle. Optional fields depend on the task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleRequest {
    /// The question being asked.
    pub task: OracleTask,

    /// Listing title.
    pub title: String,

    /// Leading object type of the title, e.g. "TAVLA".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    /// Current artist field value, or the artist to verify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_field: Option<String>,

    /// Listing description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Text to spellcheck.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Field the spellchecked text comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,

    /// Terms that must never be reported as misspelled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub whitelist: Vec<String>,
}

impl OracleRequest {
    fn new(task: OracleTask, title: impl Into<String>) -> Self {
        Self {
            task,
            title: title.into(),
            object_type: None,
            artist_field: None,
            description: None,
            text: None,
            field_type: None,
            whitelist: Vec::new(),
        }
    }

    /// Ask whether the title contains a misplaced artist name.
    pub fn detect_artist(title: impl Into<String>) -> Self {
        Self::new(OracleTask::DetectArtist, title)
    }

    /// Ask for misspellings in `text`.
    ///
    /// `title` is cross-field context and may be empty for title checks.
    pub fn spellcheck(text: impl Into<String>, field_type: FieldType, title: impl Into<String>) -> Self {
        let mut request = Self::new(OracleTask::Spellcheck, title);
        request.text = Some(text.into());
        request.field_type = Some(field_type);
        request
    }

    /// Ask whether `artist` is a real, documented artist.
    pub fn verify_artist(artist: impl Into<String>, title: impl Into<String>) -> Self {
        let mut request = Self::new(OracleTask::VerifyArtist, title);
        request.artist_field = Some(artist.into());
        request
    }

    /// Set the object type.
    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    /// Set the artist field value.
    pub fn with_artist_field(mut self, artist: impl Into<String>) -> Self {
        self.artist_field = Some(artist.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the whitelist.
    pub fn with_whitelist(mut self, whitelist: Vec<String>) -> Self {
        self.whitelist = whitelist;
        self
    }
}

/// Answer to a `detect-artist` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistVerdict {
    /// Whether the title contains an artist name.
    pub has_artist: bool,

    /// The detected name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,

    /// Self-reported confidence (0.0-1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Free-text explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,

    /// Title with the name removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_title: Option<String>,
}

impl ArtistVerdict {
    /// A negative answer.
    pub fn no_artist() -> Self {
        Self {
            has_artist: false,
            artist_name: None,
            confidence: None,
            reasoning: None,
            suggested_title: None,
        }
    }

    /// A positive answer naming `artist` with the given confidence.
    pub fn artist(artist: impl Into<String>, confidence: f64) -> Self {
        Self {
            has_artist: true,
            artist_name: Some(artist.into()),
            confidence: Some(confidence),
            reasoning: None,
            suggested_title: None,
        }
    }

    /// Attach reasoning.
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }

    /// Attach a suggested title.
    pub fn with_suggested_title(mut self, title: impl Into<String>) -> Self {
        self.suggested_title = Some(title.into());
        self
    }
}

/// One misspelling reported by the oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleSpellIssue {
    pub original: String,
    pub corrected: String,
    pub confidence: f64,
}

/// Answer to a `spellcheck` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellcheckVerdict {
    #[serde(default)]
    pub issues: Vec<OracleSpellIssue>,
}

/// Answer to a `verify-artist` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistVerification {
    /// Whether the oracle recognises the artist.
    pub is_verified: bool,

    /// Short biography when verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
}

/// Configuration for oracle providers.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// Model to use (e.g., "claude-sonnet-4-20250514").
    pub model: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1024,
            temperature: 0.1,
        }
    }
}

/// The external AI collaborator.
///
/// Implementations must be thread-safe (Send + Sync): the spellcheck engine
/// calls the oracle from a worker thread while the local checks run.
///
/// Any transport or parse failure must be returned as
/// [`CatalintError::OracleTransport`](crate::CatalintError::OracleTransport)
/// or [`CatalintError::OracleMalformedResponse`](crate::CatalintError::OracleMalformedResponse).
/// A well-formed negative answer is returned as `Ok`.
pub trait Oracle: Send + Sync {
    /// Answer a `detect-artist` request.
    fn detect_artist(&self, request: &OracleRequest) -> Result<ArtistVerdict>;

    /// Answer a `spellcheck` request.
    fn spellcheck(&self, request: &OracleRequest) -> Result<SpellcheckVerdict>;

    /// Answer a `verify-artist` request.
    fn verify_artist(&self, request: &OracleRequest) -> Result<ArtistVerification>;

    /// Get the configuration for this provider.
    fn config(&self) -> &OracleConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
