//! Main Catalint struct and public API.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::detection::{DetectionConfig, DetectionOrchestrator, DetectionOutcome, DetectionRequest};
use crate::dictionary::Dictionary;
use crate::oracle::Oracle;
use crate::session::SessionContext;
use crate::spellcheck::{FieldType, SpellIssue, SpellcheckConfig, SpellcheckEngine};

/// Configuration for Catalint.
#[derive(Debug, Clone, Default)]
pub struct CatalintConfig {
    /// Artist detection thresholds.
    pub detection: DetectionConfig,
    /// Spellcheck thresholds.
    pub spellcheck: SpellcheckConfig,
}

/// One catalog listing, as read from a batch file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

/// Findings for one listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Misplaced-artist detection on the title.
    pub detection: DetectionOutcome,
    /// Spelling issues per checked field.
    pub spelling: IndexMap<FieldType, Vec<SpellIssue>>,
    /// Issues with the artist field itself.
    pub artist_issues: Vec<SpellIssue>,
}

impl ListingReport {
    /// Total number of suggestions in the report.
    pub fn suggestion_count(&self) -> usize {
        let detections = usize::from(self.detection.is_found());
        detections + self.artist_issues.len() + self.spelling.values().map(Vec::len).sum::<usize>()
    }
}

/// The main Catalint engine.
///
/// Cheap to construct. The dictionary is shared, and the oracle, when set,
/// is used by both artist detection and spellchecking.
pub struct Catalint {
    config: CatalintConfig,
    dictionary: Arc<Dictionary>,
    oracle: Option<Arc<dyn Oracle>>,
}

impl Catalint {
    /// Create a new instance with the built-in dictionary and no oracle.
    pub fn new() -> Self {
        Self::with_config(CatalintConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: CatalintConfig) -> Self {
        Self {
            config,
            dictionary: Dictionary::shared(),
            oracle: None,
        }
    }

    /// Add an oracle for detection and spellchecking.
    pub fn with_oracle(mut self, oracle: impl Oracle + 'static) -> Self {
        self.oracle = Some(Arc::new(oracle));
        self
    }

    /// Add an already shared oracle.
    pub fn with_shared_oracle(mut self, oracle: Arc<dyn Oracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Replace the dictionary.
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Arc::new(dictionary);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &CatalintConfig {
        &self.config
    }

    /// Get the dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Name of the configured oracle, if any.
    pub fn oracle_name(&self) -> Option<&str> {
        self.oracle.as_deref().map(|o| o.name())
    }

    fn orchestrator(&self) -> DetectionOrchestrator {
        let orchestrator = DetectionOrchestrator::new(self.config.detection.clone());
        match &self.oracle {
            Some(oracle) => orchestrator.with_oracle(Arc::clone(oracle)),
            None => orchestrator,
        }
    }

    fn engine(&self) -> SpellcheckEngine {
        let engine = SpellcheckEngine::new(Arc::clone(&self.dictionary), self.config.spellcheck.clone());
        match &self.oracle {
            Some(oracle) => engine.with_oracle(Arc::clone(oracle)),
            None => engine,
        }
    }

    /// Look for an artist name typed into the title.
    pub fn detect_artist(&self, request: &DetectionRequest) -> DetectionOutcome {
        self.orchestrator().detect(request)
    }

    /// Spellcheck one field.
    pub fn spellcheck(&self, text: &str, field_type: FieldType, session: &SessionContext) -> Vec<SpellIssue> {
        self.engine().check(text, field_type, session)
    }

    /// Check the artist field value itself.
    pub fn check_artist_field(&self, value: &str, session: &SessionContext) -> Vec<SpellIssue> {
        self.engine().check_artist_field(value, session)
    }

    /// Run every check on a listing.
    pub fn check_listing(&self, listing: &Listing) -> ListingReport {
        let artist = listing.artist.as_deref().unwrap_or("").trim();
        let session = SessionContext::new()
            .with_artist_field(artist)
            .with_title(listing.title.as_str());

        let mut request = DetectionRequest::new(listing.title.as_str()).with_artist_field(artist);
        if let Some(description) = &listing.description {
            request = request.with_description(description.as_str());
        }
        let detection = self.detect_artist(&request);

        let engine = self.engine();
        let fields = [
            (FieldType::Title, Some(listing.title.as_str())),
            (FieldType::Description, listing.description.as_deref()),
            (FieldType::Condition, listing.condition.as_deref()),
        ];
        let spelling = fields
            .into_iter()
            .filter_map(|(field, text)| text.filter(|t| !t.trim().is_empty()).map(|t| (field, t)))
            .map(|(field, text)| (field, engine.check(text, field, &session)))
            .collect();

        ListingReport {
            id: listing.id.clone(),
            detection,
            spelling,
            artist_issues: engine.check_artist_field(artist, &session),
        }
    }
}

impl Default for Catalint {
    fn default() -> Self {
        Self::new()
    }
}
