//! Misplaced-artist detection: guards, oracle arbitration and rule fallback.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::names::{capitalize_first, looks_like_person_name, normalize_whitespace, title_case_words};
use crate::oracle::{ArtistVerdict, Oracle, OracleRequest};

use super::patterns::{PatternExtractor, TitleCandidate};
use super::result::{
    DetectionOutcome, DetectionResult, DetectionSource, FOUND_IN_TITLE, FOUND_IN_TITLE_REPEAT,
};
use super::scoring::ConfidenceScorer;

/// Leading ALL-CAPS object type, e.g. "TAVLA" in "TAVLA, olja på duk".
static LEADING_OBJECT_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\p{Lu}[\p{Lu}\-]+(?:\s+\p{Lu}[\p{Lu}\-]+)*)\s*,").unwrap()
});

static REPEATED_COMMAS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,(?:\s*,)+\s*").unwrap());

static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,.])").unwrap());

/// Thresholds and switches for artist detection.
#[derive(Debug, Clone)]
pub struct DetectionConfig {
    /// An oracle answer must be strictly above this to be accepted as-is.
    pub ai_confidence_threshold: f64,
    /// Added to a low-confidence answer corroborated by the informal rule.
    pub boost_amount: f64,
    /// Upper bound for boosted confidence.
    pub boost_cap: f64,
    /// Confidence of an informal-rule detection on the fallback path.
    pub informal_rule_confidence: f64,
    /// Titles shorter than this (in characters) are not analysed.
    pub min_title_len: usize,
    /// An artist field at least this long counts as filled.
    pub min_artist_field_len: usize,
    /// Ask the oracle to verify accepted detections.
    pub verify_artists: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            ai_confidence_threshold: 0.6,
            boost_amount: 0.2,
            boost_cap: 0.85,
            informal_rule_confidence: 0.8,
            min_title_len: 10,
            min_artist_field_len: 3,
            verify_artists: false,
        }
    }
}

impl DetectionConfig {
    /// Set the oracle acceptance threshold.
    pub fn with_ai_confidence_threshold(mut self, threshold: f64) -> Self {
        self.ai_confidence_threshold = threshold;
        self
    }

    /// Enable or disable artist verification.
    pub fn with_verify_artists(mut self, verify: bool) -> Self {
        self.verify_artists = verify;
        self
    }
}

/// One listing to analyse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRequest {
    pub title: String,
    /// Current artist field value.
    #[serde(default)]
    pub artist_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Search again even though the artist field is filled.
    #[serde(default)]
    pub force_redetection: bool,
}

impl DetectionRequest {
    /// Create a request for a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the current artist field value.
    pub fn with_artist_field(mut self, artist: impl Into<String>) -> Self {
        self.artist_field = artist.into();
        self
    }

    /// Set the object type.
    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Force a repeat search.
    pub fn forced(mut self) -> Self {
        self.force_redetection = true;
        self
    }
}

/// The verdict of weighing an oracle answer.
///
/// Only `NeedsFallback` lets the rules run. A negative or low-confidence
/// answer is `Rejected` and final.
#[derive(Debug, Clone, PartialEq)]
pub enum Arbitration {
    /// Use this detection.
    Accepted(DetectionResult),
    /// The oracle said no, or yes with too little confidence.
    Rejected(String),
    /// The oracle failed; consult the rules.
    NeedsFallback(String),
}

/// Decides whether a title contains an artist name that belongs elsewhere.
pub struct DetectionOrchestrator {
    config: DetectionConfig,
    extractor: PatternExtractor,
    scorer: ConfidenceScorer,
    oracle: Option<Arc<dyn Oracle>>,
}

impl DetectionOrchestrator {
    /// Create an orchestrator that runs on local rules only.
    pub fn new(config: DetectionConfig) -> Self {
        Self {
            config,
            extractor: PatternExtractor::new(),
            scorer: ConfidenceScorer::new(),
            oracle: None,
        }
    }

    /// Consult an oracle before the rules.
    pub fn with_oracle(mut self, oracle: Arc<dyn Oracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Analyse one listing.
    pub fn detect(&self, request: &DetectionRequest) -> DetectionOutcome {
        if let Some(reason) = self.guard(request) {
            debug!(title = %request.title, reason, "detection skipped");
            return DetectionOutcome::none(reason);
        }

        let title = request.title.trim();
        let informal = self.extractor.informal_candidate(title);

        let mut outcome = match &self.oracle {
            Some(oracle) => {
                let verdict = oracle.detect_artist(&self.oracle_request(request, informal.as_ref()));
                match self.arbitrate(verdict, title, informal.as_ref()) {
                    Arbitration::Accepted(result) => {
                        debug!(artist = %result.detected_artist, source = %result.source, "oracle detection accepted");
                        DetectionOutcome::found(self.enrich(oracle.as_ref(), result, title))
                    }
                    Arbitration::Rejected(reason) => {
                        debug!(%reason, "oracle detection rejected");
                        DetectionOutcome::none(reason)
                    }
                    Arbitration::NeedsFallback(reason) => {
                        warn!(oracle = oracle.name(), %reason, "oracle failed, falling back to rules");
                        let mut fallback = self.rule_fallback(title, informal);
                        if fallback.diagnostic.is_none() {
                            fallback.diagnostic = Some(format!("oracle failed: {}", reason));
                        }
                        fallback
                    }
                }
            }
            None => self.rule_fallback(title, informal),
        };

        if let Some(result) = outcome.result.as_mut() {
            result.found_in = if request.force_redetection {
                FOUND_IN_TITLE_REPEAT.to_string()
            } else {
                FOUND_IN_TITLE.to_string()
            };
        }
        outcome
    }

    /// Reason to skip detection altogether, if any.
    fn guard(&self, request: &DetectionRequest) -> Option<&'static str> {
        let artist_len = request.artist_field.trim().chars().count();
        if artist_len >= self.config.min_artist_field_len && !request.force_redetection {
            return Some("artist field already filled");
        }
        if request.title.trim().chars().count() < self.config.min_title_len {
            return Some("title too short");
        }
        None
    }

    fn oracle_request(
        &self,
        request: &DetectionRequest,
        informal: Option<&TitleCandidate>,
    ) -> OracleRequest {
        let title = request.title.trim();
        let mut oracle_request = OracleRequest::detect_artist(title);

        let object_type = request
            .object_type
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.derive_object_type(title, informal));
        if let Some(object_type) = object_type {
            oracle_request = oracle_request.with_object_type(object_type);
        }

        // A forced re-detection must not anchor the oracle on the stale value.
        let artist_field = request.artist_field.trim();
        if !request.force_redetection && !artist_field.is_empty() {
            oracle_request = oracle_request.with_artist_field(artist_field);
        }
        if let Some(description) = request.description.as_deref().filter(|d| !d.trim().is_empty()) {
            oracle_request = oracle_request.with_description(description);
        }
        oracle_request
    }

    fn derive_object_type(&self, title: &str, informal: Option<&TitleCandidate>) -> Option<String> {
        if let Some(caps) = LEADING_OBJECT_TYPE.captures(title) {
            return Some(caps[1].to_string());
        }
        informal
            .cloned()
            .or_else(|| self.extractor.extract(title))
            .map(|c| c.object_type)
            .filter(|t| !t.is_empty())
    }

    /// Weigh an oracle answer against the informal pre-check.
    pub fn arbitrate(
        &self,
        verdict: Result<ArtistVerdict>,
        title: &str,
        informal: Option<&TitleCandidate>,
    ) -> Arbitration {
        let verdict = match verdict {
            Ok(verdict) => verdict,
            Err(e) => return Arbitration::NeedsFallback(e.to_string()),
        };

        if !verdict.has_artist {
            return Arbitration::Rejected("oracle found no artist".to_string());
        }

        let name = normalize_whitespace(verdict.artist_name.as_deref().unwrap_or(""));
        if !looks_like_person_name(&name) {
            return Arbitration::Rejected(format!("oracle answer '{}' is not a person name", name));
        }

        let confidence = verdict.confidence.unwrap_or(0.0).clamp(0.0, 1.0);
        let (confidence, source) = if confidence > self.config.ai_confidence_threshold {
            (confidence, DetectionSource::Ai)
        } else {
            match informal {
                Some(candidate)
                    if name
                        .to_lowercase()
                        .contains(&candidate.candidate_name.to_lowercase()) =>
                {
                    let boosted = (confidence + self.config.boost_amount).min(self.config.boost_cap);
                    (boosted, DetectionSource::AiBoosted)
                }
                _ => {
                    return Arbitration::Rejected(format!(
                        "oracle confidence {:.2} not above {:.2}",
                        confidence, self.config.ai_confidence_threshold
                    ));
                }
            }
        };

        let suggested_title = verdict
            .suggested_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.title_without(title, &name));

        let detected_artist = if name.chars().any(char::is_uppercase) {
            name
        } else {
            title_case_words(&name)
        };

        Arbitration::Accepted(DetectionResult {
            detected_artist,
            suggested_title,
            confidence,
            source,
            reasoning: verdict.reasoning,
            found_in: FOUND_IN_TITLE.to_string(),
            verification: None,
        })
    }

    fn rule_fallback(&self, title: &str, informal: Option<TitleCandidate>) -> DetectionOutcome {
        if let Some(candidate) = informal {
            debug!(name = %candidate.candidate_name, "informal leading name accepted by rules");
            return DetectionOutcome::found(DetectionResult {
                detected_artist: candidate.display_name(),
                suggested_title: candidate.suggested_title(),
                confidence: self.config.informal_rule_confidence,
                source: DetectionSource::RulesInformal,
                reasoning: Some("Name typed at the start of an informal title".to_string()),
                found_in: FOUND_IN_TITLE.to_string(),
                verification: None,
            });
        }

        match self.extractor.extract(title) {
            Some(candidate) => {
                let confidence = self.scorer.score(&candidate.candidate_name, &candidate.object_type);
                debug!(
                    name = %candidate.candidate_name,
                    pattern = candidate.pattern_id,
                    confidence,
                    "rule cascade matched"
                );
                DetectionOutcome::found(DetectionResult {
                    detected_artist: candidate.display_name(),
                    suggested_title: candidate.suggested_title(),
                    confidence,
                    source: DetectionSource::Rules,
                    reasoning: Some(format!("Matched {} pattern", candidate.family.label())),
                    found_in: FOUND_IN_TITLE.to_string(),
                    verification: None,
                })
            }
            None => DetectionOutcome::none("no name-shaped sequence in title"),
        }
    }

    /// Title with `name` removed, preferring the cascade's reconstruction.
    fn title_without(&self, title: &str, name: &str) -> String {
        if let Some(candidate) = self
            .extractor
            .candidates(title)
            .into_iter()
            .find(|c| c.candidate_name.to_lowercase() == name.to_lowercase())
        {
            return candidate.suggested_title();
        }

        let stripped = match Regex::new(&format!("(?i){}", regex::escape(name))) {
            Ok(re) => re.replace(title, "").into_owned(),
            Err(_) => return title.to_string(),
        };
        let tidied = REPEATED_COMMAS.replace_all(&stripped, ", ");
        let tidied = SPACE_BEFORE_PUNCT.replace_all(&tidied, "$1");
        let tidied = tidied.trim_matches(|c: char| c == ',' || c == '.' || c.is_whitespace());
        capitalize_first(&normalize_whitespace(tidied))
    }

    fn enrich(&self, oracle: &dyn Oracle, mut result: DetectionResult, title: &str) -> DetectionResult {
        if !self.config.verify_artists || !result.source.is_ai() {
            return result;
        }
        match oracle.verify_artist(&OracleRequest::verify_artist(&result.detected_artist, title)) {
            Ok(verification) if verification.is_verified => {
                result.verification = Some(verification);
            }
            Ok(_) => debug!(artist = %result.detected_artist, "artist not verified"),
            Err(e) => warn!(artist = %result.detected_artist, error = %e, "artist verification failed"),
        }
        result
    }
}
