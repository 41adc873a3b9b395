//! Mock oracle for testing and offline use.

use std::sync::Mutex;

use crate::detection::PatternExtractor;
use crate::dictionary::Dictionary;
use crate::error::{CatalintError, Result};
use crate::names::match_case;

use super::provider::{
    ArtistVerdict, ArtistVerification, Oracle, OracleConfig, OracleRequest, OracleSpellIssue,
    SpellcheckVerdict,
};

/// A scripted answer for one task.
#[derive(Debug, Clone)]
pub enum MockAnswer<T> {
    /// Return this value.
    Answer(T),
    /// Fail as if the network call failed.
    TransportError,
    /// Fail as if the response could not be parsed.
    Malformed,
}

impl<T: Clone> MockAnswer<T> {
    fn resolve(&self) -> Result<T> {
        match self {
            MockAnswer::Answer(value) => Ok(value.clone()),
            MockAnswer::TransportError => Err(CatalintError::OracleTransport(
                "mock transport failure".to_string(),
            )),
            MockAnswer::Malformed => Err(CatalintError::OracleMalformedResponse(
                "mock malformed response".to_string(),
            )),
        }
    }
}

/// Mock oracle that returns predictable responses.
///
/// Without scripted answers it behaves like a cautious model: it reports the
/// name found by the local pattern cascade, flags known dictionary
/// misspellings, and verifies artists on the built-in known-artist list.
/// Every request is recorded for inspection.
pub struct MockOracle {
    config: OracleConfig,
    detect: Option<MockAnswer<ArtistVerdict>>,
    spellcheck: Option<MockAnswer<SpellcheckVerdict>>,
    verify: Option<MockAnswer<ArtistVerification>>,
    requests: Mutex<Vec<OracleRequest>>,
}

impl MockOracle {
    /// Create a new heuristic mock oracle.
    pub fn new() -> Self {
        Self::with_config(OracleConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(config: OracleConfig) -> Self {
        Self {
            config,
            detect: None,
            spellcheck: None,
            verify: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script the `detect-artist` answer.
    pub fn with_detect(mut self, answer: MockAnswer<ArtistVerdict>) -> Self {
        self.detect = Some(answer);
        self
    }

    /// Script the `spellcheck` answer.
    pub fn with_spellcheck(mut self, answer: MockAnswer<SpellcheckVerdict>) -> Self {
        self.spellcheck = Some(answer);
        self
    }

    /// Script the `verify-artist` answer.
    pub fn with_verify(mut self, answer: MockAnswer<ArtistVerification>) -> Self {
        self.verify = Some(answer);
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<OracleRequest> {
        self.requests
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    fn record(&self, request: &OracleRequest) {
        if let Ok(mut log) = self.requests.lock() {
            log.push(request.clone());
        }
    }

    fn heuristic_detect(request: &OracleRequest) -> ArtistVerdict {
        match PatternExtractor::new().extract(&request.title) {
            Some(candidate) => ArtistVerdict::artist(candidate.display_name(), 0.9)
                .with_suggested_title(candidate.suggested_title())
                .with_reasoning(format!("mock: matched {} pattern", candidate.family.label())),
            None => ArtistVerdict::no_artist()
                .with_reasoning("mock: no name-shaped sequence in title"),
        }
    }

    fn heuristic_spellcheck(request: &OracleRequest) -> SpellcheckVerdict {
        let dictionary = Dictionary::shared();
        let text = request.text.as_deref().unwrap_or("");
        let issues = text
            .split(|c: char| !c.is_alphabetic())
            .filter(|word| !word.is_empty())
            .filter_map(|word| {
                dictionary.correction_for(word).map(|c| OracleSpellIssue {
                    original: word.to_string(),
                    corrected: match_case(word, &c.correct),
                    confidence: 0.9,
                })
            })
            .collect();
        SpellcheckVerdict { issues }
    }

    fn heuristic_verify(request: &OracleRequest) -> ArtistVerification {
        let artist = request.artist_field.as_deref().unwrap_or("").trim();
        let known = Dictionary::shared()
            .known_artists()
            .iter()
            .any(|a| a.to_lowercase() == artist.to_lowercase());
        ArtistVerification {
            is_verified: known,
            biography: known.then(|| format!("{} is a catalogued artist.", artist)),
        }
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl Oracle for MockOracle {
    fn detect_artist(&self, request: &OracleRequest) -> Result<ArtistVerdict> {
        self.record(request);
        match &self.detect {
            Some(answer) => answer.resolve(),
            None => Ok(Self::heuristic_detect(request)),
        }
    }

    fn spellcheck(&self, request: &OracleRequest) -> Result<SpellcheckVerdict> {
        self.record(request);
        match &self.spellcheck {
            Some(answer) => answer.resolve(),
            None => Ok(Self::heuristic_spellcheck(request)),
        }
    }

    fn verify_artist(&self, request: &OracleRequest) -> Result<ArtistVerification> {
        self.record(request);
        match &self.verify {
            Some(answer) => answer.resolve(),
            None => Ok(Self::heuristic_verify(request)),
        }
    }

    fn config(&self) -> &OracleConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spellcheck::FieldType;

    #[test]
    fn test_mock_detects_pattern_names() {
        let oracle = MockOracle::new();
        let request = OracleRequest::detect_artist("LISA LARSON. Skulptur, stengods, Gustavsberg");

        let verdict = oracle.detect_artist(&request).unwrap();

        assert!(verdict.has_artist);
        assert_eq!(verdict.artist_name.as_deref(), Some("LISA LARSON"));
        assert_eq!(oracle.requests().len(), 1);
    }

    #[test]
    fn test_mock_spellcheck_uses_dictionary() {
        let oracle = MockOracle::new();
        let request = OracleRequest::spellcheck("Skål i Porsling", FieldType::Description, "");

        let verdict = oracle.spellcheck(&request).unwrap();

        assert_eq!(verdict.issues.len(), 1);
        assert_eq!(verdict.issues[0].original, "Porsling");
        assert_eq!(verdict.issues[0].corrected, "Porslin");
    }

    #[test]
    fn test_scripted_failures() {
        let oracle = MockOracle::new()
            .with_detect(MockAnswer::TransportError)
            .with_spellcheck(MockAnswer::Malformed);

        let detect = oracle.detect_artist(&OracleRequest::detect_artist("x"));
        let spell = oracle.spellcheck(&OracleRequest::spellcheck("x", FieldType::Title, ""));

        assert!(matches!(detect, Err(CatalintError::OracleTransport(_))));
        assert!(matches!(spell, Err(CatalintError::OracleMalformedResponse(_))));
    }

    #[test]
    fn test_mock_verification() {
        let oracle = MockOracle::new();

        let known = oracle
            .verify_artist(&OracleRequest::verify_artist("stig lindberg", ""))
            .unwrap();
        let unknown = oracle
            .verify_artist(&OracleRequest::verify_artist("Nobody Special", ""))
            .unwrap();

        assert!(known.is_verified);
        assert!(known.biography.is_some());
        assert!(!unknown.is_verified);
    }
}
