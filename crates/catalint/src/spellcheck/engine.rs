//! Spellcheck engine: dictionary, oracle and brand checks merged into one list.

use std::sync::Arc;
use std::thread::{self, ScopedJoinHandle};

use once_cell::sync::Lazy;
use regex::Regex;
use strsim::normalized_levenshtein;
use tracing::{debug, warn};

use crate::dictionary::Dictionary;
use crate::names::{looks_like_person_name, match_case, normalize_whitespace, title_case_words};
use crate::oracle::{Oracle, OracleRequest};
use crate::session::SessionContext;

use super::brand::BrandMatcher;
use super::issue::{FieldType, IssueSource, IssueType, SpellIssue};
use super::merger::ResultMerger;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+").unwrap());

/// Confidence of an artist-field casing fix.
const ARTIST_CASE_CONFIDENCE: f64 = 0.9;

/// A known artist at least this similar to the field is a likely match.
const ARTIST_SPELLING_MIN_SIMILARITY: f64 = 0.85;

/// Ceiling for artist-field spelling fixes.
const ARTIST_SPELLING_MAX_CONFIDENCE: f64 = 0.95;

/// Spellcheck thresholds and switches.
#[derive(Debug, Clone)]
pub struct SpellcheckConfig {
    /// Dictionary tokens shorter than this are skipped.
    pub min_token_len: usize,
    /// Oracle suggestions below this are discarded.
    pub ai_min_confidence: f64,
    /// Brand similarity must be above this.
    pub brand_accept_similarity: f64,
    /// Brand similarity at or above this counts as already correct.
    pub brand_already_correct_similarity: f64,
    /// Issues on likely proper names must reach this confidence.
    pub proper_name_min_confidence: f64,
    /// Run the brand check.
    pub check_brands: bool,
    /// Consult the oracle, when one is configured.
    pub use_oracle: bool,
}

impl Default for SpellcheckConfig {
    fn default() -> Self {
        Self {
            min_token_len: 4,
            ai_min_confidence: 0.8,
            brand_accept_similarity: 0.85,
            brand_already_correct_similarity: 0.9,
            proper_name_min_confidence: 0.95,
            check_brands: true,
            use_oracle: true,
        }
    }
}

impl SpellcheckConfig {
    /// Enable or disable the oracle check.
    pub fn with_oracle_enabled(mut self, enabled: bool) -> Self {
        self.use_oracle = enabled;
        self
    }

    /// Enable or disable the brand check.
    pub fn with_brand_check(mut self, enabled: bool) -> Self {
        self.check_brands = enabled;
        self
    }
}

/// Finds spelling mistakes in catalog text.
pub struct SpellcheckEngine {
    dictionary: Arc<Dictionary>,
    oracle: Option<Arc<dyn Oracle>>,
    config: SpellcheckConfig,
}

impl SpellcheckEngine {
    /// Create an engine without an oracle.
    pub fn new(dictionary: Arc<Dictionary>, config: SpellcheckConfig) -> Self {
        Self {
            dictionary,
            oracle: None,
            config,
        }
    }

    /// Also ask an oracle for suggestions.
    pub fn with_oracle(mut self, oracle: Arc<dyn Oracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &SpellcheckConfig {
        &self.config
    }

    /// Check one field.
    ///
    /// The three sources run concurrently. A source that fails contributes
    /// nothing; the others are unaffected.
    pub fn check(&self, text: &str, field_type: FieldType, session: &SessionContext) -> Vec<SpellIssue> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let (dictionary, oracle, brands) = thread::scope(|scope| {
            let dictionary = scope.spawn(|| self.check_dictionary(text));
            let oracle = scope.spawn(|| self.check_oracle(text, field_type, session));
            let brands = scope.spawn(|| self.check_brands(text));
            (
                join_or_empty(dictionary, "dictionary"),
                join_or_empty(oracle, "oracle"),
                join_or_empty(brands, "brand"),
            )
        });
        debug!(
            dictionary = dictionary.len(),
            oracle = oracle.len(),
            brands = brands.len(),
            "spellcheck sources finished"
        );

        ResultMerger::new(&self.dictionary, self.config.proper_name_min_confidence).merge(
            vec![dictionary, oracle, brands],
            text,
            session,
        )
    }

    /// Known misspellings from the dictionary.
    pub fn check_dictionary(&self, text: &str) -> Vec<SpellIssue> {
        WORD.find_iter(text)
            .map(|m| m.as_str())
            .filter(|token| token.chars().count() >= self.config.min_token_len)
            .filter(|token| !self.dictionary.is_stop_word(token) && !self.dictionary.is_whitelisted(token))
            .filter_map(|token| {
                self.dictionary.correction_for(token).map(|correction| {
                    SpellIssue::spelling(
                        token,
                        match_case(token, &correction.correct),
                        correction.confidence,
                        IssueSource::Dictionary,
                    )
                    .with_category(correction.category.clone())
                })
            })
            .collect()
    }

    /// Misspelled brand names.
    pub fn check_brands(&self, text: &str) -> Vec<SpellIssue> {
        if !self.config.check_brands {
            return Vec::new();
        }
        BrandMatcher::new(
            &self.dictionary,
            self.config.brand_accept_similarity,
            self.config.brand_already_correct_similarity,
        )
        .with_min_token_len(self.config.min_token_len)
        .check(text)
    }

    /// Oracle suggestions. Any oracle failure yields no issues.
    pub fn check_oracle(&self, text: &str, field_type: FieldType, session: &SessionContext) -> Vec<SpellIssue> {
        let oracle = match &self.oracle {
            Some(oracle) if self.config.use_oracle => oracle,
            _ => return Vec::new(),
        };

        let context_title = match field_type {
            FieldType::Title => "",
            _ => session.title.as_deref().unwrap_or(""),
        };
        let request = OracleRequest::spellcheck(text, field_type, context_title)
            .with_whitelist(self.dictionary.whitelist_terms());

        let verdict = match oracle.spellcheck(&request) {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(oracle = oracle.name(), error = %e, "oracle spellcheck failed");
                return Vec::new();
            }
        };

        verdict
            .issues
            .into_iter()
            .filter(|issue| issue.confidence >= self.config.ai_min_confidence)
            .filter(|issue| {
                let original = issue.original.trim();
                !original.is_empty()
                    && original != issue.corrected.trim()
                    && !self.dictionary.is_whitelisted(original)
            })
            .map(|issue| {
                SpellIssue::spelling(
                    issue.original.trim(),
                    issue.corrected.trim(),
                    issue.confidence.clamp(0.0, 1.0),
                    IssueSource::AiSpellcheck,
                )
            })
            .collect()
    }

    /// Check the artist field itself.
    ///
    /// A near miss of a known artist is reported as `artist_spelling`; a valid
    /// name typed in lower case as `artist_case`. Only the session's ignored
    /// terms are applied.
    pub fn check_artist_field(&self, value: &str, session: &SessionContext) -> Vec<SpellIssue> {
        let value = normalize_whitespace(value);
        if value.is_empty() || session.is_ignored(&value) {
            return Vec::new();
        }
        let folded = value.to_lowercase();

        let closest = self
            .dictionary
            .known_artists()
            .iter()
            .map(|artist| (artist, normalized_levenshtein(&folded, &artist.to_lowercase())))
            .max_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((artist, similarity)) = closest {
            if (ARTIST_SPELLING_MIN_SIMILARITY..1.0).contains(&similarity) {
                return vec![
                    SpellIssue::spelling(
                        value.clone(),
                        artist.clone(),
                        similarity.min(ARTIST_SPELLING_MAX_CONFIDENCE),
                        IssueSource::Dictionary,
                    )
                    .with_category("artist")
                    .with_type(IssueType::ArtistSpelling),
                ];
            }
        }

        let typed_lowercase = value.chars().any(char::is_alphabetic) && !value.chars().any(char::is_uppercase);
        if typed_lowercase && looks_like_person_name(&value) {
            return vec![
                SpellIssue::spelling(
                    value.clone(),
                    title_case_words(&value),
                    ARTIST_CASE_CONFIDENCE,
                    IssueSource::Dictionary,
                )
                .with_category("artist")
                .with_type(IssueType::ArtistCase),
            ];
        }

        Vec::new()
    }
}

fn join_or_empty(handle: ScopedJoinHandle<'_, Vec<SpellIssue>>, check: &str) -> Vec<SpellIssue> {
    handle.join().unwrap_or_else(|_| {
        warn!(check, "spellcheck source panicked");
        Vec::new()
    })
}
