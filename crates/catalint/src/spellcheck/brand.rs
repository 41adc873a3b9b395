//! Brand and manufacturer misspellings.
//!
//! Brands are compared on token windows as long as the brand name, so
//! `"Royal Kopenhagen"` is checked as one span. A window that equals a
//! listed variant is always reported; otherwise the normalized Levenshtein
//! similarity to the canonical name must be above the accept threshold and
//! below the already-correct threshold.

use once_cell::sync::Lazy;
use regex::Regex;
use strsim::normalized_levenshtein;

use crate::dictionary::{brand_key, BrandEntry, Dictionary};

use super::issue::{IssueSource, IssueType, SpellIssue};

static LETTER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+").unwrap());

/// Byte span of one word token.
#[derive(Debug, Clone, Copy)]
struct Token {
    start: usize,
    end: usize,
}

/// Fuzzy brand matcher over a dictionary's brand table.
pub struct BrandMatcher<'a> {
    dictionary: &'a Dictionary,
    accept_similarity: f64,
    already_correct_similarity: f64,
    min_token_len: usize,
}

impl<'a> BrandMatcher<'a> {
    /// Create a matcher with the given similarity bounds.
    pub fn new(dictionary: &'a Dictionary, accept_similarity: f64, already_correct_similarity: f64) -> Self {
        Self {
            dictionary,
            accept_similarity,
            already_correct_similarity,
            min_token_len: 4,
        }
    }

    /// Ignore spans shorter than `len` characters.
    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Find misspelled brand names in `text`.
    pub fn check(&self, text: &str) -> Vec<SpellIssue> {
        let tokens: Vec<Token> = LETTER_RUN
            .find_iter(text)
            .map(|m| Token {
                start: m.start(),
                end: m.end(),
            })
            .collect();

        let mut issues = Vec::new();
        for brand in self.dictionary.brands() {
            let width = brand.word_count();
            if width == 0 || width > tokens.len() {
                continue;
            }
            for window in tokens.windows(width) {
                if !joined_by_spaces(text, window) {
                    continue;
                }
                let span = &text[window[0].start..window[width - 1].end];
                if let Some(issue) = self.match_span(span, brand) {
                    issues.push(issue);
                }
            }
        }
        issues
    }

    fn match_span(&self, span: &str, brand: &BrandEntry) -> Option<SpellIssue> {
        if span.chars().count() < self.min_token_len {
            return None;
        }
        let key = brand_key(span);
        let canonical = brand_key(&brand.name);
        if key == canonical {
            return None;
        }

        let confidence = if brand.variants.iter().any(|v| brand_key(v) == key) {
            brand.confidence
        } else {
            let similarity = normalized_levenshtein(&key, &canonical);
            if similarity <= self.accept_similarity || similarity >= self.already_correct_similarity {
                return None;
            }
            brand.confidence * similarity
        };

        Some(
            SpellIssue::spelling(span, brand.name.clone(), confidence, IssueSource::BrandFuzzy)
                .with_category(brand.category.clone())
                .with_type(IssueType::Brand),
        )
    }
}

/// Adjacent tokens separated only by whitespace or hyphens.
fn joined_by_spaces(text: &str, window: &[Token]) -> bool {
    window.windows(2).all(|pair| {
        text[pair[0].end..pair[1].start]
            .chars()
            .all(|c| c.is_whitespace() || c == '-')
    })
}
