//! Dictionary lookup tables.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{CatalintError, Result};

use super::builtin;

/// Process-wide built-in dictionary, built on first use.
static BUILTIN: Lazy<Arc<Dictionary>> = Lazy::new(|| Arc::new(Dictionary::builtin()));

/// A known misspelling's replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// Correct spelling (lower case).
    pub correct: String,
    /// Vocabulary group, e.g. "material" or "technique".
    pub category: String,
    /// Confidence that the replacement is right (0.0-1.0).
    pub confidence: f64,
}

/// A brand or manufacturer name with its known misspellings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandEntry {
    /// Canonical display spelling, e.g. "Rörstrand".
    pub name: String,
    /// Known misspellings (case-folded).
    #[serde(default)]
    pub variants: Vec<String>,
    /// Product group, e.g. "glass".
    #[serde(default = "default_brand_category")]
    pub category: String,
    /// Confidence for an exact variant hit (0.0-1.0).
    pub confidence: f64,
}

fn default_brand_category() -> String {
    "brand".to_string()
}

impl BrandEntry {
    /// Create a brand entry.
    pub fn new(name: impl Into<String>, category: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
            category: category.into(),
            confidence,
        }
    }

    /// Add a known misspelling.
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into().to_lowercase());
        self
    }

    /// Number of words in the brand name; hyphens separate words.
    pub fn word_count(&self) -> usize {
        brand_key(&self.name).split(' ').count()
    }
}

/// Compare key for brand text: lower case, hyphens as spaces, single spaces.
pub(crate) fn brand_key(text: &str) -> String {
    text.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// On-disk dictionary extension (JSON). Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryData {
    #[serde(default)]
    pub whitelist: Vec<String>,
    #[serde(default)]
    pub corrections: HashMap<String, Correction>,
    #[serde(default)]
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub brands: Vec<BrandEntry>,
    #[serde(default)]
    pub known_artists: Vec<String>,
}

/// Statistics about loaded dictionary data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DictionaryStats {
    pub whitelist_terms: usize,
    pub corrections: usize,
    pub stop_words: usize,
    pub brands: usize,
    pub known_artists: usize,
    /// Where the data came from.
    pub source: String,
}

/// Immutable vocabulary tables used by the spellcheck and artist checks.
///
/// All keys are case-folded; lookups fold their argument.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    whitelist: HashSet<String>,
    corrections: HashMap<String, Correction>,
    stop_words: HashSet<String>,
    brands: Vec<BrandEntry>,
    known_artists: Vec<String>,
    source: String,
}

impl Dictionary {
    /// An empty dictionary. Mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            source: "empty".to_string(),
            ..Default::default()
        }
    }

    /// Build the built-in Swedish catalog vocabulary.
    pub fn builtin() -> Self {
        let mut dict = Self {
            source: "built-in".to_string(),
            ..Default::default()
        };

        dict.whitelist
            .extend(builtin::WHITELIST.iter().map(|t| t.to_string()));
        dict.stop_words
            .extend(builtin::STOP_WORDS.iter().map(|t| t.to_string()));

        for (wrong, correct, category, confidence) in builtin::CORRECTIONS {
            dict.corrections.insert(
                wrong.to_string(),
                Correction {
                    correct: correct.to_string(),
                    category: category.to_string(),
                    confidence: *confidence,
                },
            );
        }

        for (name, variants, category, confidence) in builtin::BRANDS {
            let entry = variants.iter().fold(
                BrandEntry::new(*name, *category, *confidence),
                |entry, variant| entry.with_variant(*variant),
            );
            dict.brands.push(entry);
        }

        dict.known_artists
            .extend(builtin::KNOWN_ARTISTS.iter().map(|a| a.to_string()));

        dict
    }

    /// Shared handle to the process-wide built-in dictionary.
    pub fn shared() -> Arc<Dictionary> {
        Arc::clone(&BUILTIN)
    }

    /// Parse extension data from a JSON string.
    pub fn data_from_json(json: &str) -> Result<DictionaryData> {
        Ok(serde_json::from_str(json)?)
    }

    /// Extend this dictionary with the contents of a JSON file.
    pub fn with_extension_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::data_from_json(&content)?;
        self.extend(data);
        self.source = format!("{} + {}", self.source, path.display());
        Ok(self)
    }

    /// Merge extension data into this dictionary. Later entries win.
    pub fn extend(&mut self, data: DictionaryData) {
        self.whitelist
            .extend(data.whitelist.into_iter().map(|t| t.to_lowercase()));
        self.stop_words
            .extend(data.stop_words.into_iter().map(|t| t.to_lowercase()));
        for (wrong, correction) in data.corrections {
            self.corrections.insert(wrong.to_lowercase(), correction);
        }
        for brand in data.brands {
            self.brands.retain(|b| brand_key(&b.name) != brand_key(&brand.name));
            self.brands.push(brand);
        }
        for artist in data.known_artists {
            if !self.known_artists.iter().any(|a| a.eq_ignore_ascii_case(&artist)) {
                self.known_artists.push(artist);
            }
        }
    }

    /// Add a whitelist term.
    pub fn with_whitelist_term(mut self, term: impl Into<String>) -> Self {
        self.whitelist.insert(term.into().to_lowercase());
        self
    }

    /// Add a misspelling → correction mapping.
    pub fn with_correction(
        mut self,
        wrong: impl Into<String>,
        correct: impl Into<String>,
        category: impl Into<String>,
        confidence: f64,
    ) -> Self {
        self.corrections.insert(
            wrong.into().to_lowercase(),
            Correction {
                correct: correct.into(),
                category: category.into(),
                confidence,
            },
        );
        self
    }

    /// Add a stop word.
    pub fn with_stop_word(mut self, word: impl Into<String>) -> Self {
        self.stop_words.insert(word.into().to_lowercase());
        self
    }

    /// Add a brand entry.
    pub fn with_brand(mut self, brand: BrandEntry) -> Self {
        self.brands.push(brand);
        self
    }

    /// Add a known artist name.
    pub fn with_known_artist(mut self, name: impl Into<String>) -> Self {
        self.known_artists.push(name.into());
        self
    }

    /// Whether a term is known to be correct.
    pub fn is_whitelisted(&self, term: &str) -> bool {
        self.whitelist.contains(&term.to_lowercase())
    }

    /// Whether a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Look up a known misspelling.
    pub fn correction_for(&self, word: &str) -> Option<&Correction> {
        self.corrections.get(&word.to_lowercase())
    }

    /// Brand table in insertion order.
    pub fn brands(&self) -> &[BrandEntry] {
        &self.brands
    }

    /// Known artist and designer names.
    pub fn known_artists(&self) -> &[String] {
        &self.known_artists
    }

    /// Whitelist terms in sorted order, for embedding in oracle prompts.
    pub fn whitelist_terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.whitelist.iter().cloned().collect();
        terms.sort();
        terms
    }

    /// Summary counts.
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            whitelist_terms: self.whitelist.len(),
            corrections: self.corrections.len(),
            stop_words: self.stop_words.len(),
            brands: self.brands.len(),
            known_artists: self.known_artists.len(),
            source: self.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_lookups_are_case_insensitive() {
        let dict = Dictionary::builtin();

        assert!(dict.is_whitelisted("Stengods"));
        assert!(dict.is_stop_word("OCH"));
        let correction = dict.correction_for("Porsling").unwrap();
        assert_eq!(correction.correct, "porslin");
        assert_eq!(correction.category, "material");
    }

    #[test]
    fn test_correct_words_are_never_corrections() {
        let dict = Dictionary::builtin();
        for term in dict.whitelist_terms() {
            assert!(
                dict.correction_for(&term).is_none(),
                "whitelisted term '{}' has a correction",
                term
            );
        }
    }

    #[test]
    fn test_shared_is_singleton() {
        let a = Dictionary::shared();
        let b = Dictionary::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_brand_word_count() {
        assert_eq!(BrandEntry::new("Orrefors", "glass", 0.9).word_count(), 1);
        assert_eq!(BrandEntry::new("Upsala-Ekeby", "ceramics", 0.9).word_count(), 2);
        assert_eq!(BrandEntry::new("Royal Copenhagen", "ceramics", 0.9).word_count(), 2);
    }

    #[test]
    fn test_extension_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "whitelist": ["Sgraffitodekor"],
                "corrections": {{"glasyrr": {{"correct": "glasyr", "category": "technique", "confidence": 0.9}}}},
                "brands": [{{"name": "Orrefors", "variants": ["orrefrs"], "confidence": 0.97}}],
                "knownArtists": ["Hertha Bengtson"]
            }}"#
        )
        .unwrap();

        let dict = Dictionary::builtin().with_extension_file(file.path()).unwrap();

        assert!(dict.is_whitelisted("sgraffitodekor"));
        assert_eq!(dict.correction_for("glasyrr").unwrap().correct, "glasyr");
        let orrefors: Vec<_> = dict.brands().iter().filter(|b| b.name == "Orrefors").collect();
        assert_eq!(orrefors.len(), 1);
        assert_eq!(orrefors[0].variants, vec!["orrefrs".to_string()]);
        assert_eq!(orrefors[0].category, "brand");
        assert!(dict.known_artists().iter().any(|a| a == "Hertha Bengtson"));
        assert!(dict.stats().source.contains("built-in"));
    }

    #[test]
    fn test_missing_extension_file_is_io_error() {
        let err = Dictionary::builtin()
            .with_extension_file("/nonexistent/catalint.json")
            .unwrap_err();
        assert!(matches!(err, CatalintError::Io { .. }));
    }
}
