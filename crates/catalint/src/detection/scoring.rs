//! Confidence for rule-based detections.

use tracing::trace;

/// Starting confidence for a rule-based candidate.
const BASE_CONFIDENCE: f64 = 0.7;

/// Adjustment when the object type is typically made by an artist.
const ARTIST_OBJECT_BONUS: f64 = 0.2;

/// Adjustment when the object type is typically made by a designer.
const DESIGNER_OBJECT_PENALTY: f64 = 0.3;

const MIN_CONFIDENCE: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 0.9;

/// Works that carry an artist's signature.
const ARTIST_OBJECT_TYPES: &[&str] = &[
    "tavla", "målning", "oljemålning", "akvarell", "litografi", "färglitografi",
    "etsning", "skulptur", "teckning", "grafik", "painting", "watercolor",
    "watercolour", "lithograph", "etching", "sculpture", "drawing",
];

/// Designed objects, where a name in the title is often a brand or series.
const DESIGNER_OBJECT_TYPES: &[&str] = &[
    "stol", "karmstol", "fåtölj", "bord", "soffbord", "lampa", "bordslampa",
    "golvlampa", "vas", "skål", "fat", "tallrik", "chair", "armchair", "table",
    "lamp", "vase", "bowl", "dish", "plate",
];

/// Scores rule-based candidates by the kind of object they were found on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    /// Create a new scorer.
    pub fn new() -> Self {
        Self
    }

    /// Score a candidate name found on an object of `object_type`.
    ///
    /// Only the first word of the object type is considered, so
    /// `"Skulptur i brons"` scores like `"SKULPTUR"`.
    pub fn score(&self, candidate_name: &str, object_type: &str) -> f64 {
        let key = object_type
            .split(|c: char| !c.is_alphabetic())
            .find(|w| !w.is_empty())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let mut confidence = BASE_CONFIDENCE;
        if ARTIST_OBJECT_TYPES.contains(&key.as_str()) {
            confidence += ARTIST_OBJECT_BONUS;
        } else if DESIGNER_OBJECT_TYPES.contains(&key.as_str()) {
            confidence -= DESIGNER_OBJECT_PENALTY;
        }
        let confidence = confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

        trace!(candidate_name, object_type, confidence, "scored rule candidate");
        confidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_artist_object_types_score_high() {
        let scorer = ConfidenceScorer::new();
        assert!(approx(scorer.score("Carl Larsson", "TAVLA"), 0.9));
        assert!(approx(scorer.score("Carl Larsson", "Akvarell"), 0.9));
    }

    #[test]
    fn test_designer_object_types_score_low() {
        let scorer = ConfidenceScorer::new();
        assert!(approx(scorer.score("Bruno Mathsson", "STOL"), 0.4));
        assert!(approx(scorer.score("Bertil Vallien", "skål"), 0.4));
    }

    #[test]
    fn test_unknown_object_type_keeps_base() {
        let scorer = ConfidenceScorer::new();
        assert!(approx(scorer.score("Lisa Larson", ""), 0.7));
        assert!(approx(scorer.score("Lisa Larson", "FIGURIN"), 0.7));
    }

    #[test]
    fn test_first_word_decides() {
        let scorer = ConfidenceScorer::new();
        assert!(approx(scorer.score("Lisa Larson", "Skulptur i brons"), 0.9));
    }
}
