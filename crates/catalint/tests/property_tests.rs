//! Property-based tests for detection and spellchecking.
//!
//! Property-based tests verify:
//! 1. **No panics**: every entry point accepts arbitrary text
//! 2. **Determinism**: same input always produces same output
//! 3. **Merging laws**: one issue per word, artist-field words never flagged
//!
//! ```bash
//! PROPTEST_CASES=10000 cargo test -p catalint --test property_tests
//! ```

use proptest::prelude::*;

use catalint::spellcheck::ResultMerger;
use catalint::{
    is_likely_proper_name, looks_like_person_name, Catalint, DetectionRequest, FieldType,
    IssueSource, PatternExtractor, SessionContext, SpellIssue,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Arbitrary text including Swedish letters and catalog punctuation.
fn catalog_text() -> impl Strategy<Value = String> {
    "[a-zA-ZåäöÅÄÖé0-9 ,.()\"'\\-]{0,120}"
}

/// Titles shaped like real catalog titles.
fn catalog_title() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-ZÅÄÖ]{3,10}, [a-zåäö]{3,10}, [A-Z][a-zåäö]{2,10} [A-Z][a-zåäö]{2,10}, [0-9]{4}",
        "[A-ZÅÄÖ]{3,8} [A-ZÅÄÖ]{3,10}\\. [A-Z][a-zåäö]{3,10}, [a-zåäö]{3,10}",
        "[a-zåäö]{3,8} [a-zåäö]{3,10} [a-zåäö]{3,10} [0-9]{4}",
        "[A-ZÅÄÖ]{3,10}, [a-zåäö]{3,10}\\. [A-Z][a-zåäö]{2,10} [A-Z][a-zåäö]{2,10}",
    ]
}

fn word() -> impl Strategy<Value = String> {
    "[a-zåäö]{4,10}"
}

fn issue() -> impl Strategy<Value = SpellIssue> {
    (word(), word(), 0.0f64..=1.0, 0usize..3).prop_map(|(original, corrected, confidence, source)| {
        let source = [IssueSource::Dictionary, IssueSource::AiSpellcheck, IssueSource::BrandFuzzy][source];
        SpellIssue::spelling(original, corrected, confidence, source)
    })
}

// =============================================================================
// Detection
// =============================================================================

proptest! {
    #[test]
    fn detection_never_panics(title in catalog_text(), artist in "[a-zA-Z ]{0,20}", force: bool) {
        let mut request = DetectionRequest::new(title).with_artist_field(artist);
        request.force_redetection = force;
        let _ = Catalint::new().detect_artist(&request);
    }

    #[test]
    fn detection_is_deterministic(title in catalog_title()) {
        let catalint = Catalint::new();
        let request = DetectionRequest::new(title);
        prop_assert_eq!(catalint.detect_artist(&request), catalint.detect_artist(&request));
    }

    #[test]
    fn detection_confidence_in_range(title in catalog_title()) {
        if let Some(result) = Catalint::new().detect_artist(&DetectionRequest::new(title)).result {
            prop_assert!((0.0..=1.0).contains(&result.confidence));
            prop_assert!(looks_like_person_name(&result.detected_artist));
        }
    }

    #[test]
    fn extracted_names_have_two_or_three_words(title in catalog_title()) {
        for candidate in PatternExtractor::new().candidates(&title) {
            let words = candidate.candidate_name.split_whitespace().count();
            prop_assert!((2..=3).contains(&words));
        }
    }

    #[test]
    fn classifier_never_panics(candidate in catalog_text()) {
        let _ = looks_like_person_name(&candidate);
    }

    #[test]
    fn proper_name_check_never_panics(word in catalog_text(), text in catalog_text()) {
        let _ = is_likely_proper_name(&word, &text);
    }
}

// =============================================================================
// Spellcheck
// =============================================================================

proptest! {
    #[test]
    fn spellcheck_never_panics(text in catalog_text()) {
        let _ = Catalint::new().spellcheck(&text, FieldType::Description, &SessionContext::new());
    }

    #[test]
    fn spellcheck_is_deterministic(text in catalog_text()) {
        let catalint = Catalint::new();
        let session = SessionContext::new();
        prop_assert_eq!(
            catalint.spellcheck(&text, FieldType::Title, &session),
            catalint.spellcheck(&text, FieldType::Title, &session)
        );
    }

    #[test]
    fn spellcheck_output_is_ranked(text in catalog_text()) {
        let issues = Catalint::new().spellcheck(&text, FieldType::Description, &SessionContext::new());
        for pair in issues.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn dedupe_leaves_one_issue_per_word(issues in prop::collection::vec(issue(), 0..20)) {
        let merged = ResultMerger::dedupe(issues.clone());

        let mut keys: Vec<String> = merged.iter().map(SpellIssue::key).collect();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), merged.len());

        for kept in &merged {
            let best = issues
                .iter()
                .filter(|i| i.key() == kept.key())
                .map(|i| i.confidence)
                .fold(f64::MIN, f64::max);
            prop_assert_eq!(kept.confidence, best);
        }
    }

    #[test]
    fn artist_field_words_never_flagged(
        first in "[A-Z][a-z]{3,8}",
        last in "[A-Z][a-z]{3,8}",
        text in catalog_text(),
    ) {
        let artist = format!("{} {}", first, last);
        let session = SessionContext::new().with_artist_field(artist.as_str());
        let text = format!("{} {} {}", text, last.to_lowercase(), first);

        let issues = Catalint::new().spellcheck(&text, FieldType::Description, &session);

        for issue in issues {
            prop_assert!(!session.is_in_artist_field(&issue.original));
        }
    }
}
