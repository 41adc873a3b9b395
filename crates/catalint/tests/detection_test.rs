//! Integration tests for misplaced-artist detection.

use std::sync::Arc;

use catalint::oracle::{ArtistVerdict, ArtistVerification};
use catalint::{
    looks_like_person_name, Catalint, CatalintConfig, ConfidenceScorer, DetectionConfig,
    DetectionRequest, DetectionSource, MockAnswer, MockOracle, PatternExtractor,
};

fn rules_only() -> Catalint {
    Catalint::new()
}

fn with_mock(oracle: MockOracle) -> Catalint {
    Catalint::new().with_oracle(oracle)
}

// =============================================================================
// Rule cascade
// =============================================================================

#[test]
fn test_caps_name_with_period() {
    let outcome = rules_only().detect_artist(&DetectionRequest::new(
        "LISA LARSON. Skulptur, stengods, Gustavsberg, signerad",
    ));

    let result = outcome.result.expect("expected a detection");
    assert_eq!(result.detected_artist, "LISA LARSON");
    assert_eq!(result.suggested_title, "Skulptur, stengods, Gustavsberg, signerad");
    assert_eq!(result.source, DetectionSource::Rules);
    assert_eq!(result.found_in, "title");
}

#[test]
fn test_informal_lowercase_name() {
    let outcome = rules_only().detect_artist(&DetectionRequest::new(
        "rolf lidberg papper litografi 1947 signerad",
    ));

    let result = outcome.result.expect("expected a detection");
    assert_eq!(result.detected_artist, "Rolf Lidberg");
    assert_eq!(result.source, DetectionSource::RulesInformal);
    assert!((result.confidence - 0.8).abs() < 1e-9);
}

#[test]
fn test_name_at_end_of_title() {
    let title = "FAT, stengods, Royal Copenhagen, Danmark. Niels Thorsson";
    let candidate = PatternExtractor::new().extract(title).expect("expected a candidate");
    assert_eq!(candidate.object_type, "FAT");

    let result = rules_only()
        .detect_artist(&DetectionRequest::new(title))
        .result
        .expect("expected a detection");
    assert_eq!(result.detected_artist, "Niels Thorsson");
    assert_eq!(result.suggested_title, "stengods, Royal Copenhagen, Danmark");
}

#[test]
fn test_brand_is_not_an_artist() {
    let outcome = rules_only().detect_artist(&DetectionRequest::new("VAS, glas, kristall, Orrefors"));
    assert!(outcome.result.is_none());
    assert!(outcome.diagnostic.is_some());
}

#[test]
fn test_descriptive_title_has_no_artist() {
    let outcome =
        rules_only().detect_artist(&DetectionRequest::new("TAVLA, olja på duk, landskap med hus"));
    assert!(outcome.result.is_none());
}

#[test]
fn test_leading_three_word_name_before_comma() {
    let result = rules_only()
        .detect_artist(&DetectionRequest::new("Carl Gustaf Malmsten, karmstol, ek, 1940-tal"))
        .result
        .expect("expected a detection");

    assert_eq!(result.detected_artist, "Carl Gustaf Malmsten");
    assert_eq!(result.suggested_title, "Karmstol, ek, 1940-tal");
    assert_eq!(result.source, DetectionSource::Rules);
}

#[test]
fn test_leading_name_with_life_dates() {
    let result = rules_only()
        .detect_artist(&DetectionRequest::new("Lisa Larson (1931-2024), skulptur, stengods"))
        .result
        .expect("expected a detection");

    assert_eq!(result.detected_artist, "Lisa Larson");
    assert_eq!(result.suggested_title, "Skulptur, stengods");
    assert_eq!(result.source, DetectionSource::Rules);
}

#[test]
fn test_informal_name_keeps_compound_object_noun() {
    let result = rules_only()
        .detect_artist(&DetectionRequest::new("Bertil Vallien glasskulptur Kosta Boda 1980"))
        .result
        .expect("expected a detection");

    assert_eq!(result.detected_artist, "Bertil Vallien");
    assert_eq!(result.suggested_title, "GLASSKULPTUR, Kosta Boda 1980");
    assert_eq!(result.source, DetectionSource::RulesInformal);
}

#[test]
fn test_descriptive_opener_is_not_an_artist() {
    for title in [
        "Antik pendyl i förgylld brons, 1800-tal",
        "Äldre kista med beslag, 1800-tal",
        "Vacker spegel-byrå i ek, 1900-tal",
    ] {
        let outcome = rules_only().detect_artist(&DetectionRequest::new(title));
        assert!(outcome.result.is_none(), "unexpected artist in {:?}", title);
    }
}

#[test]
fn test_structured_titles_skip_informal_pre_check() {
    let extractor = PatternExtractor::new();
    assert!(extractor
        .informal_candidate("Carl Gustaf Malmsten, karmstol, ek, 1940-tal")
        .is_none());
    assert!(extractor
        .informal_candidate("Lisa Larson (1931-2024), skulptur, stengods")
        .is_none());
    assert!(extractor.informal_candidate("Antik pendyl i förgylld brons, 1800-tal").is_none());
}

#[test]
fn test_embedded_name_scored_by_object_type() {
    let painting = rules_only()
        .detect_artist(&DetectionRequest::new("TAVLA, Pablo Picasso (1881-1973), olja på duk"))
        .result
        .expect("expected a detection");
    let chair = rules_only()
        .detect_artist(&DetectionRequest::new("STOL, Bruno Mathsson, Dux, 1960-tal"))
        .result
        .expect("expected a detection");

    assert_eq!(painting.suggested_title, "TAVLA, olja på duk");
    assert!(painting.confidence > chair.confidence);
}

#[test]
fn test_name_classifier_examples() {
    assert!(!looks_like_person_name("Stockholm Göteborg"));
    assert!(looks_like_person_name("Pablo Picasso"));
    assert!(looks_like_person_name("Carl Gustaf Malmsten"));
    assert!(!looks_like_person_name("A B"));
}

#[test]
fn test_scorer_prefers_artworks() {
    let scorer = ConfidenceScorer::new();
    assert!(scorer.score("Pablo Picasso", "TAVLA") > scorer.score("Bruno Mathsson", "STOL"));
}

// =============================================================================
// Guards
// =============================================================================

#[test]
fn test_filled_artist_field_skips_detection() {
    let request = DetectionRequest::new("LISA LARSON. Skulptur, stengods").with_artist_field("Lisa Larson");
    let catalint = with_mock(MockOracle::new());

    assert!(catalint.detect_artist(&request).result.is_none());
}

#[test]
fn test_forced_redetection() {
    let oracle = Arc::new(MockOracle::new());
    let catalint = Catalint::new().with_shared_oracle(oracle.clone());
    let request = DetectionRequest::new("LISA LARSON. Skulptur, stengods")
        .with_artist_field("Stig Lindberg")
        .forced();

    let result = catalint.detect_artist(&request).result.expect("expected a detection");

    assert_eq!(result.found_in, "title-repeat");
    let requests = oracle.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].artist_field.is_none());
}

#[test]
fn test_short_title_is_skipped() {
    assert!(rules_only().detect_artist(&DetectionRequest::new("Vas, glas")).result.is_none());
}

// =============================================================================
// Oracle arbitration
// =============================================================================

#[test]
fn test_oracle_negative_is_never_overridden() {
    let title = "LISA LARSON. Skulptur, stengods, Gustavsberg";
    assert!(rules_only().detect_artist(&DetectionRequest::new(title)).result.is_some());

    let catalint = with_mock(MockOracle::new().with_detect(MockAnswer::Answer(ArtistVerdict::no_artist())));
    let outcome = catalint.detect_artist(&DetectionRequest::new(title));

    assert!(outcome.result.is_none());
}

#[test]
fn test_oracle_low_confidence_is_never_overridden() {
    let title = "LISA LARSON. Skulptur, stengods, Gustavsberg";
    let catalint = with_mock(
        MockOracle::new().with_detect(MockAnswer::Answer(ArtistVerdict::artist("Lisa Larson", 0.4))),
    );

    assert!(catalint.detect_artist(&DetectionRequest::new(title)).result.is_none());
}

#[test]
fn test_transport_error_falls_back_to_rules() {
    let catalint = with_mock(MockOracle::new().with_detect(MockAnswer::TransportError));
    let outcome = catalint.detect_artist(&DetectionRequest::new("LISA LARSON. Skulptur, stengods"));

    let result = outcome.result.expect("expected a rule detection");
    assert_eq!(result.source, DetectionSource::Rules);
}

#[test]
fn test_malformed_response_falls_back_to_rules() {
    let catalint = with_mock(MockOracle::new().with_detect(MockAnswer::Malformed));
    let outcome = catalint.detect_artist(&DetectionRequest::new(
        "rolf lidberg papper litografi 1947 signerad",
    ));

    assert_eq!(outcome.result.expect("expected a rule detection").source, DetectionSource::RulesInformal);
}

#[test]
fn test_confident_oracle_answer_is_accepted() {
    let verdict = ArtistVerdict::artist("Carl Larsson", 0.92)
        .with_suggested_title("AKVARELL, interiör, signerad")
        .with_reasoning("Well-known Swedish painter");
    let catalint = with_mock(MockOracle::new().with_detect(MockAnswer::Answer(verdict)));

    let result = catalint
        .detect_artist(&DetectionRequest::new("AKVARELL, Carl Larsson, interiör, signerad"))
        .result
        .expect("expected a detection");

    assert_eq!(result.source, DetectionSource::Ai);
    assert_eq!(result.suggested_title, "AKVARELL, interiör, signerad");
    assert_eq!(result.reasoning.as_deref(), Some("Well-known Swedish painter"));
}

#[test]
fn test_low_confidence_informal_answer_is_boosted() {
    let catalint = with_mock(
        MockOracle::new().with_detect(MockAnswer::Answer(ArtistVerdict::artist("Rolf Lidberg", 0.5))),
    );

    let result = catalint
        .detect_artist(&DetectionRequest::new("rolf lidberg papper litografi 1947 signerad"))
        .result
        .expect("expected a boosted detection");

    assert_eq!(result.source, DetectionSource::AiBoosted);
    assert!((result.confidence - 0.7).abs() < 1e-9);
}

#[test]
fn test_oracle_brand_answer_counts_as_no_artist() {
    let catalint = with_mock(
        MockOracle::new().with_detect(MockAnswer::Answer(ArtistVerdict::artist("Kosta Boda", 0.95))),
    );

    let outcome = catalint.detect_artist(&DetectionRequest::new("SKÅL, glas, Kosta Boda, 1980-tal"));
    assert!(outcome.result.is_none());
}

#[test]
fn test_oracle_receives_derived_object_type() {
    let oracle = Arc::new(MockOracle::new());
    let catalint = Catalint::new().with_shared_oracle(oracle.clone());

    catalint.detect_artist(
        &DetectionRequest::new("TAVLA, Carl Larsson, akvarell").with_description("Signerad"),
    );

    let requests = oracle.requests();
    assert_eq!(requests[0].object_type.as_deref(), Some("TAVLA"));
    assert_eq!(requests[0].description.as_deref(), Some("Signerad"));
}

// =============================================================================
// Verification
// =============================================================================

#[test]
fn test_verification_attached_when_enabled() {
    let config = CatalintConfig {
        detection: DetectionConfig::default().with_verify_artists(true),
        ..Default::default()
    };
    let catalint = Catalint::with_config(config).with_oracle(MockOracle::new());

    let result = catalint
        .detect_artist(&DetectionRequest::new("LISA LARSON. Skulptur, stengods"))
        .result
        .expect("expected a detection");

    assert!(result.verification.expect("expected verification").is_verified);
}

#[test]
fn test_verification_failure_is_ignored() {
    let config = CatalintConfig {
        detection: DetectionConfig::default().with_verify_artists(true),
        ..Default::default()
    };
    let oracle = MockOracle::new().with_verify(MockAnswer::<ArtistVerification>::TransportError);
    let catalint = Catalint::with_config(config).with_oracle(oracle);

    let result = catalint
        .detect_artist(&DetectionRequest::new("LISA LARSON. Skulptur, stengods"))
        .result
        .expect("detection survives a failed verification");

    assert!(result.verification.is_none());
    assert_eq!(result.source, DetectionSource::Ai);
}
