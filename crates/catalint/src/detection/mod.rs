//! Misplaced-artist detection.
//!
//! Cataloguers often type the artist's name into the title instead of the
//! artist field. Detection runs in two layers:
//!
//! 1. An optional [`Oracle`](crate::oracle::Oracle), whose answer is final
//!    unless the call itself fails.
//! 2. A local rule cascade ([`PatternExtractor`] + name classifier +
//!    [`ConfidenceScorer`]), used when no oracle is configured or it failed.
//!
//! # Example
//!
//! ```
//! use catalint::{DetectionConfig, DetectionOrchestrator, DetectionRequest, DetectionSource};
//!
//! let orchestrator = DetectionOrchestrator::new(DetectionConfig::default());
//! let outcome = orchestrator.detect(&DetectionRequest::new("LISA LARSON. Skulptur, stengods"));
//!
//! let result = outcome.result.unwrap();
//! assert_eq!(result.detected_artist, "LISA LARSON");
//! assert_eq!(result.source, DetectionSource::Rules);
//! ```

mod orchestrator;
mod patterns;
mod result;
mod scoring;

pub use orchestrator::{Arbitration, DetectionConfig, DetectionOrchestrator, DetectionRequest};
pub use patterns::{PatternExtractor, PatternFamily, TitleCandidate};
pub use result::{
    DetectionOutcome, DetectionResult, DetectionSource, FOUND_IN_TITLE, FOUND_IN_TITLE_REPEAT,
};
pub use scoring::ConfidenceScorer;
