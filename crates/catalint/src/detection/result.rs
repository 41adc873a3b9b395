//! Detection results.

use serde::{Deserialize, Serialize};

use crate::oracle::ArtistVerification;

/// Where a detection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionSource {
    /// Pattern cascade plus confidence scoring.
    Rules,
    /// Informal leading-name rule.
    RulesInformal,
    /// Oracle answer above the acceptance threshold.
    Ai,
    /// Low-confidence oracle answer corroborated by the informal rule.
    AiBoosted,
}

impl DetectionSource {
    /// Whether the oracle produced this detection.
    pub fn is_ai(&self) -> bool {
        matches!(self, DetectionSource::Ai | DetectionSource::AiBoosted)
    }
}

impl std::fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DetectionSource::Rules => "rules",
            DetectionSource::RulesInformal => "rules-informal",
            DetectionSource::Ai => "ai",
            DetectionSource::AiBoosted => "ai-boosted",
        };
        write!(f, "{}", label)
    }
}

/// Field a detected name was found in.
pub const FOUND_IN_TITLE: &str = "title";

/// Found in the title on a forced re-detection.
pub const FOUND_IN_TITLE_REPEAT: &str = "title-repeat";

/// An artist name that should move from the title to the artist field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// The name to put in the artist field.
    pub detected_artist: String,
    /// The title with the name removed.
    pub suggested_title: String,
    /// Confidence in the detection (0.0-1.0).
    pub confidence: f64,
    /// Which path produced the detection.
    pub source: DetectionSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    pub found_in: String,
    /// Oracle verification, when requested and available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<ArtistVerification>,
}

/// Outcome of one detection call.
///
/// `result` is `None` when no misplaced artist was found; `diagnostic` then
/// says why.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionOutcome {
    pub result: Option<DetectionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl DetectionOutcome {
    /// A detection.
    pub fn found(result: DetectionResult) -> Self {
        Self {
            result: Some(result),
            diagnostic: None,
        }
    }

    /// No detection, with a reason.
    pub fn none(reason: impl Into<String>) -> Self {
        Self {
            result: None,
            diagnostic: Some(reason.into()),
        }
    }

    /// Whether an artist was detected.
    pub fn is_found(&self) -> bool {
        self.result.is_some()
    }
}
