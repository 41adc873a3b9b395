//! Catalint: misplaced-artist detection and spellchecking for auction catalogs.
//!
//! Swedish auction listings are typed quickly and by many hands. Catalint
//! looks at one listing field at a time and suggests corrections:
//!
//! - an artist name typed into the title instead of the artist field
//! - misspelled catalog words and manufacturer names
//! - a lowercase or near-miss artist field
//!
//! # Core Principles
//!
//! - **Conservative**: a missed suggestion is cheap, a wrong one is not
//! - **Oracle first, rules second**: an AI oracle's answer is final; local
//!   rules only run when there is no oracle or it failed
//! - **Stateless**: callers pass a [`SessionContext`] with every call
//!
//! # Example
//!
//! ```
//! use catalint::{Catalint, DetectionRequest, FieldType, SessionContext};
//!
//! let catalint = Catalint::new();
//!
//! let outcome = catalint.detect_artist(&DetectionRequest::new("LISA LARSON. Skulptur, stengods"));
//! assert_eq!(outcome.result.unwrap().suggested_title, "Skulptur, stengods");
//!
//! let issues = catalint.spellcheck("Skål i porsling", FieldType::Description, &SessionContext::new());
//! assert_eq!(issues[0].corrected, "porslin");
//! ```

pub mod detection;
pub mod dictionary;
pub mod error;
pub mod names;
pub mod oracle;
pub mod session;
pub mod spellcheck;

mod catalint;

pub use crate::catalint::{Catalint, CatalintConfig, Listing, ListingReport};
pub use detection::{
    Arbitration, ConfidenceScorer, DetectionConfig, DetectionOrchestrator, DetectionOutcome,
    DetectionRequest, DetectionResult, DetectionSource, PatternExtractor, TitleCandidate,
};
pub use dictionary::{BrandEntry, Dictionary};
pub use error::{CatalintError, Result};
pub use names::{is_likely_proper_name, looks_like_person_name};
pub use oracle::{AnthropicOracle, MockAnswer, MockOracle, Oracle, OracleConfig};
pub use session::SessionContext;
pub use spellcheck::{FieldType, IssueSource, IssueType, SpellIssue, SpellcheckConfig, SpellcheckEngine};
