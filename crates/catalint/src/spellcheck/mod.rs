//! Spellchecking for catalog text.
//!
//! [`SpellcheckEngine::check`] runs three sources side by side:
//!
//! - **dictionary**: known Swedish catalog misspellings
//! - **oracle**: suggestions from the configured [`Oracle`](crate::oracle::Oracle)
//! - **brand**: fuzzy matches against manufacturer names
//!
//! [`ResultMerger`] then keeps one issue per word and drops likely false
//! positives: ignored terms, whitelisted terms, words from the artist field
//! and uncertain corrections of proper names.

mod brand;
mod engine;
mod issue;
mod merger;

pub use brand::BrandMatcher;
pub use engine::{SpellcheckConfig, SpellcheckEngine};
pub use issue::{FieldType, IssueSource, IssueType, SpellIssue};
pub use merger::{DropReason, ResultMerger};
