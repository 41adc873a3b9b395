//! Name heuristics shared by artist detection and spellchecking.
//!
//! - [`looks_like_person_name`]: is a 2–3 token sequence plausibly a person?
//! - [`is_likely_proper_name`]: does a single word sit in a name-like context?
//! - Diacritic and casing helpers used when comparing suggestions.

mod classifier;
mod proper;
mod text;

pub use classifier::looks_like_person_name;
pub use proper::is_likely_proper_name;
pub use text::{
    capitalize_first, fold_diacritics, is_all_caps, is_diacritic_variant, is_title_case,
    match_case, normalize_whitespace, title_case_words,
};
