//! Static vocabulary for spelling and brand checks.
//!
//! The built-in tables cover common Swedish catalog vocabulary. They can be
//! extended from a JSON file:
//!
//! ```ignore
//! use catalint::Dictionary;
//!
//! let dict = Dictionary::builtin().with_extension_file("house-terms.json")?;
//! assert!(dict.is_whitelisted("stengods"));
//! ```

mod builtin;
mod lexicon;

pub(crate) use lexicon::brand_key;
pub use lexicon::{BrandEntry, Correction, Dictionary, DictionaryData, DictionaryStats};
