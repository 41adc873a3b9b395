//! AI oracle integration.
//!
//! The oracle is an external text-completion service consulted for artist
//! detection, spellchecking and artist verification. It is optional:
//! without one, detection runs on local rules only and spellchecking uses
//! the dictionary and brand tables.
//!
//! # Supported Providers
//!
//! - **Anthropic** - Claude models via API (requires `ANTHROPIC_API_KEY`)
//! - **Mock** - deterministic answers for tests and offline runs
//!
//! # Example
//!
//! ```no_run
//! use catalint::{AnthropicOracle, Catalint};
//!
//! let catalint = Catalint::new().with_oracle(AnthropicOracle::from_env().unwrap());
//! ```

mod anthropic;
mod mock;
mod prompts;
mod provider;

pub use anthropic::AnthropicOracle;
pub use mock::{MockAnswer, MockOracle};
pub use provider::{
    ArtistVerdict, ArtistVerification, Oracle, OracleConfig, OracleRequest, OracleSpellIssue,
    OracleTask, SpellcheckVerdict,
};
