//! Command implementations.

pub mod artist;
pub mod check;
pub mod detect;
pub mod spellcheck;

use std::path::PathBuf;

use catalint::{AnthropicOracle, Catalint, CatalintConfig, Dictionary, MockOracle, OracleConfig, SpellIssue};
use colored::Colorize;
use tracing::debug;

use crate::cli::OracleChoice;

/// Global options shared by every command.
pub struct EngineOptions {
    pub oracle: OracleChoice,
    pub model: Option<String>,
    pub dictionary: Option<PathBuf>,
}

/// Build a configured engine from the global options.
pub fn build_catalint(
    options: &EngineOptions,
    config: CatalintConfig,
) -> Result<Catalint, Box<dyn std::error::Error>> {
    let mut catalint = Catalint::with_config(config);

    if let Some(path) = &options.dictionary {
        let dictionary = Dictionary::builtin().with_extension_file(path)?;
        debug!(path = %path.display(), "Loaded dictionary extension");
        catalint = catalint.with_dictionary(dictionary);
    }

    catalint = match options.oracle {
        OracleChoice::None => catalint,
        OracleChoice::Mock => catalint.with_oracle(MockOracle::new()),
        OracleChoice::Anthropic => {
            let oracle = match &options.model {
                Some(model) => {
                    let api_key = std::env::var("ANTHROPIC_API_KEY")
                        .map_err(|_| "ANTHROPIC_API_KEY environment variable not set")?;
                    let config = OracleConfig {
                        model: model.clone(),
                        ..Default::default()
                    };
                    AnthropicOracle::with_config(api_key, config)?
                }
                None => AnthropicOracle::from_env()?,
            };
            catalint.with_oracle(oracle)
        }
    };

    Ok(catalint)
}

/// Print spelling suggestions as an indented list.
pub fn print_issues(issues: &[SpellIssue]) {
    for issue in issues {
        println!(
            "  {} {} {} {}",
            issue.original.red(),
            "→".dimmed(),
            issue.corrected.green().bold(),
            format!("({:.0}%, {})", issue.confidence * 100.0, issue.source).dimmed()
        );
    }
}
