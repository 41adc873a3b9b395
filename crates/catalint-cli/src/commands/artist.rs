//! Artist command - check the artist field itself.

use catalint::{CatalintConfig, SessionContext};
use colored::Colorize;

use super::{build_catalint, print_issues, EngineOptions};

pub fn run(options: &EngineOptions, value: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalint = build_catalint(options, CatalintConfig::default())?;
    let issues = catalint.check_artist_field(&value, &SessionContext::new());

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
        return Ok(());
    }

    println!("{}: {}", "Artist field".cyan().bold(), value);
    if issues.is_empty() {
        println!("{}", "Looks fine".green());
    } else {
        print_issues(&issues);
    }

    Ok(())
}
