//! Spellcheck command.

use catalint::{CatalintConfig, FieldType, SessionContext};
use colored::Colorize;

use super::{build_catalint, print_issues, EngineOptions};

pub fn run(
    options: &EngineOptions,
    text: String,
    field: FieldType,
    title: Option<String>,
    artist: Option<String>,
    ignore: Vec<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalint = build_catalint(options, CatalintConfig::default())?;

    let mut session = SessionContext::new();
    if let Some(title) = title {
        session = session.with_title(title);
    }
    if let Some(artist) = artist {
        session = session.with_artist_field(artist);
    }
    for term in &ignore {
        session.ignore(term);
    }

    let issues = catalint.spellcheck(&text, field, &session);

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
        return Ok(());
    }

    println!("{} {}", "Spellcheck:".cyan().bold(), field.label());
    println!("{}", "═".repeat(50).dimmed());

    if issues.is_empty() {
        println!("{}", "No spelling issues found".green());
    } else {
        println!("{} suggestion(s):", issues.len().to_string().yellow().bold());
        print_issues(&issues);
    }

    Ok(())
}
