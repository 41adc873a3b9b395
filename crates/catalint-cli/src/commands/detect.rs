//! Detect command - find an artist name in a title.

use catalint::{CatalintConfig, DetectionConfig, DetectionRequest};
use colored::Colorize;

use super::{build_catalint, EngineOptions};

pub fn run(
    options: &EngineOptions,
    title: String,
    artist: Option<String>,
    description: Option<String>,
    force: bool,
    verify: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalintConfig {
        detection: DetectionConfig::default().with_verify_artists(verify),
        ..Default::default()
    };
    let catalint = build_catalint(options, config)?;

    let mut request = DetectionRequest::new(title.as_str());
    if let Some(artist) = artist {
        request = request.with_artist_field(artist);
    }
    if let Some(description) = description {
        request = request.with_description(description);
    }
    if force {
        request = request.forced();
    }

    let outcome = catalint.detect_artist(&request);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("{}", "Artist Detection".cyan().bold());
    println!("{}", "═".repeat(50).dimmed());
    println!("{}: {}", "Title".bold(), title);
    println!("{}: {}", "Oracle".bold(), catalint.oracle_name().unwrap_or("none"));
    println!();

    match outcome.result {
        Some(result) => {
            println!(
                "{} {}",
                "Artist found:".green().bold(),
                result.detected_artist.bold()
            );
            println!("  {}: {}", "Suggested title".bold(), result.suggested_title);
            println!(
                "  {}: {:.0}% ({})",
                "Confidence".bold(),
                result.confidence * 100.0,
                result.source
            );
            println!("  {}: {}", "Found in".bold(), result.found_in);
            if let Some(reasoning) = &result.reasoning {
                println!("  {}: {}", "Reasoning".bold(), reasoning.dimmed());
            }
            if let Some(verification) = &result.verification {
                println!("  {}: {}", "Verified".bold(), "yes".green());
                if let Some(biography) = &verification.biography {
                    println!("  {}: {}", "Biography".bold(), biography.dimmed());
                }
            }
        }
        None => {
            println!("{}", "No artist found in title".yellow());
            if let Some(diagnostic) = outcome.diagnostic {
                println!("  {}", diagnostic.dimmed());
            }
        }
    }

    Ok(())
}
