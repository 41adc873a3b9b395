//! Check command - run every check over a file of listings.

use std::fs;
use std::path::PathBuf;

use catalint::{CatalintConfig, Listing, ListingReport};
use colored::Colorize;
use tracing::info;

use super::{build_catalint, EngineOptions};

pub fn run(
    options: &EngineOptions,
    file: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(&file)
        .map_err(|e| format!("Failed to read '{}': {}", file.display(), e))?;
    let listings: Vec<Listing> = serde_json::from_str(&content)?;
    info!(count = listings.len(), file = %file.display(), "Checking listings");

    let catalint = build_catalint(options, CatalintConfig::default())?;
    let reports: Vec<ListingReport> = listings.iter().map(|l| catalint.check_listing(l)).collect();

    let rendered = serde_json::to_string_pretty(&reports)?;
    match output {
        Some(path) => {
            fs::write(&path, rendered)?;
            print_summary(&reports, verbose);
            eprintln!("{} {}", "Report written to".green(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn print_summary(reports: &[ListingReport], verbose: bool) {
    let flagged = reports.iter().filter(|r| r.suggestion_count() > 0).count();
    let artists = reports.iter().filter(|r| r.detection.is_found()).count();

    eprintln!("{}", "Check Summary".cyan().bold());
    eprintln!("{}", "═".repeat(50).dimmed());
    eprintln!("{}: {}", "Listings".bold(), reports.len());
    eprintln!("{}: {}", "With suggestions".bold(), flagged.to_string().yellow());
    eprintln!("{}: {}", "Artists in title".bold(), artists.to_string().yellow());

    if verbose {
        for (index, report) in reports.iter().enumerate() {
            let count = report.suggestion_count();
            if count == 0 {
                continue;
            }
            let id = report.id.clone().unwrap_or_else(|| format!("#{}", index + 1));
            eprintln!("  {} {} suggestion(s)", id.bold(), count);
        }
    }
}
