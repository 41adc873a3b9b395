//! Catalint CLI - catalog text checker.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::EngineOptions;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("catalint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = EngineOptions {
        oracle: cli.oracle,
        model: cli.model,
        dictionary: cli.dictionary,
    };

    let result = match cli.command {
        Commands::Detect {
            title,
            artist,
            description,
            force,
            verify,
            json,
        } => commands::detect::run(&options, title, artist, description, force, verify, json),

        Commands::Spellcheck {
            text,
            field,
            title,
            artist,
            ignore,
            json,
        } => commands::spellcheck::run(&options, text, field, title, artist, ignore, json),

        Commands::Artist { value, json } => commands::artist::run(&options, value, json),

        Commands::Check { file, output } => commands::check::run(&options, file, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
