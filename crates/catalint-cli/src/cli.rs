//! CLI argument definitions using clap.

use std::path::PathBuf;

use catalint::FieldType;
use clap::{Parser, Subcommand};

/// Catalint: artist detection and spellchecking for auction catalog text
#[derive(Parser)]
#[command(name = "catalint")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Oracle to consult before the local rules
    #[arg(long, global = true, default_value = "none")]
    pub oracle: OracleChoice,

    /// Model to use with the anthropic oracle
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// JSON file extending the built-in dictionary
    #[arg(long, global = true, value_name = "JSON")]
    pub dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look for an artist name typed into a title
    Detect {
        /// Listing title
        #[arg(value_name = "TITLE")]
        title: String,

        /// Current artist field value
        #[arg(short, long)]
        artist: Option<String>,

        /// Listing description, passed to the oracle as context
        #[arg(short, long)]
        description: Option<String>,

        /// Search even if the artist field is filled
        #[arg(short, long)]
        force: bool,

        /// Ask the oracle to verify the detected artist
        #[arg(long)]
        verify: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Spellcheck one listing field
    Spellcheck {
        /// Text to check
        #[arg(value_name = "TEXT")]
        text: String,

        /// Field the text comes from (title, description, condition, keywords)
        #[arg(long, default_value = "description")]
        field: FieldType,

        /// Listing title, used as context for other fields
        #[arg(short, long)]
        title: Option<String>,

        /// Current artist field value
        #[arg(short, long)]
        artist: Option<String>,

        /// Term to ignore (repeatable)
        #[arg(short, long = "ignore", value_name = "TERM")]
        ignore: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the artist field value itself
    Artist {
        /// Artist field value
        #[arg(value_name = "VALUE")]
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check every listing in a JSON file
    Check {
        /// JSON array of listings ({id, title, description, condition, artist})
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Oracle choice
#[derive(Clone, Debug, Default)]
pub enum OracleChoice {
    /// No oracle - use local rules only
    #[default]
    None,
    /// Anthropic Claude API (requires ANTHROPIC_API_KEY)
    Anthropic,
    /// Mock oracle for testing
    Mock,
}

impl std::str::FromStr for OracleChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(OracleChoice::None),
            "anthropic" | "claude" => Ok(OracleChoice::Anthropic),
            "mock" | "test" => Ok(OracleChoice::Mock),
            _ => Err(format!("Unknown oracle: {}. Use: none, anthropic, or mock.", s)),
        }
    }
}

impl std::fmt::Display for OracleChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleChoice::None => write!(f, "none"),
            OracleChoice::Anthropic => write!(f, "anthropic"),
            OracleChoice::Mock => write!(f, "mock"),
        }
    }
}
