//! Command line argument parsing for the schemalens CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// schemalens - spelling-tolerant table selection for relational schemas
#[derive(Parser, Debug, Clone)]
#[command(name = "schemalens")]
#[command(about = "Correct a free-text query against a schema and find the tables it is about")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SchemaLensArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON or YAML)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SCHEMALENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SchemaLensArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct a query and list the tables relevant to the correction
    Process(ProcessArgs),

    /// Suggest corrections for a single word
    Suggest(SuggestArgs),

    /// List ranked rewrites of a query
    Variations(VariationsArgs),

    /// List the tables relevant to a query, without correcting it
    Select(SelectArgs),

    /// Show the vocabulary derived from a schema
    Vocabulary(VocabularyArgs),

    /// Read queries from stdin and pick corrections interactively
    Interactive(InteractiveArgs),
}

/// Arguments for processing a query
#[derive(Parser, Debug, Clone)]
pub struct ProcessArgs {
    /// Schema file (JSON, or YAML by extension)
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Minimum relevance score (defaults to the configured threshold)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for suggesting word corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Schema file (JSON, or YAML by extension)
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema: PathBuf,

    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for listing query variations
#[derive(Parser, Debug, Clone)]
pub struct VariationsArgs {
    /// Schema file (JSON, or YAML by extension)
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for selecting relevant tables
#[derive(Parser, Debug, Clone)]
pub struct SelectArgs {
    /// Schema file (JSON, or YAML by extension)
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Minimum relevance score (defaults to the configured threshold)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for showing the vocabulary
#[derive(Parser, Debug, Clone)]
pub struct VocabularyArgs {
    /// Schema file (JSON, or YAML by extension)
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema: PathBuf,
}

/// Arguments for the interactive session
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Schema file (JSON, or YAML by extension)
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema: PathBuf,

    /// Minimum relevance score (defaults to the configured threshold)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}
