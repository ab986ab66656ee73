use clap::{Parser, Subcommand};
use elemental::config::OutputFormat;
use elemental::document::DocumentKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "elemental")]
#[command(author, version, about = "Inspect AWS Elemental MediaConvert job documents")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a job, job template or preset document and print it
    Inspect {
        /// JSON document to inspect
        #[arg(required = true)]
        file: PathBuf,

        /// Kind of a document without a response envelope
        #[arg(short, long, value_enum)]
        kind: Option<DocumentKind>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Fail on enumeration values this build does not model
        #[arg(long)]
        strict: bool,
    },

    /// List modelled enumerations, or the values of one of them
    Enums {
        /// Enumeration name, case-insensitive
        name: Option<String>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
