use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tessera",
    about = "Tessera: deterministic fingerprints and semantic transfer tags",
    version
)]
pub struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a kernel TOML config (`[assumptions] level = ...`)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fingerprint a run of bytes
    Bytes {
        #[command(flatten)]
        input: BytesInput,
    },

    /// Fingerprint a single number
    Number {
        /// Integer (signed or unsigned) or, with --float, a decimal
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Parse as a 64-bit float; the fraction is dropped before hashing
        #[arg(long)]
        float: bool,
    },

    /// Fingerprint an ordered list of integers
    Combine {
        /// Integers, hashed individually then combined in order
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Show the semantic tag table
    Tags,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct BytesInput {
    /// UTF-8 text
    #[arg(long)]
    pub text: Option<String>,

    /// Hex digits (whitespace ignored)
    #[arg(long)]
    pub hex: Option<String>,

    /// File whose contents are hashed
    #[arg(long)]
    pub file: Option<PathBuf>,
}
