//! Command-line interface for cytoband-hierarchy.
//!
//! Available commands:
//!
//! - **build**: Build a linked band `CodeSystem` from a UCSC cytoBand table
//!
//! ## Usage
//!
//! ```text
//! # Build with defaults
//! cytoband-hierarchy build -i cytoBand.txt.gz -o cytoband-codesystem.json
//!
//! # Join p and q arms at every level, JSON summary for scripting
//! cytoband-hierarchy build -i cytoBand.txt -o cs.json \
//!     --link-across-centromere --centromere-levels all --format json
//! ```

use clap::{Parser, Subcommand};

pub mod build;

#[derive(Parser)]
#[command(name = "cytoband-hierarchy")]
#[command(version)]
#[command(about = "Build a linked cytogenetic band CodeSystem from UCSC cytoBand tables")]
#[command(
    long_about = "cytoband-hierarchy turns a UCSC cytoBand table into an assembly-agnostic FHIR CodeSystem.\n\nBands are nested chromosome > arm > region > band > subband, and every concept carries:\n- Its structural kind\n- previous/next links to its siblings in genomic order\n- Optionally, links across the centromere joining the p and q arms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Summary output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the band CodeSystem from a cytoBand table
    Build(build::BuildArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
