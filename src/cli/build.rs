use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::cli::OutputFormat;
use crate::codesystem::{CodeSystem, CodeSystemMetadata};
use crate::core::types::{CrossLinkLevel, DuplicateSubbandPolicy};
use crate::hierarchy::builder::{BandHierarchy, BuildOptions, BuildSummary};
use crate::parsing::cytoband::read_cytoband_file;

#[derive(Args)]
pub struct BuildArgs {
    /// UCSC cytoBand file (tab-separated, optionally .gz)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output CodeSystem JSON path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Canonical CodeSystem URL, also used as the system of previous/next Codings
    #[arg(short, long, default_value = "http://example.org/fhir/CodeSystem/human-cytoband-agnostic")]
    pub url: String,

    /// CodeSystem business version
    #[arg(long = "cs-version", value_name = "VERSION", default_value = "1.2.0")]
    pub cs_version: String,

    /// Computable CodeSystem name
    #[arg(long, default_value = "HumanCytogeneticBandsAssemblyAgnostic")]
    pub name: String,

    /// Human-readable CodeSystem title
    #[arg(long, default_value = "Human Cytogenetic Bands (Assembly-agnostic with prev/next)")]
    pub title: String,

    /// Publisher recorded on the CodeSystem
    #[arg(long)]
    pub publisher: Option<String>,

    /// Free-text description recorded on the CodeSystem
    #[arg(long)]
    pub description: Option<String>,

    /// Publication date as YYYY-MM-DD [default: today, UTC]
    #[arg(long, value_parser = parse_date)]
    pub date: Option<String>,

    /// Mark the CodeSystem as experimental
    #[arg(long)]
    pub experimental: bool,

    /// Include mitochondrial rows (chrM/chrMT)
    #[arg(long)]
    pub include_mito: bool,

    /// Link the last p-arm node to the first q-arm node of each chromosome
    #[arg(long)]
    pub link_across_centromere: bool,

    /// Level(s) at which to cross-link (requires --link-across-centromere)
    #[arg(long, value_enum, default_value = "subband")]
    pub centromere_levels: CentromereLevelArg,

    /// How to treat a subband code that appears on more than one row
    #[arg(long, value_enum, default_value = "skip")]
    pub duplicate_subbands: DuplicateSubbandsArg,
}

/// Cross-link level for CLI parsing
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CentromereLevelArg {
    Subband,
    Band,
    Region,
    All,
}

impl From<CentromereLevelArg> for CrossLinkLevel {
    fn from(arg: CentromereLevelArg) -> Self {
        match arg {
            CentromereLevelArg::Subband => CrossLinkLevel::Subband,
            CentromereLevelArg::Band => CrossLinkLevel::Band,
            CentromereLevelArg::Region => CrossLinkLevel::Region,
            CentromereLevelArg::All => CrossLinkLevel::All,
        }
    }
}

/// Duplicate subband policy for CLI parsing
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DuplicateSubbandsArg {
    Skip,
    Preserve,
    Reject,
}

impl From<DuplicateSubbandsArg> for DuplicateSubbandPolicy {
    fn from(arg: DuplicateSubbandsArg) -> Self {
        match arg {
            DuplicateSubbandsArg::Skip => DuplicateSubbandPolicy::Skip,
            DuplicateSubbandsArg::Preserve => DuplicateSubbandPolicy::Preserve,
            DuplicateSubbandsArg::Reject => DuplicateSubbandPolicy::Reject,
        }
    }
}

fn parse_date(value: &str) -> Result<String, String> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

impl BuildArgs {
    fn build_options(&self) -> BuildOptions {
        let mut options = BuildOptions::default()
            .with_mitochondrial(self.include_mito)
            .with_duplicate_subbands(self.duplicate_subbands.into());
        if self.link_across_centromere {
            options = options.with_centromere_links(self.centromere_levels.into());
        } else {
            options.centromere_level = self.centromere_levels.into();
        }
        options
    }

    fn metadata(&self) -> CodeSystemMetadata {
        let defaults = CodeSystemMetadata::default();
        CodeSystemMetadata {
            url: self.url.clone(),
            version: self.cs_version.clone(),
            name: self.name.clone(),
            title: self.title.clone(),
            publisher: self.publisher.clone(),
            description: self.description.clone(),
            experimental: self.experimental.then_some(true),
            date: self.date.clone().or(defaults.date),
        }
    }
}

pub fn run(args: BuildArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let table = read_cytoband_file(&args.input)?;

    if verbose {
        eprintln!(
            "Read {} rows from {} ({} malformed)",
            table.rows.len(),
            args.input.display(),
            table.malformed
        );
    }

    let hierarchy = BandHierarchy::build(&table, &args.build_options())?;
    let code_system = CodeSystem::from_hierarchy(&hierarchy, &args.metadata());
    code_system.save(&args.output)?;

    match format {
        OutputFormat::Text => print_text_summary(&args, &hierarchy, &code_system, verbose),
        OutputFormat::Json => print_json_summary(&args, hierarchy.summary(), &code_system)?,
    }

    Ok(())
}

fn print_text_summary(
    args: &BuildArgs,
    hierarchy: &BandHierarchy,
    code_system: &CodeSystem,
    verbose: bool,
) {
    let summary = hierarchy.summary();

    println!("Wrote {} ({} concepts)", args.output.display(), code_system.count);
    println!("{}", "=".repeat(60));

    println!("\nRows:");
    println!("  Kept banded rows: {}", summary.kept_banded_rows);
    println!("  Skipped malformed: {}", summary.skipped_malformed_rows);
    println!("  Skipped unplaceable: {}", summary.skipped_unplaceable_rows);
    println!(
        "  Excluded mitochondrial: {}",
        summary.excluded_mitochondrial_rows
    );
    println!("  Duplicate subbands skipped: {}", summary.duplicate_subband_rows);
    if summary.preserved_duplicate_rows > 0 {
        println!(
            "  Duplicate subbands preserved: {}",
            summary.preserved_duplicate_rows
        );
    }

    println!("\nChromosomes:");
    println!("  Included: {}", summary.chromosomes_included.join(", "));
    if !summary.chromosomes_dropped.is_empty() {
        println!(
            "  Outside karyotype (not emitted): {}",
            summary.chromosomes_dropped.join(", ")
        );
    }

    println!("\nCentromere cross-linking:");
    if summary.centromere_cross_linking {
        println!("  Level: {}", summary.centromere_levels);
        println!("  Links added: {}", summary.cross_links.len());
        if verbose {
            for link in &summary.cross_links {
                println!(
                    "    [{}] {} -> {}",
                    link.level,
                    hierarchy.ancestors(&link.from).join(" > "),
                    link.to
                );
            }
        }
    } else {
        println!("  Disabled");
    }
}

fn print_json_summary(
    args: &BuildArgs,
    summary: &BuildSummary,
    code_system: &CodeSystem,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": args.input.display().to_string(),
        "output": args.output.display().to_string(),
        "concept_count": code_system.count,
        "summary": summary,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
