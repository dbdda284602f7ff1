use clap::Parser;
use tracing_subscriber::EnvFilter;

use cytoband_hierarchy::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Library logs go to stderr; stdout carries only the summary
    let filter = if cli.verbose {
        EnvFilter::new("cytoband_hierarchy=debug,info")
    } else {
        EnvFilter::new("cytoband_hierarchy=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Build(args) => {
            cli::build::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
