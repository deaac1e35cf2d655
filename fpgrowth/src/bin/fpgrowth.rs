use anyhow::{Context, Result};
use clap::Parser;
use fpgrowth::{fp_growth_algorithm, io, MiningConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Mine frequent itemsets with FP-Growth")]
struct Args {
    /// Minimum support as a fraction of all transactions, in (0, 1]
    min_support: f64,

    /// Transaction file, one comma-separated transaction per line
    input: PathBuf,

    /// Destination of the `items:support` lines
    output: PathBuf,

    /// Mine top-level items in parallel
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = MiningConfig::new(args.min_support).with_parallel(args.parallel);
    config.validate().context("invalid arguments")?;

    let transactions = io::read_transactions(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let result = fp_growth_algorithm(&transactions, &config)?;
    io::write_itemsets(&args.output, &result)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        itemsets = result.len(),
        output = %args.output.display(),
        "done"
    );
    Ok(())
}
