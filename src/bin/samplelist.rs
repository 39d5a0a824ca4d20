use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use samplelist::export::{self, DEFAULT_EXPORT_FILE};
use samplelist::{ReplicateMap, RunOrder, SequenceBuilder};

/// Samplelist CLI
#[derive(Parser)]
#[command(name = "samplelist")]
#[command(version)]
#[command(about = "Generate a sample list with vial locations from given sample names", long_about = None)]
struct Cli {
    /// Text file with one sample name per line (e.g. "sample_names.txt")
    #[arg(long)]
    location: PathBuf,

    /// Replicate injections per sample, e.g. '{"sample1": 2, "sample2": 3}' or "sample1=2,sample2=3"
    #[arg(long, alias = "target_dict")]
    target_dict: Option<String>,

    /// Tray location of the first sample
    #[arg(long, default_value_t = samplelist::DEFAULT_START, allow_negative_numbers = true)]
    start: i64,

    /// Shuffle the run order
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    randomize: bool,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Export the resulting sample list as CSV
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    export: bool,

    /// CSV output path
    #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
    output: PathBuf,

    /// More log output on stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    // Read by Polars' pretty-printer (fmt feature). Set while the process is
    // still single-threaded, before polars spins up its pool.
    std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
    std::env::set_var("POLARS_FMT_MAX_COLS", "100000");
    std::env::set_var("POLARS_FMT_MAX_ROWS", "1000000");
    std::env::set_var("POLARS_FMT_STR_LEN", "100000");
    std::env::set_var("POLARS_TABLE_WIDTH", "65535");

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let replicates = match cli.target_dict.as_deref() {
        Some(text) => ReplicateMap::parse_optional(text).context("parsing --target-dict")?,
        None => None,
    };

    let builder = SequenceBuilder::from_path(&cli.location, cli.start)
        .with_context(|| format!("loading sample names from {}", cli.location.display()))?;
    let order = RunOrder::from_flags(cli.randomize, cli.seed);
    let injection_sequence = builder.build(replicates.as_ref(), &order);

    if cli.export {
        export::write_csv(&injection_sequence, &cli.output)
            .with_context(|| format!("writing {}", cli.output.display()))?;
        println!("The sample list was exported to {}", cli.output.display());
    }

    println!("{}", export::render_table(&injection_sequence)?);
    Ok(())
}
