//! Generate a batch of radiocalls and write them as JSON lines.
//!
//! Settings come from `RADIOCALL_*` environment variables; command line
//! arguments override them.

use anyhow::{Context, Result};
use clap::Parser;
use radiocall_cli::{
    generate_batch, Config, DifficultyDistribution, DryRunSink, JsonLinesSink, ReferenceData,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Radiocall practice content generator
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of generation attempts
    #[arg(long)]
    count: Option<usize>,

    /// Generate and count without writing any records
    #[arg(long)]
    dry_run: bool,

    /// Output file for JSON-lines records
    #[arg(long)]
    output: Option<PathBuf>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Reference data JSON (airports, instruction types, callsign templates)
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Difficulty percentages: super_easy,easy,medium,hard
    #[arg(long)]
    distribution: Option<DifficultyDistribution>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("radiocall_cli=info".parse()?)
        .add_directive("generate_radiocalls=info".parse()?);
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.json_logs)?;

    let mut config = Config::from_env().context("invalid RADIOCALL_DISTRIBUTION")?;
    if let Some(count) = args.count {
        config.count = count;
    }
    if args.dry_run {
        config.dry_run = true;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.reference.is_some() {
        config.reference = args.reference;
    }
    if let Some(distribution) = args.distribution {
        config.distribution = distribution;
    }

    let reference = match &config.reference {
        Some(path) => ReferenceData::load(path)?,
        None => ReferenceData::builtin(),
    };
    let callsign_templates = reference.callsign_templates.len();
    let generator = reference
        .into_generator()
        .context("building radiocall generator")?;
    tracing::info!(
        airports = generator.airports().len(),
        callsign_templates,
        "reference data loaded"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    tracing::info!(
        count = config.count,
        distribution = %config.distribution,
        dry_run = config.dry_run,
        "generating radiocalls"
    );

    let summary = if config.dry_run {
        let mut sink = DryRunSink::new();
        generate_batch(&generator, &config.distribution, config.count, &mut rng, &mut sink)?
    } else {
        let file = File::create(&config.output)
            .with_context(|| format!("creating {}", config.output.display()))?;
        let mut sink = JsonLinesSink::new(BufWriter::new(file));
        let summary =
            generate_batch(&generator, &config.distribution, config.count, &mut rng, &mut sink)?;
        sink.flush()?;
        tracing::info!(
            records = sink.written(),
            output = %config.output.display(),
            "records written"
        );
        summary
    };

    summary.log();
    Ok(())
}
