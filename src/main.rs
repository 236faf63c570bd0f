use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeMap;
use std::path::Path;
use sweep_core::{init_logging, MetricsHistory, RunConfig};
use sweep_lib::model::state::Reporter;
use sweep_lib::SimulationRun;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path; defaults apply when it does not exist
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of cleaners
    #[arg(short = 'n', long)]
    cleaners: Option<usize>,

    #[arg(long)]
    width: Option<u16>,

    #[arg(long)]
    height: Option<u16>,

    /// Percentage of cells that start stained
    #[arg(short, long)]
    density: Option<u8>,

    #[arg(short = 't', long)]
    max_ticks: Option<u64>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Clip neighborhoods at the edges instead of wrapping around
    #[arg(long)]
    bounded: bool,

    /// Output format for the metric history
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Only output these reporters (comma separated, e.g. totalSteps,meanOverlaps)
    #[arg(short, long, value_delimiter = ',')]
    reporter: Vec<Reporter>,

    /// Also print the final snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Format {
    Csv,
    Json,
}

fn load_config(args: &Args) -> Result<RunConfig> {
    let mut config = if Path::new(&args.config).exists() {
        RunConfig::load(&args.config)
            .with_context(|| format!("loading config from {}", args.config))?
    } else {
        RunConfig::default()
    };
    if let Some(n) = args.cleaners {
        config.population.cleaners = n;
    }
    if let Some(w) = args.width {
        config.grid.width = w;
    }
    if let Some(h) = args.height {
        config.grid.height = h;
    }
    if let Some(d) = args.density {
        config.population.stain_density = d;
    }
    if let Some(t) = args.max_ticks {
        config.schedule.max_ticks = t;
    }
    if args.seed.is_some() {
        config.schedule.seed = args.seed;
    }
    if args.bounded {
        config.grid.torus = false;
    }
    Ok(config)
}

fn print_history(history: &MetricsHistory, format: Format, reporters: &[Reporter]) -> Result<()> {
    match format {
        Format::Csv if reporters.is_empty() => print!("{}", history.to_csv()),
        Format::Csv => print!("{}", history.to_csv_columns(reporters)),
        Format::Json if reporters.is_empty() => {
            println!("{}", serde_json::to_string_pretty(history)?);
        }
        Format::Json => {
            let series: BTreeMap<&str, Vec<f64>> = reporters
                .iter()
                .map(|&r| (r.name(), history.series(r)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let config = load_config(&args)?;
    let mut run = SimulationRun::new(config).context("invalid run configuration")?;
    run.run_to_completion();

    print_history(run.metrics_history(), args.format, &args.reporter)?;
    if args.snapshot {
        println!("{}", serde_json::to_string_pretty(&run.snapshot())?);
    }

    let summary = run.summary();
    tracing::info!(
        run_id = %summary.run_id,
        ticks = summary.ticks,
        records = summary.records,
        termination = ?summary.termination,
        "Headless run finished"
    );
    Ok(())
}
