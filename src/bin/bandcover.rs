use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};

use bandcover::input::parse_channel_list;
use bandcover::output::write_filter_list;
use bandcover::{Hz, Planner, SolverConfig};

/// Plan the fewest bandpass filters that pass every channel intact.
#[derive(Parser, Debug)]
#[command(name = "bandcover", version, about)]
struct Args {
    /// Channel lists, one center frequency per line (Hz, or MHz below 1000).
    #[arg(required = true)]
    channel_files: Vec<PathBuf>,

    /// Maximum number of filters allowed.
    #[arg(short = 'n', long)]
    filter_count_max: Option<usize>,

    /// Channel width in Hz.
    #[arg(long, default_value_t = SolverConfig::DEFAULT_CHANNEL_WIDTH)]
    channel_width: Hz,

    /// Filter width in Hz.
    #[arg(long, default_value_t = SolverConfig::DEFAULT_FILTER_WIDTH)]
    filter_width: Hz,

    /// Step between candidate filter centers in Hz. Defaults to half the channel width.
    #[arg(long)]
    search_granularity: Option<Hz>,

    /// Give up searching after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Where to write the filter list.
    #[arg(short, long, default_value = "filters.txt")]
    output: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut config = SolverConfig::default()
        .with_channel_width(args.channel_width)
        .with_filter_width(args.filter_width);
    if let Some(max) = args.filter_count_max {
        config = config.with_filter_count_max(max);
    }
    if let Some(step) = args.search_granularity {
        config = config.with_search_granularity(step);
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let mut freqs = Vec::new();
    for path in &args.channel_files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Couldn't read channel list {}", path.display()))?;
        let parsed = parse_channel_list(&text)
            .with_context(|| format!("Couldn't parse channel list {}", path.display()))?;
        freqs.extend(parsed);
    }

    let plan = Planner::new(config).plan_frequencies(&freqs)?;

    if let Some(range) = plan.plot_range {
        debug!("Plot range {range}, group splits at {:?}", plan.cut_points);
    }
    for filter in plan.solution.filters() {
        info!(
            "Filter at {} Hz passes {} channel(s)",
            filter.center(),
            filter.channels().len()
        );
    }

    if !plan.report.is_valid() {
        for check in plan.report.conflicts() {
            eprintln!("Channel {} Hz {}", check.channel.center(), check.status);
        }
        for overlap in &plan.report.overlaps {
            eprintln!("Filters {} and {} overlap", overlap.first, overlap.second);
        }
        bail!("The selected filters failed the final check; no output written");
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Couldn't create {}", args.output.display()))?;
    write_filter_list(BufWriter::new(file), &plan.solution)
        .with_context(|| format!("Couldn't write {}", args.output.display()))?;
    info!(
        "Wrote {} filter(s) to {}",
        plan.solution.filter_count(),
        args.output.display()
    );
    Ok(())
}
