//! Main entry point for the standings binary

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tokio::signal;
use tokio::sync::mpsc;

use shared::{logging, process_debug, PoolLabel, ProcessId};
use standings::policy::strategies::alphabetical::DEFAULT_POOL_SIZE;
use standings::services::{load_roster, CsvResultSource, JsonSnapshotWriter, PollingConfig, PollingTrigger};
use standings::{
    AlphabeticalSplit, CountAll, PipelineConfig, PoolAssignment, ScorelessMatchPolicy, SkipScoreless,
    StandingsError, StandingsResult, StandingsRunner,
};

/// Computes tournament standings and playoff seeding from a results file
#[derive(Parser)]
#[command(name = "standings")]
#[command(about = "Pool-play standings, playoff seeding and schedule snapshots", long_about = None)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute one snapshot and exit
    Generate(PipelineArgs),
    /// Recompute the snapshot whenever the results file changes
    Watch {
        #[command(flatten)]
        pipeline: PipelineArgs,
        #[command(flatten)]
        polling: PollingArgs,
    },
}

#[derive(clap::Args)]
pub struct PipelineArgs {
    /// Results CSV (team A, score A, team B, score B)
    #[arg(long, env = "RESULTS_PATH", default_value = "Results.csv")]
    pub results: PathBuf,

    /// Snapshot JSON output path
    #[arg(long, env = "SNAPSHOT_PATH", default_value = "tournament_data.json")]
    pub output: PathBuf,

    /// How teams are placed into pools
    #[arg(long, value_enum, default_value_t = PoolPolicy::Alphabetical)]
    pub pool_policy: PoolPolicy,

    /// Team,Pool roster CSV (required with --pool-policy roster)
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Pool labels for the alphabetical split
    #[arg(long, value_delimiter = ',', default_value = "A,B,C")]
    pub pool_labels: Vec<String>,

    /// Teams per pool for the alphabetical split
    #[arg(long, default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: usize,

    /// How 0-0 results are treated
    #[arg(long, value_enum, default_value_t = Scoreless::Count)]
    pub scoreless: Scoreless,

    /// Leave the championship/plate-shield/bowl tiers out of the snapshot
    #[arg(long)]
    pub no_rankings: bool,
}

#[derive(clap::Args)]
pub struct PollingArgs {
    /// Delay between checks of the results file
    #[arg(long, default_value = "1000")]
    pub poll_interval_ms: u64,

    /// Delay between checks while the results file is missing
    #[arg(long, default_value = "5000")]
    pub absent_backoff_ms: u64,

    /// Delay after a failed check or run
    #[arg(long, default_value = "5000")]
    pub error_backoff_ms: u64,
}

impl From<&PollingArgs> for PollingConfig {
    fn from(args: &PollingArgs) -> Self {
        Self {
            poll_interval: Duration::from_millis(args.poll_interval_ms),
            absent_backoff: Duration::from_millis(args.absent_backoff_ms),
            error_backoff: Duration::from_millis(args.error_backoff_ms),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PoolPolicy {
    /// Sort by name and fill pools in label order
    Alphabetical,
    /// Look each team up in a roster file
    Roster,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Scoreless {
    /// 0-0 counts as a draw
    Count,
    /// 0-0 is treated as not yet played
    Skip,
}

fn build_pipeline(args: &PipelineArgs) -> StandingsResult<PipelineConfig> {
    let pool_assignment: Box<dyn PoolAssignment> = match args.pool_policy {
        PoolPolicy::Alphabetical => {
            let labels = args
                .pool_labels
                .iter()
                .map(|label| label.parse::<PoolLabel>())
                .collect::<Result<Vec<_>, _>>()?;
            Box::new(AlphabeticalSplit::new(labels, args.pool_size)?)
        }
        PoolPolicy::Roster => {
            let path = args
                .roster
                .as_ref()
                .ok_or_else(|| StandingsError::config("--roster is required with --pool-policy roster"))?;
            Box::new(load_roster(path)?)
        }
    };

    let scoreless: Box<dyn ScorelessMatchPolicy> = match args.scoreless {
        Scoreless::Count => Box::new(CountAll),
        Scoreless::Skip => Box::new(SkipScoreless),
    };

    let config = PipelineConfig::new(pool_assignment, scoreless).with_rankings(!args.no_rankings);
    logging::log_progress(
        ProcessId::current(),
        "Pipeline",
        &format!(
            "pools={}, scoreless={}, rankings={}",
            config.pool_assignment.name(),
            config.scoreless.name(),
            config.include_rankings
        ),
    );
    process_debug!(ProcessId::current(), "Results: {}, output: {}", args.results.display(), args.output.display());
    Ok(config)
}

fn build_runner(args: &PipelineArgs) -> StandingsResult<StandingsRunner<CsvResultSource, JsonSnapshotWriter>> {
    Ok(StandingsRunner::new(
        CsvResultSource::new(&args.results),
        JsonSnapshotWriter::new(&args.output),
        build_pipeline(args)?,
    ))
}

#[tokio::main]
async fn main() -> StandingsResult<()> {
    let _ = dotenv::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize process ID singleton before any logging
    match args.command {
        Command::Generate(_) => ProcessId::init_generate(),
        Command::Watch { .. } => ProcessId::init_watch(),
    };
    logging::init_tracing_with_level(Some(&args.log_level));

    match &args.command {
        Command::Generate(pipeline) => {
            logging::log_startup(ProcessId::current(), "one-shot snapshot generation");
            let runner = build_runner(pipeline)?;
            let output = match runner.run_once().await {
                Ok(output) => output,
                Err(e) => {
                    logging::log_error(ProcessId::current(), "Snapshot generation", &e);
                    return Err(e);
                }
            };
            // The unseeded snapshot is on disk; the exit status still reports the precondition
            if let Some(e) = output.seeding_error {
                return Err(e.into());
            }
            logging::log_success(ProcessId::current(), "Snapshot generated");
        }
        Command::Watch { pipeline, polling } => {
            let runner = build_runner(pipeline)?;
            let trigger = PollingTrigger::new(&pipeline.results, PollingConfig::from(polling));

            // Set up graceful shutdown
            let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
            tokio::spawn(async move {
                match signal::ctrl_c().await {
                    Ok(()) => {
                        logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal");
                        let _ = shutdown_tx.send(()).await;
                    }
                    Err(err) => {
                        logging::log_error(ProcessId::current(), "Signal handling", &err);
                    }
                }
            });

            runner.watch(&trigger, shutdown_rx).await?;
            logging::log_success(ProcessId::current(), "Watcher stopped gracefully");
        }
    }

    Ok(())
}
