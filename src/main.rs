use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use kinema_io::{ClipReader, QueryReader, ReportWriter};
use kinema_match::{match_batch, MatchReport};
use kinema_metric::{
    dynamic_time_warp, euclidean_sum, euclidean_variance_normalized, MetricKind, Trajectory,
};

#[derive(Parser)]
#[command(name = "kinema")]
#[command(about = "Trajectory scoring and nearest-pose matching for motion clips")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Number of threads for parallel computation (defaults to all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Match predicted query trajectories against a motion clip's poses
    Match {
        /// Path to the query-set JSON file (array of arrays of numbers)
        #[arg(long)]
        queries: PathBuf,

        /// Path to the motion-clip JSON file
        #[arg(long)]
        clip: PathBuf,

        /// Distance metric: "euclid", "euclid-plus", or "dtw"
        #[arg(long, default_value = "euclid-plus")]
        metric: String,

        /// Output directory for the report file
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Score one trajectory pair under all three metrics
    Score {
        /// First trajectory as comma-separated samples
        #[arg(long)]
        a: String,

        /// Second trajectory as comma-separated samples
        #[arg(long)]
        b: String,
    },
}

fn parse_metric(name: &str) -> Result<MetricKind> {
    MetricKind::from_name(name).with_context(|| {
        format!("unknown metric \"{name}\" (expected euclid, euclid-plus, or dtw)")
    })
}

fn parse_trajectory(raw: &str) -> Result<Trajectory> {
    let samples = raw
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid sample \"{}\"", s.trim()))
        })
        .collect::<Result<Vec<f64>>>()?;
    Ok(Trajectory::new(samples)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Configure Rayon thread pool
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
        info!(threads, "thread pool configured");
    }

    match cli.command {
        Command::Match {
            queries,
            clip,
            metric,
            output_dir,
        } => {
            let metric = parse_metric(&metric)?;

            let candidates = ClipReader::new(&clip)
                .read()
                .context("failed to read clip file")?;
            let query_set = QueryReader::new(&queries)
                .read()
                .context("failed to read query file")?;

            let matches =
                match_batch(&query_set, &candidates, metric).context("matching failed")?;
            let report = MatchReport::new(candidates.name().clone(), metric, matches);

            let writer = ReportWriter::new(&output_dir)?;
            let path = writer.write_report(&report)?;

            info!(
                clip = %report.clip,
                %metric,
                n_queries = report.len(),
                path = %path.display(),
                "matching complete"
            );
        }

        Command::Score { a, b } => {
            let a = parse_trajectory(&a).context("invalid trajectory for --a")?;
            let b = parse_trajectory(&b).context("invalid trajectory for --b")?;

            let euclid = euclidean_sum(a.as_view(), b.as_view())?;
            let plus = euclidean_variance_normalized(a.as_view(), b.as_view())?;
            let dtw = dynamic_time_warp(a.as_view(), b.as_view());

            println!("euclid      = {euclid}");
            println!("euclid-plus = {plus}");
            println!("dtw         = {dtw}");
        }
    }

    Ok(())
}
