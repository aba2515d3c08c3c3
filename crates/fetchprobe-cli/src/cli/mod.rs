//! CLI for the fetchprobe download debugger.

use anyhow::Result;
use clap::Parser;
use fetchprobe_core::config;
use fetchprobe_core::fetch::FetchOptions;
use fetchprobe_core::profiles::DEFAULT_URL;
use fetchprobe_core::report;
use fetchprobe_core::runner;
use fetchprobe_core::summary;
use std::path::PathBuf;
use std::time::Duration;

/// Probe one URL with several header configurations to see which one the
/// server accepts. Runs every attempt regardless of earlier failures and
/// reports each outcome on stdout.
#[derive(Debug, Parser)]
#[command(name = "fetchprobe")]
#[command(about = "fetchprobe: header-set probing for refused downloads", long_about = None)]
pub struct Cli {
    /// Target URL (defaults to the built-in probe target).
    pub url: Option<String>,

    /// Directory for output files (defaults to config, then the current directory).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Whole-request timeout per attempt, in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Replay request headers from a browser HAR capture as an extra attempt.
    #[arg(long, value_name = "FILE")]
    pub har: Option<PathBuf>,

    /// Include the Cookie header from the chosen HAR entry.
    #[arg(long)]
    pub har_cookies: bool,
}

pub fn run_from_args() -> Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let url = cli.url.as_deref().unwrap_or(DEFAULT_URL);
    let output_dir = cli
        .output_dir
        .or(cfg.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut opts = FetchOptions::default();
    opts.timeout = Duration::from_secs(cli.timeout_secs.unwrap_or(cfg.timeout_secs));
    if let Some(sz) = cfg.buffer_bytes {
        opts.buffer_bytes = sz;
    }

    let har = cli.har.as_deref().map(|p| (p, cli.har_cookies));
    let attempts = runner::plan_attempts(url, har)?;

    println!("Testing download of: {}", url);
    println!();

    let mut destinations = Vec::new();
    for (i, attempt) in attempts.iter().enumerate() {
        println!("Method {}: {}", i + 1, attempt.label);
        let outcome = runner::run_attempt(url, attempt, &output_dir, &opts);
        match &outcome.result {
            Ok(rep) => println!("{}", report::render_success(rep, &outcome.destination)),
            Err(err) => println!("{}", report::render_failure(err)),
        }
        println!();
        destinations.push(outcome.destination);
    }

    println!("Probe complete. Output files:");
    for s in summary::summarize(&destinations) {
        println!("{}", summary::render_line(&s));
    }
    Ok(())
}
