//! challenge-fetcher - Project Euler challenges as Markdown folders

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use challenge_fetcher::{FetcherConfig, RunSummary, fetch_challenges};

#[derive(Parser)]
#[command(name = "challenge-fetcher")]
#[command(version, about = "Fetch Project Euler challenges as Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    challenge-fetcher 1              Fetch challenge 1 into ./0001
    challenge-fetcher 1 50 -o out    Fetch challenges 1 to 50 into out/
    challenge-fetcher 96 --json      Also write challenge.json")]
struct Cli {
    /// First challenge number
    #[arg(value_name = "START")]
    start: u32,

    /// Last challenge number (defaults to START)
    #[arg(value_name = "END")]
    end: Option<u32>,

    /// Directory receiving one folder per challenge
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Keep \operatorname and words glued to inline math as they are
    #[arg(long)]
    no_github_workaround: bool,

    /// Replace existing README.md files and resources
    #[arg(long)]
    overwrite: bool,

    /// Do not download images and files referenced by challenges
    #[arg(long)]
    no_resources: bool,

    /// Also write challenge.json next to each README
    #[arg(long)]
    json: bool,

    /// Challenges fetched at the same time
    #[arg(short, long, value_name = "N")]
    concurrency: Option<usize>,

    /// Attempts per page before giving up
    #[arg(short, long, value_name = "N")]
    retries: Option<u32>,
}

impl Cli {
    fn into_config(self) -> Result<FetcherConfig> {
        let mut builder = FetcherConfig::builder()
            .output_dir(self.output)
            .challenge_range(self.start, self.end.unwrap_or(self.start))
            .github_workaround(!self.no_github_workaround)
            .overwrite(self.overwrite)
            .download_resources(!self.no_resources)
            .save_json(self.json);

        if let Some(concurrency) = self.concurrency {
            builder = builder.max_concurrent_fetches(concurrency);
        }
        if let Some(retries) = self.retries {
            builder = builder.max_retries(retries);
        }

        builder.build()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("challenge_fetcher=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report(summary: &RunSummary) -> ExitCode {
    for outcome in &summary.outcomes {
        println!("{outcome}");
    }

    if summary.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match fetch_challenges(&config).await {
        Ok(summary) => report(&summary),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
