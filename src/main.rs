//! cascade-merge binary
//!
//! Runs as a GitHub Actions step: inputs arrive as `INPUT_*` variables and the
//! event as `GITHUB_*` variables. Every value can also be passed as a flag.
//! `action.yml` at the crate root builds this binary and exports the inputs;
//! a workflow that runs it directly must export `INPUT_TOKEN`,
//! `INPUT_BRANCHES` and optionally `INPUT_DRY_RUN` itself.

mod cli;

use cascade_merge::config::DEFAULT_API_URL;
use clap::Parser;
use cli::{CascadeArgs, report_failure, run_cascade};
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Cascade merges along an ordered chain of branches
#[derive(Parser, Debug)]
#[command(name = "cascade-merge", version, about)]
struct Cli {
    /// Token for the repository host
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Newline-separated, ordered list of branches
    #[arg(long, env = "INPUT_BRANCHES")]
    branches: Option<String>,

    /// Name of the triggering event
    #[arg(long, env = "GITHUB_EVENT_NAME", default_value = "")]
    event_name: String,

    /// Ref that received the push (e.g. refs/heads/dev)
    #[arg(long = "ref", env = "GITHUB_REF", default_value = "")]
    git_ref: String,

    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Base URL of the REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Print the merge that would happen without performing it
    #[arg(long, env = "INPUT_DRY_RUN", value_parser = clap::builder::FalseyValueParser::new())]
    dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "cascade_merge=info",
        _ => "cascade_merge=debug",
    };

    // stdout carries diagnostic lines and workflow commands; logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let args = CascadeArgs {
        token: cli.token,
        branches: cli.branches,
        event_name: cli.event_name,
        git_ref: cli.git_ref,
        repository: cli.repository,
        api_url: cli.api_url,
        dry_run: cli.dry_run,
        mask_secrets: std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true"),
    };

    match run_cascade(args).await {
        Ok(report) => match report.failure_message() {
            Some(message) => {
                report_failure(&message);
                ExitCode::FAILURE
            }
            None => ExitCode::SUCCESS,
        },
        Err(e) => {
            report_failure(&e.failure_message());
            ExitCode::FAILURE
        }
    }
}
