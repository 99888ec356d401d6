//! CLI for the pre-commit auditor.
//!
//! Scans every repository of a GitHub organization for a pre-commit
//! configuration and keeps a tracking issue per repository in sync.

use clap::builder::FalseyValueParser;
use clap::Parser;
use pre_commit_auditor::config::{
    DEFAULT_API_URL, DEFAULT_CLOSE_COMMENT_TEMPLATE, DEFAULT_CONFIG_FILE, DEFAULT_ISSUE_TITLE,
    DEFAULT_OPEN_ISSUE_TEMPLATE, DEFAULT_TEMPLATES_DIR,
};
use pre_commit_auditor::{AuditConfig, ProcessingResult, RunSummary, Runner, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pre-commit Auditor - Check an organization's repositories for pre-commit configurations.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub organization to audit.
    #[arg(long, env = "ORG")]
    org: String,

    /// GitHub Personal Access Token.
    #[arg(long, env = "PAT", hide_env_values = true)]
    token: String,

    /// GitHub API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Title of the tracking issue.
    #[arg(long, env = "MISSING_ISSUE_TITLE", default_value = DEFAULT_ISSUE_TITLE)]
    issue_title: String,

    /// Path of the pre-commit configuration inside each repository.
    #[arg(long, env = "PRE_COMMIT_CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
    config_file: String,

    /// Directory containing the issue templates.
    #[arg(long, env = "TEMPLATES_DIR", default_value = DEFAULT_TEMPLATES_DIR)]
    templates_dir: PathBuf,

    /// Template for the body of new tracking issues.
    #[arg(long, env = "OPEN_ISSUE_TEMPLATE", default_value = DEFAULT_OPEN_ISSUE_TEMPLATE)]
    open_issue_template: String,

    /// Template for the comment posted when closing a tracking issue.
    #[arg(long, env = "CLOSE_COMMENT_TEMPLATE", default_value = DEFAULT_CLOSE_COMMENT_TEMPLATE)]
    close_comment_template: String,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log intended changes without creating or closing issues.
    #[arg(long, env = "DRY_RUN", value_parser = FalseyValueParser::new())]
    dry_run: bool,

    /// Delay between GitHub API calls, in milliseconds.
    #[arg(long, env = "API_DELAY_MS", default_value_t = 1000)]
    delay_ms: u64,

    /// Audit archived repositories too.
    #[arg(long, env = "INCLUDE_ARCHIVED", value_parser = FalseyValueParser::new())]
    include_archived: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(&args.log_level);

    // Run audit; per-repository failures are already in the summary
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG`, falling back to `default_level`
fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

/// Builds the immutable audit configuration from parsed arguments.
fn build_config(args: Args) -> AuditConfig {
    AuditConfig::new(args.org, args.token)
        .with_api_url(args.api_url)
        .with_issue_title(args.issue_title)
        .with_config_file(args.config_file)
        .with_templates_dir(args.templates_dir)
        .with_open_issue_template(args.open_issue_template)
        .with_close_comment_template(args.close_comment_template)
        .with_dry_run(args.dry_run)
        .with_delay(Duration::from_millis(args.delay_ms))
        .with_include_archived(args.include_archived)
}

/// Main execution logic.
///
/// # Arguments
///
/// * `args` - Parsed command line arguments
///
/// # Returns
///
/// The run summary, or the error that aborted the whole run.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let runner = Runner::new(build_config(args))?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!(
        "  Repositories discovered: {}",
        summary.repositories_discovered
    );
    println!("  Repositories skipped: {}", summary.repositories_skipped);
    println!("  Compliant: {}", summary.compliant);
    println!("  Missing: {}", summary.missing);
    println!("  Invalid: {}", summary.invalid);

    let verb = if summary.dry_run { "to create" } else { "created" };
    println!("  Issues {verb}: {}", summary.issues_created);
    let verb = if summary.dry_run { "to close" } else { "closed" };
    println!("  Issues {verb}: {}", summary.issues_closed);
    println!("  Unchanged: {}", summary.issues_unchanged);
    println!("  Failed: {}", summary.failed);

    for result in &summary.results {
        if let ProcessingResult::Failed { repository, error } = result {
            println!("    {repository}: {error}");
        }
    }
}
