//! rankcheck - relevance testing for a search service
//!
//! This binary provides the command-line interface for running relevance
//! test suites against a configured search backend.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use rankcheck_client::{HttpSearchBackend, SearchBackend};
use rankcheck_core::config::Config;
use rankcheck_runner::{fixtures, ContentDomain, RunOptions, Runner};

#[derive(Parser)]
#[command(name = "rankcheck")]
#[command(about = "Relevance testing for a search service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true, default_value = "rankcheck.toml")]
    config: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run relevance tests
    Test {
        /// Run only cases whose ID contains this substring (case-insensitive)
        #[arg(long = "id", short = 'g', alias = "group", value_name = "SUBSTR")]
        id_filter: Option<String>,

        /// Run only this content domain's suite
        #[arg(long, short = 't', value_name = "DOMAIN")]
        content_type: Option<ContentDomain>,
    },
    /// List all tests that can be run
    List {
        /// List only this content domain's suite
        #[arg(long, short = 't', value_name = "DOMAIN")]
        content_type: Option<ContentDomain>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Test {
            id_filter,
            content_type,
        } => run_tests(&cli.config, id_filter, content_type).await,
        Commands::List { content_type } => list_tests(content_type),
    }
}

/// Initialize logging system
fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .init();
}

/// Filter directives covering the binary and every workspace library
fn log_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    ["rankcheck", "rankcheck_core", "rankcheck_client", "rankcheck_runner"]
        .map(|target| format!("{target}={level}"))
        .join(",")
}

/// Run the selected relevance suites and print the report
async fn run_tests(
    config_path: &Path,
    id_filter: Option<String>,
    content_type: Option<ContentDomain>,
) -> Result<ExitCode> {
    let config = Config::from_file(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let backend = HttpSearchBackend::new(&config.backend)
        .context("failed to create search backend")?;
    backend
        .ping()
        .await
        .with_context(|| format!("search backend at {} is not reachable", config.backend.url))?;
    info!("connected to search backend at {}", config.backend.url);

    let runner = Runner::new(Arc::new(backend), config);
    let options = RunOptions {
        domains: content_type.into_iter().collect(),
        id_filter,
    };

    let report = runner.run(&options).await?;
    if report.is_empty() {
        println!("No test cases matched the given filters.");
        return Ok(ExitCode::FAILURE);
    }

    print!("{}", report.render());

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// List case IDs per domain without touching the network
fn list_tests(content_type: Option<ContentDomain>) -> Result<ExitCode> {
    let domains = match content_type {
        Some(domain) => vec![domain],
        None => ContentDomain::all().to_vec(),
    };

    for domain in domains {
        let cases = fixtures::suite(domain)?;
        println!("{domain} ({} cases):", cases.len());
        for case in &cases {
            println!("  {}", case.id());
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_test_filters() {
        let cli = Cli::parse_from([
            "rankcheck",
            "test",
            "--id",
            "piggle",
            "--content-type",
            "works",
        ]);
        match cli.command {
            Commands::Test {
                id_filter,
                content_type,
            } => {
                assert_eq!(id_filter.as_deref(), Some("piggle"));
                assert_eq!(content_type, Some(ContentDomain::Works));
            }
            Commands::List { .. } => panic!("expected the test subcommand"),
        }
    }

    #[test]
    fn group_alias_matches_id_flag() {
        let cli = Cli::parse_from(["rankcheck", "test", "--group", "recall"]);
        match cli.command {
            Commands::Test { id_filter, .. } => {
                assert_eq!(id_filter.as_deref(), Some("recall"));
            }
            Commands::List { .. } => panic!("expected the test subcommand"),
        }
    }

    #[test]
    fn log_filter_covers_the_library_crates() {
        let filter = log_filter(true);
        for directive in [
            "rankcheck=debug",
            "rankcheck_core=debug",
            "rankcheck_client=debug",
            "rankcheck_runner=debug",
        ] {
            assert!(filter.contains(directive), "missing {directive} in {filter}");
        }
        assert!(log_filter(false).contains("rankcheck_runner=info"));
    }

    #[test]
    fn list_accepts_domain_filter() {
        let cli = Cli::parse_from(["rankcheck", "list", "--content-type", "images"]);
        match cli.command {
            Commands::List { content_type } => {
                assert_eq!(content_type, Some(ContentDomain::Images));
            }
            Commands::Test { .. } => panic!("expected the list subcommand"),
        }
    }
}
