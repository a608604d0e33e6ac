//! git-vanity CLI
//!
//! Rewrites a commit so its hash starts with a chosen hex prefix.
//!
//! ```text
//! git-vanity --prefix c0ffee            # search only, log the result
//! git-vanity --prefix c0ffee --write    # also store the new commit object
//! git-vanity --prefix c0ffee --reset    # store it and move the branch to it
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vanity::git::Git;
use vanity::stats::{format_number, rate};
use vanity::validate::{is_valid_key, is_valid_prefix};
use vanity::{SearchConfig, search};

#[derive(Parser)]
#[command(name = "git-vanity")]
#[command(version)]
#[command(about = "Rewrite a git commit so its hash starts with a chosen hex prefix")]
struct Cli {
    /// Starting point
    #[arg(long, default_value = "HEAD")]
    commit: String,

    /// Desired hash prefix (lowercase hex, up to 40 digits)
    #[arg(long, value_parser = parse_prefix)]
    prefix: String,

    /// Key used in the commit header (defaults to the prefix)
    #[arg(long, value_parser = parse_key)]
    key: Option<String>,

    /// Iteration to start from
    #[arg(long, default_value = "0")]
    start: u64,

    /// Number of threads to use (default and maximum: number of CPU cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Write the new commit to the repository (hash-object -w)
    #[arg(long)]
    write: bool,

    /// Reset the current branch to the new commit (implies --write)
    #[arg(long)]
    reset: bool,

    /// Print the commit hash found to stdout
    #[arg(long)]
    print: bool,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Run git in this directory instead of the current one
    #[arg(short = 'C', long)]
    repo: Option<PathBuf>,
}

fn parse_prefix(s: &str) -> Result<String, String> {
    if is_valid_prefix(s) {
        Ok(s.to_string())
    } else {
        Err("must be 1 to 40 lowercase hex digits".to_string())
    }
}

fn parse_key(s: &str) -> Result<String, String> {
    if is_valid_key(s) {
        Ok(s.to_string())
    } else {
        Err("must be alphanumeric and not a commit header like tree or author".to_string())
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr at `info` unless `RUST_LOG` says otherwise.
fn init_logging(quiet: bool) {
    if quiet {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let git = cli.repo.map(Git::in_dir).unwrap_or_default();
    let key = cli.key.unwrap_or_else(|| cli.prefix.clone());

    let commit = git
        .fetch_commit(&cli.commit)
        .with_context(|| format!("reading commit {}", cli.commit))?;

    info!(
        "Using commit at {} ({})",
        cli.commit,
        git.rev_parse_short(&cli.commit)?
    );
    info!("Finding hash prefixed {:?}", cli.prefix);
    info!("Commit size {} bytes", format_number(commit.len() as u64));

    if cli.start > 0 {
        info!("Starting at iteration {}", cli.start);
    }

    let mut config = SearchConfig::new(cli.prefix, key).with_start(cli.start);
    if let Some(threads) = cli.threads {
        config = config.with_workers(threads);
    }

    info!("Using {} concurrent workers", config.worker_count());

    let start = Instant::now();
    let result = search(&commit, &config).context("searching for a matching commit")?;
    let elapsed = start.elapsed();

    let tested = (result.n - config.start).saturating_add(1);
    info!(
        "Tested {} commits at {} commits per second",
        format_number(tested),
        format_number(rate(tested, elapsed))
    );
    info!(
        "Found {} (iteration {}, {:.3?})",
        result.hash_hex(),
        result.n,
        elapsed
    );

    if cli.print {
        println!("{}", result.hash_hex());
    }

    if cli.write || cli.reset {
        let written = git
            .write_commit(&result.record, &result.hash)
            .context("writing commit object")?;
        info!("Commit object written");

        if cli.reset {
            git.reset_to(&written).context("resetting to new commit")?;
            info!("HEAD is now at {}", written);
        }
    }

    Ok(())
}
