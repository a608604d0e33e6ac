//! Parallel search coordinator
//!
//! Worker `i` of `W` tries `start + i`, `start + i + W`, `start + i + 2W`, …
//! so the residue classes cover every `n >= start` exactly once.
//!
//! The first worker to match publishes its `n` as a stop bound. Every other
//! worker keeps going until its next `n` would exceed that bound, which
//! means all `n` up to the bound get tried even when workers progress at
//! different speeds. The coordinator then waits for every worker and keeps
//! the smallest reported `n`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use crossbeam_channel::{Sender, bounded};
use tracing::debug;

use crate::digest::TrialHasher;
use crate::error::{Result, VanityError};
use crate::params::DIGEST_SIZE;
use crate::prefix::HexPrefix;
use crate::record::{self, Split};

/// Stop bound value while no worker has matched yet
const RUNNING: u64 = u64::MAX;

/// Search parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Desired hex prefix of the commit hash
    pub prefix: String,
    /// Header key of the injected line
    pub key: String,
    /// First iteration to try
    pub start: u64,
    /// Number of worker threads (default and upper bound: number of CPU cores)
    pub workers: Option<usize>,
}

impl SearchConfig {
    pub fn new(prefix: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            key: key.into(),
            start: 0,
            workers: None,
        }
    }

    pub fn with_start(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Worker threads the search will spawn: at least one, at most one per
    /// logical CPU.
    pub fn worker_count(&self) -> usize {
        let cpus = num_cpus::get().max(1);
        self.workers.unwrap_or(cpus).clamp(1, cpus)
    }
}

/// The winning trial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// SHA-1 of the new commit object
    pub hash: [u8; DIGEST_SIZE],
    /// Winning iteration
    pub n: u64,
    /// New commit object, in `git cat-file commit` format
    pub record: Vec<u8>,
}

impl SearchResult {
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }
}

/// A match reported by one worker
struct Found {
    n: u64,
    hash: [u8; DIGEST_SIZE],
}

/// Search for the smallest `n >= config.start` whose commit hash starts
/// with `config.prefix`.
///
/// A trailing header line from a previous run with the same key is replaced.
/// Blocks until a match is found.
pub fn search(record: &[u8], config: &SearchConfig) -> Result<SearchResult> {
    let prefix = HexPrefix::parse(&config.prefix)?;
    let split = record::split(record)?.without_stale_header(&config.key);
    let workers = config.worker_count();

    debug!(
        workers,
        start = config.start,
        prefix = %config.prefix,
        "starting search"
    );

    let stop_after = AtomicU64::new(RUNNING);
    // Each worker sends at most once, so sends never block.
    let (sender, receiver) = bounded::<Found>(workers);

    let best = thread::scope(|scope| {
        for offset in 0..workers as u64 {
            let Some(first) = config.start.checked_add(offset) else {
                break;
            };
            let sender = sender.clone();
            let prefix = &prefix;
            let stop_after = &stop_after;
            let key = config.key.as_str();

            scope.spawn(move || {
                work(split, key, prefix, first, workers as u64, stop_after, sender)
            });
        }
        drop(sender);

        let first = receiver.recv().ok()?;
        stop_after.store(first.n, Ordering::SeqCst);
        debug!(n = first.n, "first match reported, waiting for workers");

        // Iteration ends once every worker has dropped its sender.
        Some(
            receiver
                .iter()
                .fold(first, |best, found| if found.n < best.n { found } else { best }),
        )
    });

    let Found { n, hash } = best.ok_or(VanityError::Exhausted {
        start: config.start,
    })?;
    debug!(n, hash = %hex::encode(hash), "search finished");

    Ok(SearchResult {
        hash,
        n,
        record: record::assemble(split.head, &config.key, n, split.tail),
    })
}

/// Worker loop over one residue class.
fn work(
    split: Split<'_>,
    key: &str,
    prefix: &HexPrefix,
    first: u64,
    step: u64,
    stop_after: &AtomicU64,
    found: Sender<Found>,
) {
    let mut hasher = TrialHasher::new(split, key);
    let mut n = first;

    loop {
        let hash = hasher.digest(n);

        if prefix.matches(&hash) {
            // The receiver lives until every worker has returned.
            let _ = found.send(Found { n, hash });
            return;
        }

        let Some(next) = n.checked_add(step) else {
            return;
        };

        // Anything past the first reported match is already beaten.
        if next > stop_after.load(Ordering::Relaxed) {
            return;
        }

        n = next;
    }
}

/// Sequential scan from `start`, for checking the parallel search.
///
/// Tries at most `limit` iterations and returns the first match.
#[cfg(test)]
pub(crate) fn scan(record: &[u8], prefix: &str, key: &str, start: u64, limit: u64) -> Result<Option<u64>> {
    let prefix = HexPrefix::parse(prefix)?;
    let split = record::split(record)?.without_stale_header(key);
    let mut hasher = TrialHasher::new(split, key);

    let end = start.saturating_add(limit);
    Ok((start..end).find(|&n| prefix.matches(&hasher.digest(n))))
}
