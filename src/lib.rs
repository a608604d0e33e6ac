//! git-vanity
//!
//! Rewrites a git commit so its hash starts with a chosen hex prefix, by
//! adding a `<key> <n>` header line and searching for `n`.
//!
//! The search itself lives in [`vanity_core`] (re-exported as [`engine`]).
//! This crate adds what the command-line tool needs around it:
//!
//! - [`git`]: reading, writing and checking out commits through the `git` binary
//! - [`validate`]: checks for the `--prefix` and `--key` arguments
//! - [`stats`]: number formatting for progress output
//!
//! # Example
//!
//! ```rust,no_run
//! use vanity::git::Git;
//! use vanity::{SearchConfig, search};
//!
//! let git = Git::new();
//! let commit = git.fetch_commit("HEAD")?;
//! let result = search(&commit, &SearchConfig::new("c0ffee", "c0ffee"))?;
//! let hash = git.write_commit(&result.record, &result.hash)?;
//! git.reset_to(&hash)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use vanity_core as engine;

pub mod git;
pub mod stats;
pub mod validate;

// Convenience re-exports
pub use engine::{SearchConfig, SearchResult, VanityError, search};
