//! # Vanity commit search
//!
//! Finds a header line `<key> <n>` which, appended to a git commit's
//! headers, gives the commit a SHA-1 starting with a chosen hex prefix.
//!
//! ## How it works
//!
//! - The commit is split at its first blank line into head and tail
//! - A stale `<key> …` line left by a previous run is dropped from the head
//! - Workers try `n = start, start + 1, …` in interleaved residue classes,
//!   hashing `head + "\n" + key + " " + n + tail` as a git commit object
//! - The SHA-1 state over the constant part of the object is cached per
//!   decimal length of `n`, so each trial only hashes `n` and the message
//! - The smallest matching `n` wins, even if another worker matched first
//!
//! Prefixes may have an odd number of hex digits; the last one is matched
//! as a single nibble.
//!
//! ## Example
//!
//! ```rust
//! use vanity_core::{SearchConfig, search};
//!
//! let commit = b"tree 0000000000000000000000000000000000000000\n\
//! author A <a@example.com> 1577872800 +0000\n\
//! committer C <c@example.com> 1577876400 +0100\n\
//! \n\
//! Message\n";
//!
//! let config = SearchConfig::new("0", "foo").with_workers(2);
//! let result = search(commit, &config).unwrap();
//!
//! assert!(result.hash_hex().starts_with('0'));
//! ```

mod error;
mod params;

pub mod digest;
pub mod prefix;
pub mod record;
pub mod search;

pub use error::{Result, VanityError};
pub use params::*;
pub use prefix::HexPrefix;
pub use search::{SearchConfig, SearchResult, search};
