//! Commit object constants
//!
//! Fixed values of the git object encoding the search hashes against.

/// Object type written in front of the length in the hashed header
pub const OBJECT_TYPE: &str = "commit";

/// SHA-1 output size in bytes
pub const DIGEST_SIZE: usize = 20;

/// Longest usable prefix, in hex characters
pub const MAX_PREFIX_HEX: usize = DIGEST_SIZE * 2;

/// Longest decimal rendering of a `u64`
pub const MAX_DECIMAL_DIGITS: usize = 20;

/// Separator between the header block and the message
pub const HEAD_TAIL_SEPARATOR: &[u8] = b"\n\n";

/// Structural commit header keys an injected line must never reuse
pub const RESERVED_HEADER_KEYS: [&str; 6] =
    ["commit", "tree", "parent", "author", "committer", "encoding"];
