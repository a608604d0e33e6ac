//! Commit record layout
//!
//! A commit object as printed by `git cat-file commit` is a block of
//! `key value` header lines, a blank line, and the message:
//!
//! ```text
//! tree <hex-oid>\n
//! parent <hex-oid>\n        (zero or more)
//! author <ident>\n
//! committer <ident>\n
//! <key> <n>\n               (injected by the search)
//! \n
//! <message>
//! ```
//!
//! The search never touches the message. It splits the record at the first
//! blank line, appends one header line to the head and re-joins.

use crate::digest::Decimal;
use crate::error::{Result, VanityError};
use crate::params::HEAD_TAIL_SEPARATOR;

/// Borrowed head/tail views of a commit record.
///
/// `head` stops before the separator; `tail` starts at it, so
/// `head ++ tail` is the original record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    pub head: &'a [u8],
    pub tail: &'a [u8],
}

impl<'a> Split<'a> {
    /// Same split with the previous run's `key` line removed from the head.
    pub fn without_stale_header(self, key: &str) -> Self {
        Self {
            head: strip_stale_header(self.head, key),
            tail: self.tail,
        }
    }
}

/// Split a record at the first `"\n\n"`.
pub fn split(record: &[u8]) -> Result<Split<'_>> {
    let idx = record
        .windows(HEAD_TAIL_SEPARATOR.len())
        .position(|w| w == HEAD_TAIL_SEPARATOR)
        .ok_or(VanityError::MalformedRecord)?;

    Ok(Split {
        head: &record[..idx],
        tail: &record[idx..],
    })
}

/// Drop the last header line if it starts with `key`.
///
/// Only the last line is looked at, so a line injected by an earlier run is
/// replaced instead of piling up. A matching line anywhere else in the head
/// is kept.
pub fn strip_stale_header<'a>(head: &'a [u8], key: &str) -> &'a [u8] {
    let Some(idx) = head.iter().rposition(|&b| b == b'\n') else {
        return head;
    };

    if head[idx + 1..].starts_with(key.as_bytes()) {
        &head[..idx]
    } else {
        head
    }
}

/// Build `head + "\n" + key + " " + n + tail`.
pub fn assemble(head: &[u8], key: &str, n: u64, tail: &[u8]) -> Vec<u8> {
    let n = Decimal::new(n);
    let digits = n.as_bytes();

    let mut out = Vec::with_capacity(head.len() + key.len() + digits.len() + tail.len() + 2);
    out.extend_from_slice(head);
    out.push(b'\n');
    out.extend_from_slice(key.as_bytes());
    out.push(b' ');
    out.extend_from_slice(digits);
    out.extend_from_slice(tail);
    out
}
