//! Commit digests for search trials
//!
//! Git hashes a commit as `"commit <len>\0" + body`. For a trial `n` the
//! body is `head + "\n" + key + " " + n + tail`, so everything up to and
//! including the space after the key only depends on `<len>`, and `<len>`
//! only changes when `n` gains a digit.
//!
//! [`TrialHasher`] keeps the SHA-1 state after that constant prefix and
//! clones it for every trial. Per trial it then only hashes the digits of
//! `n` and the tail instead of the whole object.

use sha1::{Digest, Sha1};

use crate::params::{DIGEST_SIZE, MAX_DECIMAL_DIGITS, OBJECT_TYPE};
use crate::record::Split;

/// Decimal rendering of a `u64` on the stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Decimal {
    buf: [u8; MAX_DECIMAL_DIGITS],
    start: usize,
}

impl Decimal {
    #[inline]
    pub(crate) fn new(mut n: u64) -> Self {
        let mut buf = [0u8; MAX_DECIMAL_DIGITS];
        let mut start = MAX_DECIMAL_DIGITS;

        loop {
            start -= 1;
            buf[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }

        Self { buf, start }
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}

/// Per-worker hasher that reuses the constant-prefix state between trials.
///
/// Not `Sync`-shared: every worker owns one.
#[derive(Clone)]
pub struct TrialHasher<'a> {
    head: &'a [u8],
    key: &'a [u8],
    tail: &'a [u8],
    /// Object length minus the digits of `n`
    fixed_len: usize,
    /// Object length the cached state was built for
    cached_len: Option<usize>,
    cached: Sha1,
}

impl<'a> TrialHasher<'a> {
    pub fn new(split: Split<'a>, key: &'a str) -> Self {
        Self {
            head: split.head,
            key: key.as_bytes(),
            tail: split.tail,
            fixed_len: split.head.len() + 1 + key.len() + 1 + split.tail.len(),
            cached_len: None,
            cached: Sha1::new(),
        }
    }

    /// SHA-1 of the commit object for trial `n`.
    #[inline]
    pub fn digest(&mut self, n: u64) -> [u8; DIGEST_SIZE] {
        let n = Decimal::new(n);
        let digits = n.as_bytes();
        let object_len = self.fixed_len + digits.len();

        if self.cached_len != Some(object_len) {
            self.rebuild(object_len);
        }

        let mut hasher = self.cached.clone();
        hasher.update(digits);
        hasher.update(self.tail);
        hasher.finalize().into()
    }

    #[cold]
    fn rebuild(&mut self, object_len: usize) {
        tracing::trace!(object_len, "rebuilding cached prefix state");

        let mut hasher = Sha1::new();
        update_prefix(&mut hasher, object_len, self.head, self.key);
        self.cached = hasher;
        self.cached_len = Some(object_len);
    }
}

/// Feed `"commit <len>\0" + head + "\n" + key + " "`.
#[inline]
fn update_prefix(hasher: &mut Sha1, object_len: usize, head: &[u8], key: &[u8]) {
    hasher.update(OBJECT_TYPE.as_bytes());
    hasher.update(b" ");
    hasher.update(Decimal::new(object_len as u64).as_bytes());
    hasher.update([0u8]);
    hasher.update(head);
    hasher.update(b"\n");
    hasher.update(key);
    hasher.update(b" ");
}

/// One-shot digest of a trial, hashing every byte.
///
/// Equivalent to [`TrialHasher::digest`] for any `n`.
pub fn digest(head: &[u8], key: &str, n: u64, tail: &[u8]) -> [u8; DIGEST_SIZE] {
    let n = Decimal::new(n);
    let digits = n.as_bytes();
    let object_len = head.len() + 1 + key.len() + 1 + digits.len() + tail.len();

    let mut hasher = Sha1::new();
    update_prefix(&mut hasher, object_len, head, key.as_bytes());
    hasher.update(digits);
    hasher.update(tail);
    hasher.finalize().into()
}

/// SHA-1 of an arbitrary commit body, as `git hash-object -t commit` computes it.
pub fn object_id(body: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Sha1::new();
    hasher.update(OBJECT_TYPE.as_bytes());
    hasher.update(b" ");
    hasher.update(Decimal::new(body.len() as u64).as_bytes());
    hasher.update([0u8]);
    hasher.update(body);
    hasher.finalize().into()
}
