//! Hex prefix matching with nibble granularity

use crate::error::{Result, VanityError};
use crate::params::{DIGEST_SIZE, MAX_PREFIX_HEX};

/// A decoded target prefix.
///
/// Odd-length prefixes are padded with a `0` nibble and the last byte is
/// compared under `0xF0`, so `"abc"` matches any digest starting `ab c?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexPrefix {
    bytes: Vec<u8>,
    last_mask: u8,
}

impl HexPrefix {
    pub fn parse(prefix: &str) -> Result<Self> {
        if prefix.len() > MAX_PREFIX_HEX {
            return Err(VanityError::InvalidPrefix(prefix.to_string()));
        }

        let (padded, last_mask) = if prefix.len() % 2 == 0 {
            (prefix.to_string(), 0xFF)
        } else {
            (format!("{prefix}0"), 0xF0)
        };

        let bytes =
            hex::decode(padded).map_err(|_| VanityError::InvalidPrefix(prefix.to_string()))?;

        Ok(Self { bytes, last_mask })
    }

    /// Number of hex digits this prefix constrains.
    pub fn nibbles(&self) -> usize {
        match self.bytes.len() {
            0 => 0,
            n if self.last_mask == 0xF0 => n * 2 - 1,
            n => n * 2,
        }
    }

    /// True if `digest` starts with this prefix. The empty prefix matches
    /// every digest.
    #[inline]
    pub fn matches(&self, digest: &[u8; DIGEST_SIZE]) -> bool {
        let Some((&last, full)) = self.bytes.split_last() else {
            return true;
        };

        digest.starts_with(full) && digest[full.len()] & self.last_mask == last & self.last_mask
    }
}
