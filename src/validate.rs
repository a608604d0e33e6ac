//! Command-line input checks

use vanity_core::{MAX_PREFIX_HEX, RESERVED_HEADER_KEYS};

/// True for 1 to 40 lowercase hex digits.
pub fn is_valid_prefix(prefix: &str) -> bool {
    (1..=MAX_PREFIX_HEX).contains(&prefix.len())
        && prefix
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// True for a non-empty alphanumeric key that is not a structural commit
/// header such as `tree` or `author`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_alphanumeric())
        && !RESERVED_HEADER_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_keys() {
        // (key, valid)
        let cases = [
            ("commit", false),
            ("tree", false),
            ("parent", false),
            ("author", false),
            ("committer", false),
            ("encoding", false),
            ("commit ", false),
            ("non-alphanumeric", false),
            ("under_score", false),
            ("", false),
            ("x", true),
            ("f00", true),
            ("treehouse", true),
            ("Tree", true),
        ];

        for (i, (key, valid)) in cases.into_iter().enumerate() {
            assert_eq!(is_valid_key(key), valid, "[{i}] is_valid_key({key:?})");
        }
    }

    #[test]
    fn test_valid_prefix() {
        let cases = [
            ("", false),
            ("x", false),
            ("0", true),
            ("f00", true),
            ("F00", false),
            ("0000000000000000000000000000000000000000", true),
            ("00000000000000000000000000000000000000000", false),
        ];

        for (i, (prefix, valid)) in cases.into_iter().enumerate() {
            assert_eq!(
                is_valid_prefix(prefix),
                valid,
                "[{i}] is_valid_prefix({prefix:?})"
            );
        }
    }
}
