//! Throughput reporting helpers

use std::time::Duration;

/// Format a number with comma separators
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Trials per second, zero when no time has passed
pub fn rate(trials: u64, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        (trials as f64 / secs) as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        let cases = [
            (0, "0"),
            (1, "1"),
            (10, "10"),
            (100, "100"),
            (1_000, "1,000"),
            (10_000, "10,000"),
            (100_000, "100,000"),
            (1_000_000, "1,000,000"),
            (10_000_000, "10,000,000"),
            (100_000_000, "100,000,000"),
            (1_000_000_000, "1,000,000,000"),
            (u64::MAX, "18,446,744,073,709,551,615"),
        ];

        for (n, want) in cases {
            assert_eq!(format_number(n), want, "format_number({n})");
        }
    }

    #[test]
    fn test_rate() {
        assert_eq!(rate(1_000, Duration::from_secs(2)), 500);
        assert_eq!(rate(1_000, Duration::ZERO), 0);
        assert_eq!(rate(3, Duration::from_millis(500)), 6);
    }
}
