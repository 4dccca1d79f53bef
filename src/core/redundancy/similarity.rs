//! Character-level similarity of two fingerprints.
//!
//! `ratio = 2 * M / (len(a) + len(b))`, where `M` is the number of characters
//! left unchanged by a minimal character diff of `a` into `b`.

use similar::TextDiff;

/// Similarity of `a` and `b` in `[0, 1]`. Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    f64::from(TextDiff::from_chars(a, b).ratio())
}
