//! Longest-matching-blocks string similarity.
//!
//! Computes `ratio = 2*M / T` where `M` is the total number of characters
//! covered by the matching blocks (longest common substring, then recursing
//! into the pieces on either side of it) and `T` is the combined length of
//! both strings. 1.0 means identical, 0.0 means no characters in common.

/// Similarity ratio between two strings, in `[0, 1]`.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matching_chars(&a, &b);
    2.0 * matched as f64 / total as f64
}

/// Total characters covered by matching blocks: the longest common block,
/// plus the blocks found recursively to its left and right.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common contiguous block as `(start_in_a, start_in_b, length)`.
///
/// Single rolling-row DP over ending positions, O(n*m) time and O(m) space.
/// Ties resolve to the earliest block in `a`; strings here are short field
/// values, so tie-breaking never moves the ratio across the thresholds that
/// matter to the scorer.
fn longest_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut row = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        let mut prev = 0;
        for (j, cb) in b.iter().enumerate() {
            let cur = row[j + 1];
            if ca == cb {
                row[j + 1] = prev + 1;
                if row[j + 1] > best.2 {
                    best = (i + 1 - row[j + 1], j + 1 - row[j + 1], row[j + 1]);
                }
            } else {
                row[j + 1] = 0;
            }
            prev = cur;
        }
    }

    best
}
