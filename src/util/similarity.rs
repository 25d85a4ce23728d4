//! String similarity ratios used for fuzzy matching.
//!
//! [`sequence_ratio`] is the Ratcliff/Obershelp "gestalt" measure: find the
//! longest common block, recurse on the pieces to its left and right, and
//! score `2 * M / T` where `M` is the number of matched characters and `T`
//! the combined length.

use crate::config::SimilarityMetric;
use crate::util::levenshtein::levenshtein_similarity;

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as
/// `(start_in_a, start_in_b, len)`. Ties go to the block starting earliest
/// in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    // lengths[j + 1] = length of the common suffix ending at a[i], b[j]
    let mut prev = vec![0usize; bhi - blo + 1];
    let mut curr = vec![0usize; bhi - blo + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = j - blo + 1;
            curr[k] = if a[i] == b[j] { prev[k - 1] + 1 } else { 0 };
            if curr[k] > best.2 {
                best = (i + 1 - curr[k], j + 1 - curr[k], curr[k]);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

/// Number of characters in all matching blocks of `a` and `b`.
pub fn matching_characters(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut matched = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        if alo >= ahi || blo >= bhi {
            continue;
        }
        let (i, j, k) = longest_match(&a, &b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        queue.push((alo, i, blo, j));
        queue.push((i + k, ahi, j + k, bhi));
    }
    matched
}

/// Ratcliff/Obershelp similarity in `[0, 1]`. Two empty strings score 1.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(a, b) as f64 / total as f64
}

impl SimilarityMetric {
    /// Similarity of `a` and `b` under this metric.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        match self {
            SimilarityMetric::SequenceRatio => sequence_ratio(a, b),
            SimilarityMetric::Levenshtein => levenshtein_similarity(a, b),
        }
    }
}
