//! Suffix array builder
//!
//! Builds a suffix array over a single text by sorting every suffix start
//! position. Large texts are sorted in parallel.
//!
//! The resulting suffix array enables O(m log n) substring search.

use super::searcher::SuffixArray;
use super::types::*;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Builder for constructing suffix arrays
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SuffixArrayConfig::default())
    }

    /// Build the suffix array, taking ownership of the text
    ///
    /// Callers must keep `text.len()` within `MAX_TEXT_SIZE`.
    pub fn build(self, text: Vec<u8>) -> SuffixArray {
        debug_assert!(text.len() <= MAX_TEXT_SIZE);

        if text.is_empty() {
            return SuffixArray::from_parts(text, Vec::new());
        }

        let suffix_array = build_suffix_array(&text, self.config.parallel_threshold);
        SuffixArray::from_parts(text, suffix_array)
    }
}

/// Build suffix array by sorting suffix positions
///
/// This approach:
/// 1. Creates array of all suffix positions [0, 1, 2, ..., n-1]
/// 2. Sorts positions by comparing the suffixes they point to
/// 3. Uses rayon once the text reaches `parallel_threshold` bytes
///
/// Time: O(n log n) comparisons, each bounded by `MAX_SUFFIX_COMPARE`
/// Space: O(n) for the suffix array
fn build_suffix_array(text: &[u8], parallel_threshold: usize) -> Vec<SuffixEntry> {
    let n = text.len();

    let mut sa: Vec<SuffixEntry> = (0..n as SuffixEntry).collect();

    if n >= parallel_threshold {
        sa.par_sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    } else {
        sa.sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    }

    sa
}

/// Compare two suffixes lexicographically on their first `MAX_SUFFIX_COMPARE` bytes
#[inline]
fn compare_suffixes(text: &[u8], a: usize, b: usize) -> Ordering {
    let len_a = (text.len() - a).min(MAX_SUFFIX_COMPARE);
    let len_b = (text.len() - b).min(MAX_SUFFIX_COMPARE);

    text[a..a + len_a].cmp(&text[b..b + len_b])
}
