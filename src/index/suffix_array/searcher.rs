//! Suffix array search
//!
//! Binary searches the sorted suffixes for the contiguous range that starts
//! with a pattern, giving O(m log n) lookups without rescanning the text.

use super::types::*;
use std::ops::Range;

/// An in-memory text together with its sorted suffix array
pub struct SuffixArray {
    /// Indexed text, verbatim
    text: Vec<u8>,
    /// Sorted suffix start positions
    suffix_array: Vec<SuffixEntry>,
}

impl SuffixArray {
    pub(crate) fn from_parts(text: Vec<u8>, suffix_array: Vec<SuffixEntry>) -> Self {
        Self { text, suffix_array }
    }

    /// Get the full text slice
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Number of suffixes (equals the text length)
    #[inline]
    pub fn len(&self) -> usize {
        self.suffix_array.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.suffix_array.is_empty()
    }

    /// Get suffix at index i in the suffix array
    #[inline]
    fn get_suffix(&self, i: usize) -> TextPosition {
        self.suffix_array[i] as TextPosition
    }

    /// Get text starting at a position
    #[inline]
    fn text_at(&self, pos: TextPosition) -> &[u8] {
        &self.text[pos..]
    }

    /// Search for a pattern in the suffix array
    ///
    /// Returns the range [lo, hi) of indices in the suffix array where all
    /// suffixes start with the pattern, truncated to `MAX_SUFFIX_COMPARE`
    /// bytes. Callers with longer patterns must verify each candidate.
    fn search(&self, pattern: &[u8]) -> Range<usize> {
        if pattern.is_empty() || self.suffix_array.is_empty() {
            return 0..0;
        }

        let prefix = &pattern[..pattern.len().min(MAX_SUFFIX_COMPARE)];
        let lo = self.lower_bound(prefix);
        let hi = self.upper_bound(prefix, lo);
        lo..hi
    }

    /// Find first index where suffix starts with pattern (or would if inserted)
    fn lower_bound(&self, pattern: &[u8]) -> usize {
        let mut lo = 0;
        let mut hi = self.suffix_array.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = self.text_at(self.get_suffix(mid));

            // Compare only up to pattern length
            let cmp_len = pattern.len().min(suffix.len());

            if &suffix[..cmp_len] < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Find first index at or after `start` where suffix does NOT start with pattern
    fn upper_bound(&self, pattern: &[u8], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.suffix_array.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = self.text_at(self.get_suffix(mid));

            if suffix.starts_with(pattern) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// All text positions where `pattern` occurs, in suffix order (not text order)
    pub fn positions<'a>(&'a self, pattern: &'a [u8]) -> impl Iterator<Item = TextPosition> + 'a {
        let verify = pattern.len() > MAX_SUFFIX_COMPARE;

        self.search(pattern)
            .map(move |i| self.get_suffix(i))
            .filter(move |&pos| !verify || self.text_at(pos).starts_with(pattern))
    }

    /// Lowest text position where `pattern` occurs
    ///
    /// Matching suffixes are sorted lexicographically, not by position, so the
    /// whole matching range is scanned for its minimum.
    pub fn first_position(&self, pattern: &[u8]) -> Option<TextPosition> {
        self.positions(pattern).min()
    }

    /// Get the number of occurrences of a pattern
    pub fn count_matches(&self, pattern: &[u8]) -> usize {
        if pattern.len() > MAX_SUFFIX_COMPARE {
            self.positions(pattern).count()
        } else {
            self.search(pattern).len()
        }
    }

    /// Check if pattern exists in the text
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.positions(pattern).next().is_some()
    }

    /// Get statistics about this suffix array
    pub fn stats(&self) -> SuffixArrayStats {
        SuffixArrayStats {
            text_size: self.text.len(),
            suffix_count: self.suffix_array.len(),
            index_bytes: self.suffix_array.len() * std::mem::size_of::<SuffixEntry>(),
        }
    }
}
