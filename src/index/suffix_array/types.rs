//! Types for suffix array indexing
//!
//! This module defines the core types used for suffix array-based search,
//! which provides O(m log n) exact substring matching over the corpus.

/// Byte offset into the indexed text
pub type TextPosition = usize;

/// Suffix array entry - starting offset of a suffix in the indexed text
pub type SuffixEntry = u32;

/// Largest text the suffix array can address with `SuffixEntry`
pub const MAX_TEXT_SIZE: usize = SuffixEntry::MAX as usize;

/// Number of bytes compared when ordering two suffixes.
///
/// Suffixes sharing a longer common prefix keep an arbitrary relative order,
/// so patterns longer than this are range-searched on their first
/// `MAX_SUFFIX_COMPARE` bytes and every candidate is verified.
pub const MAX_SUFFIX_COMPARE: usize = 256;

/// Configuration for suffix array building
#[derive(Debug, Clone, Copy)]
pub struct SuffixArrayConfig {
    /// Texts at least this large are sorted with rayon (default: 100KB)
    pub parallel_threshold: usize,
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 100_000,
        }
    }
}

/// Statistics about a built suffix array
#[derive(Debug, Clone, Copy)]
pub struct SuffixArrayStats {
    pub text_size: usize,
    pub suffix_count: usize,
    /// Approximate heap usage of the suffix array itself
    pub index_bytes: usize,
}
