//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search using suffix arrays.
//! The corpus is indexed verbatim (no case folding), so lookups are
//! case-sensitive byte matches.
//!
//! ## Architecture
//!
//! - `builder`: Sorts the suffixes of a text
//! - `searcher`: Range lookups over the sorted suffixes
//! - `types`: Core type definitions

pub mod builder;
pub mod searcher;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixArrayBuilder;
pub use searcher::SuffixArray;
pub use types::{SuffixArrayConfig, SuffixArrayStats, TextPosition};
