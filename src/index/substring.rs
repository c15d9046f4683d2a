//! Substring search over the complete-works corpus
//!
//! The corpus is loaded once, indexed with a suffix array, and never mutated,
//! so a single `SubstringIndexer` can serve any number of concurrent lookups.

use crate::error::{LoadError, Result};
use crate::index::suffix_array::{SuffixArray, SuffixArrayBuilder, SuffixArrayConfig, SuffixArrayStats};
use crate::index::suffix_array::types::MAX_TEXT_SIZE;
use crate::index::types::{CONTEXT_RADIUS, ContextWindow};
use crate::utils::encoding::decode_lossy;
use std::path::Path;
use std::time::Instant;

/// Substring index over an immutable corpus
pub struct SubstringIndexer {
    sa: SuffixArray,
    context_radius: usize,
}

impl SubstringIndexer {
    /// Index `corpus` with the default context radius and sort settings
    pub fn new(corpus: impl Into<Vec<u8>>) -> Result<Self> {
        Self::with_config(corpus, CONTEXT_RADIUS, SuffixArrayConfig::default())
    }

    /// Index `corpus`, keeping `context_radius` bytes on each side of a match
    ///
    /// Fails with `LoadError::CorpusTooLarge` if the corpus is longer than a
    /// suffix entry can address.
    pub fn with_config(
        corpus: impl Into<Vec<u8>>,
        context_radius: usize,
        config: SuffixArrayConfig,
    ) -> Result<Self> {
        let corpus = corpus.into();
        check_corpus_size(corpus.len())?;

        let start = Instant::now();
        let sa = SuffixArrayBuilder::new(config).build(corpus);

        tracing::debug!(
            bytes = sa.text().len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "built suffix array"
        );

        Ok(Self { sa, context_radius })
    }

    /// Read the corpus file wholesale and index it
    pub fn open(path: &Path, context_radius: usize, config: SuffixArrayConfig) -> Result<Self> {
        let corpus = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::with_config(corpus, context_radius, config)
    }

    /// Context around the lowest-offset occurrence of `query`
    ///
    /// Matching is exact and case-sensitive. The window spans
    /// `[offset - radius, offset + radius)`, each end clamped to the corpus
    /// independently. Later occurrences are never reported.
    pub fn lookup_first_occurrence_context(&self, query: &str) -> Option<ContextWindow> {
        if query.is_empty() {
            return None;
        }

        let offset = self.sa.first_position(query.as_bytes())?;
        let corpus = self.sa.text();

        let start = offset.saturating_sub(self.context_radius);
        let end = offset.saturating_add(self.context_radius).min(corpus.len());

        Some(ContextWindow {
            match_offset: offset,
            start,
            end,
            text: decode_lossy(&corpus[start..end]),
        })
    }

    /// Number of occurrences of `query` in the corpus
    pub fn count_occurrences(&self, query: &str) -> usize {
        self.sa.count_matches(query.as_bytes())
    }

    /// The indexed corpus bytes
    pub fn corpus(&self) -> &[u8] {
        self.sa.text()
    }

    pub fn context_radius(&self) -> usize {
        self.context_radius
    }

    pub fn stats(&self) -> SuffixArrayStats {
        self.sa.stats()
    }
}

fn check_corpus_size(size: usize) -> Result<()> {
    if size > MAX_TEXT_SIZE {
        return Err(LoadError::CorpusTooLarge {
            size,
            limit: MAX_TEXT_SIZE,
        });
    }
    Ok(())
}
