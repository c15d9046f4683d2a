//! The search service shared by every request handler
//!
//! Holds one corpus indexer and one quote matcher, both immutable once built.

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::index::quotes::StructuredQuoteMatcher;
use crate::index::substring::SubstringIndexer;
use crate::index::suffix_array::SuffixArrayConfig;
use crate::index::types::SearchResult;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Which matcher a query is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Whole-word quote search
    Quotes,
    /// First-occurrence corpus context
    Context,
    /// Context result followed by quote results
    All,
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quotes" | "quote" => Ok(SearchMode::Quotes),
            "context" => Ok(SearchMode::Context),
            "all" | "combined" => Ok(SearchMode::All),
            other => Err(format!("unknown search mode: {}", other)),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::Quotes => "quotes",
            SearchMode::Context => "context",
            SearchMode::All => "all",
        };
        f.write_str(name)
    }
}

/// Both search backends, built once at startup
pub struct SearchService {
    indexer: SubstringIndexer,
    matcher: StructuredQuoteMatcher,
}

impl SearchService {
    pub fn new(indexer: SubstringIndexer, matcher: StructuredQuoteMatcher) -> Self {
        Self { indexer, matcher }
    }

    /// Load the corpus and quote files named by `config`
    ///
    /// Fails on the first unreadable or malformed source.
    pub fn load(config: &ServiceConfig) -> Result<Self> {
        let start = Instant::now();
        let indexer = SubstringIndexer::open(
            &config.corpus_path,
            config.context_radius,
            SuffixArrayConfig {
                parallel_threshold: config.parallel_sort_threshold,
            },
        )?;
        tracing::info!(
            path = %config.corpus_path.display(),
            bytes = indexer.corpus().len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "indexed corpus"
        );

        let start = Instant::now();
        let matcher = StructuredQuoteMatcher::open(&config.quotes_path, config.quotes_has_header)?;
        tracing::info!(
            path = %config.quotes_path.display(),
            quotes = matcher.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "loaded quotes"
        );

        Ok(Self::new(indexer, matcher))
    }

    /// Run `query` against the matcher(s) selected by `mode`
    pub fn search(&self, mode: SearchMode, query: &str) -> Vec<SearchResult> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();

        if matches!(mode, SearchMode::Context | SearchMode::All) {
            if let Some(window) = self.indexer.lookup_first_occurrence_context(query) {
                results.push(window.into());
            }
        }

        if matches!(mode, SearchMode::Quotes | SearchMode::All) {
            results.extend(
                self.matcher
                    .match_whole_word(query)
                    .into_iter()
                    .cloned()
                    .map(SearchResult::from),
            );
        }

        results
    }

    pub fn indexer(&self) -> &SubstringIndexer {
        &self.indexer
    }

    pub fn matcher(&self) -> &StructuredQuoteMatcher {
        &self.matcher
    }
}
