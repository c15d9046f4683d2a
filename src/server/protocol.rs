//! Wire types for the HTTP API
//!
//! Search endpoints take `?q=<query>` and answer with a JSON array of
//! results. Errors are plain-text bodies.

use crate::index::types::SearchResult;
use serde::{Deserialize, Serialize};

/// Body returned when `q` is missing or empty
pub const MISSING_QUERY_MESSAGE: &str = "missing search query in URL params";

/// Body returned when results cannot be serialized
pub const ENCODING_FAILURE_MESSAGE: &str = "encoding failure";

/// Decoded `key=value` pairs of a query string, in request order
pub type QueryPairs = Vec<(String, String)>;

/// Query string of a search request
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// Take the first `q` from the decoded pairs; later repeats are ignored
    pub fn from_pairs(pairs: QueryPairs) -> Self {
        let q = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "q").then_some(value));
        Self { q }
    }

    /// The query, if present and non-empty
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

/// Liveness response with source sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub corpus_bytes: usize,
    pub quote_count: usize,
}

/// Encode results as the JSON response body
///
/// The body ends with a newline, matching a streaming JSON encoder.
pub fn encode_results(results: &[SearchResult]) -> serde_json::Result<Vec<u8>> {
    let mut body = serde_json::to_vec(results)?;
    body.push(b'\n');
    Ok(body)
}
