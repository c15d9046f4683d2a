use serde::{Deserialize, Serialize};

/// Bytes of corpus kept on each side of a match (default context radius)
pub const CONTEXT_RADIUS: usize = 125;

/// One attributed line of dialogue
///
/// Serializes with the field names the web client reads
/// (`Title`, `Player`, `Quote`, `ActSceneLine`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    #[serde(rename = "ActSceneLine")]
    pub location: String,
    #[serde(rename = "Player")]
    pub speaker: String,
    #[serde(rename = "Quote")]
    pub quote: String,
    #[serde(rename = "Title")]
    pub title: String,
}

impl QuoteRecord {
    pub fn new(
        title: impl Into<String>,
        speaker: impl Into<String>,
        location: impl Into<String>,
        quote: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            speaker: speaker.into(),
            location: location.into(),
            quote: quote.into(),
        }
    }
}

/// Slice of the corpus surrounding the first occurrence of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    /// Byte offset of the match
    pub match_offset: usize,
    /// Window start byte offset (inclusive)
    pub start: usize,
    /// Window end byte offset (exclusive)
    pub end: usize,
    /// Window text; a window edge inside a multi-byte character decodes as U+FFFD
    pub text: String,
}

impl ContextWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Context-window result as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextHit {
    #[serde(rename = "Context")]
    pub context: String,
}

impl From<ContextWindow> for ContextHit {
    fn from(window: ContextWindow) -> Self {
        Self {
            context: window.text,
        }
    }
}

/// A single search result, from either matcher
///
/// The wire format carries no tag; the two shapes are told apart by their
/// field sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResult {
    Context(ContextHit),
    Quote(QuoteRecord),
}

impl From<ContextWindow> for SearchResult {
    fn from(window: ContextWindow) -> Self {
        SearchResult::Context(window.into())
    }
}

impl From<QuoteRecord> for SearchResult {
    fn from(record: QuoteRecord) -> Self {
        SearchResult::Quote(record)
    }
}
