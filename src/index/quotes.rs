//! Whole-word search over attributed quotes
//!
//! Quote rows come from a CSV file whose columns are
//! `<unused>, title, act.scene.line, speaker, quote`. Rows are validated when
//! loaded, so a query never touches a malformed record.

use crate::error::{LoadError, Result};
use crate::index::types::QuoteRecord;
use crate::utils::tokenizer::{split_words, FoldedWord};
use std::io::Read;
use std::path::Path;

/// Column holding the work title
const TITLE_COLUMN: usize = 1;
/// Column holding the act.scene.line location
const LOCATION_COLUMN: usize = 2;
/// Column holding the speaker name
const SPEAKER_COLUMN: usize = 3;
/// Column holding the dialogue text
const QUOTE_COLUMN: usize = 4;
/// Minimum fields per row
const MIN_FIELDS: usize = QUOTE_COLUMN + 1;

/// Ordered, immutable set of quotes searchable by whole word
#[derive(Debug, Default)]
pub struct StructuredQuoteMatcher {
    records: Vec<QuoteRecord>,
}

impl StructuredQuoteMatcher {
    pub fn new(records: Vec<QuoteRecord>) -> Self {
        Self { records }
    }

    /// Load quotes from a CSV file
    pub fn open(path: &Path, has_header: bool) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path, has_header)
    }

    /// Load quotes from CSV data; `path` is only used in error messages
    pub fn from_reader<R: Read>(reader: R, path: &Path, has_header: bool) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(has_header)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row.map_err(|source| LoadError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            records.push(parse_row(&row, path)?);
        }

        tracing::debug!(path = %path.display(), quotes = records.len(), "loaded quotes");

        Ok(Self { records })
    }

    /// Every record whose quote contains `query` as a whole word
    ///
    /// Words are whitespace-delimited and compared case-insensitively against
    /// the entire query. A record is returned once per matching word, in
    /// record order and then word order. Queries containing whitespace can
    /// never equal a single word and so match nothing.
    pub fn match_whole_word(&self, query: &str) -> Vec<&QuoteRecord> {
        let query = FoldedWord::new(query);
        if query.is_empty() {
            return Vec::new();
        }

        let query = &query;
        self.records
            .iter()
            .flat_map(move |record| {
                split_words(&record.quote)
                    .filter(move |word| query.matches(word))
                    .map(move |_| record)
            })
            .collect()
    }

    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_row(row: &csv::StringRecord, path: &Path) -> Result<QuoteRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);

    let field = |index: usize| {
        row.get(index).ok_or_else(|| LoadError::MalformedRow {
            path: path.to_path_buf(),
            line,
            found: row.len(),
            expected: MIN_FIELDS,
        })
    };

    Ok(QuoteRecord {
        title: field(TITLE_COLUMN)?.to_string(),
        location: field(LOCATION_COLUMN)?.to_string(),
        speaker: field(SPEAKER_COLUMN)?.to_string(),
        quote: field(QUOTE_COLUMN)?.to_string(),
    })
}
