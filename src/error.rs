//! Errors raised while loading search sources
//!
//! Every variant is fatal at startup: the service never serves queries from a
//! partially loaded corpus or quote set.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or validate a search source
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Quote data is not valid CSV
    #[error("failed to parse {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A quote row is missing required columns
    #[error("{}: row {line} has {found} fields, expected at least {expected}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },

    /// Corpus exceeds the addressable suffix array size
    #[error("corpus is {size} bytes, limit is {limit}")]
    CorpusTooLarge { size: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, LoadError>;
