//! # Shakesearch - Search the Complete Works
//!
//! Shakesearch answers two kinds of queries over a fixed literary corpus:
//!
//! 1. **Context search** - exact, case-sensitive substring lookup in the
//!    complete-works text, answered with the text surrounding the first
//!    occurrence.
//! 2. **Quote search** - case-insensitive whole-word lookup in a table of
//!    attributed quotes, answered with every matching quote.
//!
//! ## Architecture
//!
//! - [`index`] - Suffix array, corpus indexer, and quote matcher
//! - [`server`] - `SearchService` and the HTTP API
//! - [`config`] - Service configuration
//! - [`output`] - Terminal result formatting
//! - [`utils`] - Word splitting and case folding
//!
//! ## Quick Start
//!
//! ```no_run
//! use shakesearch::index::{StructuredQuoteMatcher, SubstringIndexer};
//! use shakesearch::server::{SearchMode, SearchService};
//!
//! let indexer = SubstringIndexer::new("To be, or not to be: that is the question")?;
//! let matcher = StructuredQuoteMatcher::default();
//! let service = SearchService::new(indexer, matcher);
//!
//! for result in service.search(SearchMode::Context, "question") {
//!     println!("{:?}", result);
//! }
//! # Ok::<(), shakesearch::LoadError>(())
//! ```
//!
//! Both sources are loaded once and never change, so a single
//! `SearchService` is shared by every request without locking.

pub mod config;
pub mod error;
pub mod index;
pub mod output;
pub mod server;
pub mod utils;

pub use error::LoadError;
