//! Utility functions shared by the matchers.
//!
//! ## Modules
//!
//! - [`encoding`] - Lossy UTF-8 decoding of context windows
//! - [`tokenizer`] - Whitespace word splitting and case-folded word comparison
//!
//! ```no_run
//! use shakesearch::utils::{split_words, FoldedWord};
//!
//! let query = FoldedWord::new("ROMEO");
//! let hits = split_words("O Romeo, romeo").filter(|w| query.matches(w)).count();
//! // Only "romeo" matches: "Romeo," keeps its comma
//! ```

pub mod encoding;
pub mod tokenizer;

pub use tokenizer::*;
