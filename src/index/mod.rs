pub mod quotes;
pub mod stats;
pub mod substring;
pub mod suffix_array;
pub mod types;

pub use quotes::StructuredQuoteMatcher;
pub use substring::SubstringIndexer;
pub use types::*;
