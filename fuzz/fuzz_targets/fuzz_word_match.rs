#![no_main]

use libfuzzer_sys::fuzz_target;
use shakesearch::index::{QuoteRecord, StructuredQuoteMatcher};
use std::path::Path;

fuzz_target!(|data: (&str, &str, &[u8])| {
    let (quote, query, csv) = data;

    // Word matching on arbitrary text
    let matcher = StructuredQuoteMatcher::new(vec![QuoteRecord::new("T", "P", "L", quote)]);
    let _ = matcher.match_whole_word(query);

    // CSV loading must fail cleanly rather than panic
    let _ = StructuredQuoteMatcher::from_reader(csv, Path::new("fuzz.csv"), false);
});
