#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shakesearch::index::SubstringIndexer;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    corpus: &'a [u8],
    query: &'a str,
}

fuzz_target!(|input: Input| {
    // Lookups over arbitrary bytes must never panic, and any window
    // must contain the query at the reported offset
    let Ok(indexer) = SubstringIndexer::new(input.corpus.to_vec()) else {
        return;
    };
    if let Some(window) = indexer.lookup_first_occurrence_context(input.query) {
        assert!(input.corpus[window.match_offset..].starts_with(input.query.as_bytes()));
        assert!(window.start <= window.match_offset && window.end <= input.corpus.len());
    }
});
