//! Behavioural checks of both matchers against brute-force scans.

use shakesearch::config::ServiceConfig;
use shakesearch::index::{QuoteRecord, StructuredQuoteMatcher, SubstringIndexer};
use shakesearch::server::{SearchMode, SearchService};
use shakesearch::LoadError;
use std::fs;

const CORPUS: &str = "Now is the winter of our discontent \
    Made glorious summer by this sun of York; \
    And all the clouds that lour'd upon our house \
    In the deep bosom of the ocean buried. \
    Now are our brows bound with victorious wreaths; \
    Our bruised arms hung up for monuments; \
    Our stern alarums changed to merry meetings, \
    Our dreadful marches to delightful measures.";

#[test]
fn test_every_substring_window_matches_brute_force() {
    let indexer = SubstringIndexer::new(CORPUS).unwrap();
    let bytes = CORPUS.as_bytes();

    for len in [1, 2, 3, 5, 8, 13] {
        for start in (0..bytes.len() - len).step_by(7) {
            let query = &CORPUS[start..start + len];
            let first = CORPUS.find(query).unwrap();
            let window = indexer
                .lookup_first_occurrence_context(query)
                .expect("substring must be found");

            assert_eq!(window.match_offset, first, "query {query:?}");
            assert_eq!(window.start, first.saturating_sub(125));
            assert_eq!(window.end, (first + 125).min(bytes.len()));
            assert!(window.text.contains(query));
        }
    }
}

#[test]
fn test_absent_substrings() {
    let indexer = SubstringIndexer::new(CORPUS).unwrap();
    for query in ["Richmond", "winter Of", "YORK", "our  house", "measures.!"] {
        assert!(indexer.lookup_first_occurrence_context(query).is_none());
    }
}

#[test]
fn test_word_match_counts_equal_occurrences() {
    let quotes = [
        "Now is the winter of our discontent",
        "Our bruised arms hung up for monuments; our",
        "OUR stern alarums",
        "Your dreadful marches",
    ];
    let matcher = StructuredQuoteMatcher::new(
        quotes
            .iter()
            .enumerate()
            .map(|(i, q)| QuoteRecord::new("Richard III", "GLOUCESTER", format!("1.1.{i}"), *q))
            .collect(),
    );

    let results = matcher.match_whole_word("our");
    for (i, quote) in quotes.iter().enumerate() {
        let expected = quote
            .split_whitespace()
            .filter(|w| w.to_lowercase() == "our")
            .count();
        let found = results
            .iter()
            .filter(|r| r.location == format!("1.1.{i}"))
            .count();
        assert_eq!(found, expected, "quote {quote:?}");
    }
    assert_eq!(results.len(), 4);
}

#[test]
fn test_load_rejects_short_row_and_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("completeworks.txt");
    let quotes = dir.path().join("quotes.csv");
    fs::write(&corpus, CORPUS).unwrap();
    fs::write(&quotes, "1,Richard III,1.1.1,GLOUCESTER,Now is the winter\n2,Richard III\n").unwrap();

    let config = ServiceConfig {
        corpus_path: corpus,
        quotes_path: quotes,
        ..Default::default()
    };

    match SearchService::load(&config) {
        Err(LoadError::MalformedRow { line, found, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(found, 2);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("malformed quotes must not load"),
    }
}

#[test]
fn test_load_missing_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServiceConfig {
        corpus_path: dir.path().join("missing.txt"),
        quotes_path: dir.path().join("missing.csv"),
        ..Default::default()
    };

    assert!(matches!(
        SearchService::load(&config),
        Err(LoadError::Io { .. })
    ));
}

#[test]
fn test_empty_sources_load_and_search() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("empty.txt");
    let quotes = dir.path().join("empty.csv");
    fs::write(&corpus, "").unwrap();
    fs::write(&quotes, "").unwrap();

    let config = ServiceConfig {
        corpus_path: corpus,
        quotes_path: quotes,
        ..Default::default()
    };
    let service = SearchService::load(&config).unwrap();

    for mode in [SearchMode::Quotes, SearchMode::Context, SearchMode::All] {
        assert!(service.search(mode, "winter").is_empty());
    }
}

#[test]
fn test_configured_context_radius() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("completeworks.txt");
    let quotes = dir.path().join("quotes.csv");
    fs::write(&corpus, CORPUS).unwrap();
    fs::write(&quotes, "").unwrap();

    let config = ServiceConfig {
        corpus_path: corpus,
        quotes_path: quotes,
        context_radius: 4,
        ..Default::default()
    };
    let service = SearchService::load(&config).unwrap();

    let window = service
        .indexer()
        .lookup_first_occurrence_context("winter")
        .unwrap();
    assert_eq!(window.text, "the wint");
}
