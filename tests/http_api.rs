//! End-to-end tests for the HTTP handlers.
//!
//! Handlers are driven directly with extracted parameters against a service
//! loaded from the fixture corpus and quote files.

use axum::body::to_bytes;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::{header, StatusCode, Uri};
use axum::response::Response;
use axum::Extension;
use serde_json::Value;
use shakesearch::config::ServiceConfig;
use shakesearch::server::protocol::QueryPairs;
use shakesearch::server::{
    handle_health, handle_search, handle_search_all, handle_search_context, SearchService,
};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

static SERVICE: OnceLock<Arc<SearchService>> = OnceLock::new();

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load the fixture service once (singleton)
fn service() -> Extension<Arc<SearchService>> {
    let service = SERVICE.get_or_init(|| {
        let config = ServiceConfig {
            corpus_path: fixture("completeworks.txt"),
            quotes_path: fixture("quotes.csv"),
            ..Default::default()
        };
        Arc::new(SearchService::load(&config).expect("Failed to load fixtures"))
    });
    Extension(service.clone())
}

fn query(q: &str) -> Result<Query<QueryPairs>, QueryRejection> {
    Ok(Query(vec![("q".to_string(), q.to_string())]))
}

fn no_query() -> Result<Query<QueryPairs>, QueryRejection> {
    Ok(Query(vec![("other".to_string(), "thou".to_string())]))
}

async fn read_body(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"))
}

async fn read_json(response: Response) -> Vec<Value> {
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let (status, body) = read_body(response).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).expect("Body is not a JSON array")
}

#[tokio::test]
async fn test_quote_search_returns_attributed_quotes() {
    let results = read_json(handle_search(query("thou"), service()).await).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["Title"], "Romeo and Juliet");
    assert_eq!(results[0]["Player"], "JULIET");
    assert_eq!(results[0]["ActSceneLine"], "2.2.33");
    assert_eq!(
        results[0]["Quote"],
        "O Romeo, Romeo, wherefore art thou Romeo?"
    );
    assert_eq!(results[1]["ActSceneLine"], "2.2.35");
}

#[tokio::test]
async fn test_quote_search_repeats_record_per_occurrence() {
    let results = read_json(handle_search(query("to"), service()).await).await;

    let locations: Vec<_> = results
        .iter()
        .map(|r| r["ActSceneLine"].as_str().unwrap())
        .collect();
    // "To" and "to" in 3.1.64, "to" in 3.1.65; "To-morrow," is not a match
    assert_eq!(locations, vec!["3.1.64", "3.1.64", "3.1.65"]);
}

#[tokio::test]
async fn test_quote_search_keeps_punctuation() {
    let results = read_json(handle_search(query("romeo"), service()).await).await;
    assert!(results.is_empty());

    let results = read_json(handle_search(query("Romeo?"), service()).await).await;
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn test_quote_search_phrase_is_empty() {
    let results = read_json(handle_search(query("to be"), service()).await).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_no_results_is_empty_array() {
    let (status, body) = read_body(handle_search(query("Falstaff"), service()).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]\n");
}

#[tokio::test]
async fn test_context_search_returns_window() {
    let results = read_json(handle_search_context(query("wherefore"), service()).await).await;

    assert_eq!(results.len(), 1);
    let context = results[0]["Context"].as_str().unwrap();
    assert!(context.contains("wherefore art thou"));
    assert!(context.len() <= 250);
    assert!(results[0].get("Title").is_none());
}

#[tokio::test]
async fn test_context_search_is_case_sensitive() {
    let results = read_json(handle_search_context(query("HAMLET"), service()).await).await;
    assert_eq!(results.len(), 1);
    // First occurrence is in the title line, so the window starts at the corpus start
    assert!(
        results[0]["Context"]
            .as_str()
            .unwrap()
            .starts_with("THE TRAGEDY OF HAMLET")
    );

    let results = read_json(handle_search_context(query("hamlet"), service()).await).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_combined_search_orders_context_first() {
    let results = read_json(handle_search_all(query("thou"), service()).await).await;

    assert_eq!(results.len(), 3);
    assert!(results[0].get("Context").is_some());
    assert_eq!(results[1]["ActSceneLine"], "2.2.33");
    assert_eq!(results[2]["ActSceneLine"], "2.2.35");
}

#[tokio::test]
async fn test_missing_query_is_bad_request() {
    for response in [
        handle_search(no_query(), service()).await,
        handle_search_context(no_query(), service()).await,
        handle_search_all(query(""), service()).await,
    ] {
        let (status, body) = read_body(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "missing search query in URL params");
    }
}

#[tokio::test]
async fn test_repeated_query_uses_first_value() {
    let uri: Uri = "/search?q=thou&q=Hamlet".parse().unwrap();
    let params = Query::<QueryPairs>::try_from_uri(&uri);
    assert!(params.is_ok());

    let results = read_json(handle_search(params, service()).await).await;
    let expected = read_json(handle_search(query("thou"), service()).await).await;
    assert_eq!(results.len(), 2);
    assert_eq!(results, expected);
}

#[tokio::test]
async fn test_empty_first_query_is_bad_request() {
    let uri: Uri = "/search?q=&q=thou".parse().unwrap();
    let params = Query::<QueryPairs>::try_from_uri(&uri);

    let (status, body) = read_body(handle_search(params, service()).await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "missing search query in URL params");
}

#[tokio::test]
async fn test_health() {
    let health = handle_health(service()).await.0;

    assert_eq!(health.status, "ok");
    assert_eq!(health.quote_count, 6);
    assert_eq!(
        health.corpus_bytes,
        std::fs::read(fixture("completeworks.txt")).unwrap().len()
    );
}
