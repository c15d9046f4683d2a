use super::protocol::{
    encode_results, HealthResponse, QueryPairs, SearchParams, ENCODING_FAILURE_MESSAGE,
    MISSING_QUERY_MESSAGE,
};
use super::service::{SearchMode, SearchService};
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;
use std::time::Instant;

type SearchQuery = Result<Query<QueryPairs>, QueryRejection>;

/// `GET /search` - whole-word quote search
pub async fn handle_search(
    params: SearchQuery,
    Extension(service): Extension<Arc<SearchService>>,
) -> Response {
    search_response(&service, SearchMode::Quotes, params)
}

/// `GET /search-context` - corpus context around the first occurrence
pub async fn handle_search_context(
    params: SearchQuery,
    Extension(service): Extension<Arc<SearchService>>,
) -> Response {
    search_response(&service, SearchMode::Context, params)
}

/// `GET /search-all` - context result followed by quote results
pub async fn handle_search_all(
    params: SearchQuery,
    Extension(service): Extension<Arc<SearchService>>,
) -> Response {
    search_response(&service, SearchMode::All, params)
}

/// `GET /health`
pub async fn handle_health(
    Extension(service): Extension<Arc<SearchService>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        corpus_bytes: service.indexer().corpus().len(),
        quote_count: service.matcher().len(),
    })
}

fn search_response(service: &SearchService, mode: SearchMode, params: SearchQuery) -> Response {
    let params = match params {
        Ok(Query(pairs)) => SearchParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(%mode, error = %rejection, "rejected query string");
            SearchParams::default()
        }
    };

    let Some(query) = params.query() else {
        return (StatusCode::BAD_REQUEST, MISSING_QUERY_MESSAGE).into_response();
    };

    let start = Instant::now();
    let results = service.search(mode, query);

    match encode_results(&results) {
        Ok(body) => {
            tracing::info!(
                %mode,
                query_len = query.len(),
                results = results.len(),
                elapsed_us = start.elapsed().as_micros() as u64,
                "search"
            );
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(e) => {
            tracing::error!(%mode, error = %e, "failed to encode search results");
            (StatusCode::INTERNAL_SERVER_ERROR, ENCODING_FAILURE_MESSAGE).into_response()
        }
    }
}
