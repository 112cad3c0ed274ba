//! HTTP request handlers for the Axum web server.
//!
//! Request validation lives here: the core scoring and ranking functions are
//! total over well-formed input, so empty queries and out-of-range limits
//! never reach them.

use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;

use super::engine::rank;
use super::suggest::suggest;
use super::types::{
    ErrorResponse, HealthResponse, SearchResponse, SearchResult, SuggestionsResponse, SEARCH_TYPE,
};
use crate::dataset::Dataset;

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 50;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(detail: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            detail: detail.to_string(),
        }),
    )
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct SuggestionParams {
    pub q: String,
}

/// `GET /search?q=<query>&limit=<n>`
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(dataset): Extension<Arc<Dataset>>,
) -> Result<Json<SearchResponse>, ApiError> {
    if params.q.trim().is_empty() {
        return Err(bad_request("Search query cannot be empty"));
    }
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(bad_request("limit must be between 1 and 50"));
    }

    let results: Vec<SearchResult> = rank(&params.q, dataset.records(), limit)
        .into_iter()
        .map(|(record, score)| SearchResult::from_record(record, score))
        .collect();

    tracing::debug!("query {:?}: {} results", params.q, results.len());

    let suggestions = suggest(&params.q, dataset.records());

    Ok(Json(SearchResponse {
        query: params.q,
        total_results: results.len(),
        results,
        search_type: SEARCH_TYPE.to_string(),
        suggestions,
    }))
}

/// `GET /suggestions?q=<partial query>`
pub async fn handle_suggestions(
    Query(params): Query<SuggestionParams>,
    Extension(dataset): Extension<Arc<Dataset>>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    if params.q.trim().is_empty() {
        return Err(bad_request("Search query cannot be empty"));
    }

    let suggestions = suggest(&params.q, dataset.records());

    Ok(Json(SuggestionsResponse {
        query: params.q,
        suggestions,
    }))
}

/// `GET /health`
pub async fn handle_health(Extension(dataset): Extension<Arc<Dataset>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "Monastery360 AI Search".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_items: dataset.len(),
        archives: dataset.archive_count(),
        monasteries: dataset.monastery_count(),
        festivals: dataset.festival_count(),
        features: vec![
            "AI-powered search".to_string(),
            "Archive-specific redirects".to_string(),
            "Festival calendar integration".to_string(),
            "Monastery location mapping".to_string(),
            "Fuzzy matching".to_string(),
            "Relevance scoring".to_string(),
        ],
    })
}
