//! Data Transfer Objects for the search API.

use serde::{Deserialize, Serialize};

use crate::dataset::types::{Category, Record};

/// Label echoed in every search response.
pub const SEARCH_TYPE: &str = "ai_enhanced";

/// One search hit: a projection of the matched record plus its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monastery: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub redirect_url: String,
    pub category: Category,
    pub relevance_score: f64,
}

impl SearchResult {
    pub fn from_record(record: &Record, relevance_score: f64) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            kind: record.kind.clone(),
            monastery: record.monastery.clone(),
            location: record.location.clone(),
            date: record.date.clone(),
            tags: record.tags.clone(),
            redirect_url: record.redirect_url.clone(),
            category: record.category,
            relevance_score,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total_results: usize,
    pub search_type: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub query: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub total_items: usize,
    pub archives: usize,
    pub monasteries: usize,
    pub festivals: usize,
    pub features: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
