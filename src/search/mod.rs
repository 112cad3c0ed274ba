//! Search Service Module
//!
//! The core component responsible for executing user queries against the
//! heritage dataset.
//!
//! ## Overview
//! This module implements the retrieval pipeline of the service. It bridges
//! the HTTP API layer with the immutable in-memory dataset.
//!
//! ## Responsibilities
//! - **Scoring**: Computing a relevance score per (query, record) pair from
//!   additive phrase, word, tag, field, and fuzzy-similarity contributions.
//! - **Ranking**: Sorting scored records and applying the single-word vs
//!   multi-word result-count policy.
//! - **Suggestions**: Producing autocomplete suggestions from title matches
//!   and a fixed category vocabulary.
//! - **API**: Exposing search capabilities via RESTful HTTP endpoints.
//!
//! ## Submodules
//! - **`engine`**: Core ranking logic and result policy.
//! - **`scorer`**: The relevance scoring algorithm.
//! - **`similarity`**: Longest-matching-blocks string similarity ratio.
//! - **`suggest`**: The suggestion generator.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod scorer;
pub mod similarity;
pub mod suggest;
pub mod types;

#[cfg(test)]
mod tests;
