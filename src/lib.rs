//! Monastery360 Heritage Search Library
//!
//! This library crate defines the core modules of the search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of two subsystems:
//!
//! - **`dataset`**: The fixed heritage collection (archives, monasteries,
//!   festivals). Built and validated once at startup, then shared read-only
//!   across all requests.
//! - **`search`**: The core information retrieval logic. Contains the
//!   relevance scorer, the ranking engine, the suggestion generator, and the
//!   HTTP request handlers.

pub mod dataset;
pub mod search;
