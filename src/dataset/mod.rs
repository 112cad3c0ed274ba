//! Dataset Module
//!
//! The fixed heritage collection searched by the service.
//!
//! ## Overview
//! The dataset is built once at process start from the hardcoded record
//! tables in `records`, validated, and then shared read-only across all
//! requests (`Arc<Dataset>` injected into the HTTP handlers). Nothing ever
//! mutates it, so no locking is needed.
//!
//! ## Submodules
//! - **`records`**: The record tables (archives, monasteries, festivals).
//! - **`types`**: The `Record` struct and `Category` enum.

pub mod records;
pub mod types;


use std::collections::HashSet;

use anyhow::{bail, Result};

use self::types::Record;

/// The immutable record collection, concatenated in the fixed order
/// archives, monasteries, festivals.
pub struct Dataset {
    records: Vec<Record>,
    archive_count: usize,
    monastery_count: usize,
    festival_count: usize,
}

impl Dataset {
    /// Builds and validates the full dataset.
    ///
    /// Malformed records (missing display title, empty description, empty
    /// tags, empty redirect URL, duplicate id) are a data-integrity defect
    /// and fail startup here rather than surfacing per-request errors.
    pub fn load() -> Result<Self> {
        let archives = records::archives();
        let monasteries = records::monasteries();
        let festivals = records::festivals();

        let archive_count = archives.len();
        let monastery_count = monasteries.len();
        let festival_count = festivals.len();

        let mut records = archives;
        records.extend(monasteries);
        records.extend(festivals);

        validate(&records)?;

        Ok(Self {
            records,
            archive_count,
            monastery_count,
            festival_count,
        })
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn archive_count(&self) -> usize {
        self.archive_count
    }

    pub fn monastery_count(&self) -> usize {
        self.monastery_count
    }

    pub fn festival_count(&self) -> usize {
        self.festival_count
    }
}

fn validate(records: &[Record]) -> Result<()> {
    let mut seen_ids = HashSet::new();

    for record in records {
        if record.id.trim().is_empty() {
            bail!("record with empty id");
        }
        if !seen_ids.insert(record.id.as_str()) {
            bail!("duplicate record id: {}", record.id);
        }
        if record.title.trim().is_empty() {
            bail!("record {}: missing display title", record.id);
        }
        if record.description.trim().is_empty() {
            bail!("record {}: empty description", record.id);
        }
        if record.tags.is_empty() {
            bail!("record {}: no tags", record.id);
        }
        if record.redirect_url.trim().is_empty() {
            bail!("record {}: empty redirect_url", record.id);
        }
    }

    Ok(())
}
