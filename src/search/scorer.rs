//! Relevance scoring for one record against one query.
//!
//! The score is a sum of independent additive contributions: full-phrase and
//! per-word hits against the record's combined searchable text, tiered
//! matches against the display title, tags, description, and descriptive
//! fields, fuzzy similarity on the short name-like fields, and a coverage
//! bonus for multi-word queries. The exact point values are load-bearing for
//! the ranking thresholds downstream; do not retune them in isolation.

use super::similarity;
use crate::dataset::types::Record;

/// Relevance score for `record` against `query`. Deterministic, pure, and
/// case-insensitive; 0.0 means no match at all.
pub fn score(query: &str, record: &Record) -> f64 {
    let query_lower = query.trim().to_lowercase();
    let query_words: Vec<&str> = query_lower.split_whitespace().collect();
    let mut score = 0.0;

    let full_text = searchable_text(record);

    // Exact phrase match (highest priority within the full text).
    if full_text.contains(&query_lower) {
        score += 50.0;
    }

    // Multi-word boost when every word is present somewhere.
    let words_found = query_words
        .iter()
        .filter(|word| full_text.contains(**word))
        .count();
    if words_found == query_words.len() && query_words.len() > 1 {
        score += 40.0;
    }

    // Individual word matching.
    score += 15.0 * words_found as f64;

    // Display title: exact match outranks a partial one.
    let title = record.title.to_lowercase();
    if query_lower == title {
        score += 100.0;
    } else if title.contains(&query_lower) || query_lower.contains(&title) {
        score += 70.0;
    }

    // Tags carry more weight than free text; each tag contributes through
    // its first matching tier only.
    for tag in &record.tags {
        let tag_lower = tag.to_lowercase();
        if tag_lower == query_lower {
            score += 30.0;
        } else if tag_lower.contains(&query_lower) {
            score += 20.0;
        } else if query_words.iter().any(|word| tag_lower.contains(word)) {
            score += 12.0;
        }
    }

    // Description.
    let description = record.description.to_lowercase();
    if description.contains(&query_lower) {
        score += 25.0;
    } else if query_words.iter().any(|word| description.contains(word)) {
        score += 8.0;
    }

    // Monastery name.
    if let Some(monastery) = &record.monastery {
        let value = monastery.to_lowercase();
        if value.contains(&query_lower) {
            score += 20.0;
        } else if query_words.iter().any(|word| value.contains(word)) {
            score += 10.0;
        }
    }

    // Type.
    if let Some(kind) = &record.kind {
        let value = kind.to_lowercase();
        if value == query_lower {
            score += 25.0;
        } else if value.contains(&query_lower) {
            score += 15.0;
        } else if query_words.iter().any(|word| value.contains(word)) {
            score += 8.0;
        }
    }

    // Remaining descriptive fields.
    for value in extra_field_values(record) {
        if value.contains(&query_lower) {
            score += 15.0;
        } else if query_words.iter().any(|word| value.contains(word)) {
            score += 6.0;
        }
    }

    // Fuzzy matching on the short name-like fields.
    let fuzzy_fields = [
        Some(record.title.as_str()),
        record.monastery.as_deref(),
        record.kind.as_deref(),
    ];
    for field in fuzzy_fields.into_iter().flatten() {
        let similarity = similarity::ratio(&query_lower, &field.to_lowercase());
        if similarity > 0.7 {
            score += similarity * 10.0;
        } else if similarity > 0.5 {
            score += similarity * 5.0;
        }
    }

    // Coverage bonus for multi-word queries that match most of their words.
    if query_words.len() > 1 && words_found as f64 >= query_words.len() as f64 * 0.7 {
        score += 15.0;
    }

    score
}

/// The record's combined lowercase searchable text: display title,
/// description, tags, then descriptive fields, space-joined in that fixed
/// order. Location and date are deliberately not part of it.
fn searchable_text(record: &Record) -> String {
    let mut parts = vec![record.title.to_lowercase(), record.description.to_lowercase()];
    parts.extend(record.tags.iter().map(|tag| tag.to_lowercase()));
    if let Some(monastery) = &record.monastery {
        parts.push(monastery.to_lowercase());
    }
    if let Some(kind) = &record.kind {
        parts.push(kind.to_lowercase());
    }
    parts.extend(extra_field_values(record));
    parts.join(" ")
}

/// Lowercase string forms of the present descriptive fields, in fixed order:
/// year, artist, language, material, instruments, architect, photographer.
/// Instruments are joined with `", "` so each element stays matchable.
fn extra_field_values(record: &Record) -> Vec<String> {
    let mut values = Vec::new();
    let singles = [
        &record.year,
        &record.artist,
        &record.language,
        &record.material,
    ];
    for value in singles.into_iter().flatten() {
        values.push(value.to_lowercase());
    }
    if let Some(instruments) = &record.instruments {
        values.push(instruments.join(", ").to_lowercase());
    }
    for value in [&record.architect, &record.photographer].into_iter().flatten() {
        values.push(value.to_lowercase());
    }
    values
}
