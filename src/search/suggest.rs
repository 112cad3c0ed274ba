//! Autocomplete suggestions from title matches and a fixed vocabulary.

use crate::dataset::types::Record;

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Fixed vocabulary appended after title matches, in this order.
pub const CATEGORY_SUGGESTIONS: [&str; 7] = [
    "archives",
    "monasteries",
    "festivals",
    "thangka",
    "manuscripts",
    "rumtek",
    "pemayangtse",
];

/// Up to [`MAX_SUGGESTIONS`] suggestions for a partial query: display titles
/// containing the query (in dataset order), then vocabulary entries
/// containing it that were not already collected.
pub fn suggest(query: &str, records: &[Record]) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let mut suggestions: Vec<String> = Vec::new();

    for record in records {
        if suggestions.len() >= MAX_SUGGESTIONS {
            break;
        }
        if record.title.to_lowercase().contains(&query_lower) {
            suggestions.push(record.title.clone());
        }
    }

    for entry in CATEGORY_SUGGESTIONS {
        if entry.contains(&query_lower) && !suggestions.iter().any(|s| s == entry) {
            suggestions.push(entry.to_string());
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
