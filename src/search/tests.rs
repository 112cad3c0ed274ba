//! Search Module Tests
//!
//! Validates the retrieval pipeline: string similarity, relevance scoring,
//! ranking policy, suggestion generation, and API type serialization.
//!
//! ## Test Scopes
//! - **Similarity**: The longest-matching-blocks ratio.
//! - **Scorer**: Tiered and additive score contributions.
//! - **Engine**: Ordering, limits, and the multi-word result policy.
//! - **Suggest**: Title and vocabulary suggestions.
//! - **Types**: JSON compatibility for API DTOs.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::Extension;

    use crate::dataset::types::{Category, Record};
    use crate::dataset::Dataset;
    use crate::search::engine::rank;
    use crate::search::handlers::{
        handle_search, handle_suggestions, SearchParams, SuggestionParams,
    };
    use crate::search::scorer::score;
    use crate::search::similarity::ratio;
    use crate::search::suggest::suggest;
    use crate::search::types::{SearchResponse, SearchResult};

    const EPS: f64 = 1e-9;

    fn record(id: &str, title: &str, description: &str, tags: &[&str]) -> Record {
        Record {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            category: Category::Archive,
            redirect_url: "/archives#test".to_string(),
            monastery: None,
            kind: None,
            year: None,
            location: None,
            date: None,
            artist: None,
            language: None,
            material: None,
            instruments: None,
            architect: None,
            photographer: None,
        }
    }

    // ============================================================
    // SIMILARITY TESTS
    // ============================================================

    #[test]
    fn test_ratio_identical_strings() {
        assert!((ratio("monastery", "monastery") - 1.0).abs() < EPS);
    }

    #[test]
    fn test_ratio_disjoint_strings() {
        assert!(ratio("abc", "xyz").abs() < EPS);
    }

    #[test]
    fn test_ratio_both_empty() {
        assert!((ratio("", "") - 1.0).abs() < EPS);
    }

    #[test]
    fn test_ratio_partial_overlap() {
        // Longest block "bcd" covers 3 of each string: 2*3 / (4+4).
        assert!((ratio("abcd", "bcde") - 0.75).abs() < EPS);
    }

    #[test]
    fn test_ratio_recurses_around_longest_block() {
        // "monast" (6) plus "ry" (2) on the right: 2*8 / (8+9).
        assert!((ratio("monastry", "monastery") - 16.0 / 17.0).abs() < EPS);
    }

    #[test]
    fn test_ratio_symmetric_enough_for_thresholds() {
        let forward = ratio("thangka", "ancient thangka paintings");
        let backward = ratio("ancient thangka paintings", "thangka");
        assert!((forward - backward).abs() < EPS);
        assert!(forward < 0.5, "short query vs long title stays below 0.5");
    }

    // ============================================================
    // SCORER TESTS - synthetic records
    // ============================================================

    #[test]
    fn test_score_no_match_is_zero() {
        let rec = record("r1", "Alpha", "Beta text", &["zzz"]);
        assert!(score("qqqq", &rec).abs() < EPS);
    }

    #[test]
    fn test_score_case_insensitive() {
        let rec = record("r1", "Alpha", "Beta text", &["zzz"]);
        assert!((score("ZZZ", &rec) - score("zzz", &rec)).abs() < EPS);
    }

    #[test]
    fn test_score_tag_exact_beats_partial() {
        // Exact tag: phrase 50 + word 15 + tag 30 = 95.
        let exact = record("r1", "Alpha", "Beta text", &["zzz"]);
        assert!((score("zzz", &exact) - 95.0).abs() < EPS);

        // Partial tag: phrase 50 + word 15 + tag 20 = 85.
        let partial = record("r2", "Alpha", "Beta text", &["zzzy"]);
        assert!((score("zzz", &partial) - 85.0).abs() < EPS);
    }

    #[test]
    fn test_score_tag_word_tier() {
        // "zzz" found in text (15) and in the tag via the word tier (12);
        // no phrase, no all-words bonus, no coverage (1 of 2 words).
        let rec = record("r1", "Alpha", "Beta text", &["zzzy"]);
        assert!((score("zzz qqq", &rec) - 27.0).abs() < EPS);
    }

    #[test]
    fn test_score_description_phrase_and_multiword_bonuses() {
        // phrase 50 + all-words 40 + words 30 + description 25 + coverage 15.
        let rec = record("r1", "Alpha", "Beta text", &["zzz"]);
        assert!((score("beta text", &rec) - 160.0).abs() < EPS);
    }

    #[test]
    fn test_score_description_word_tier() {
        // "beta" in text (15) and in the description (8); "qqq" nowhere.
        let rec = record("r1", "Alpha", "Beta text", &["zzz"]);
        assert!((score("beta qqq", &rec) - 23.0).abs() < EPS);
    }

    #[test]
    fn test_score_type_exact_tier() {
        let mut rec = record("r1", "Alpha", "Beta text", &["zzz"]);
        rec.kind = Some("Art".to_string());
        // phrase 50 + word 15 + type exact 25 + type fuzzy 1.0*10 = 100.
        assert!((score("art", &rec) - 100.0).abs() < EPS);
    }

    #[test]
    fn test_score_type_substring_tier() {
        let mut rec = record("r1", "Alpha", "Beta text", &["zzz"]);
        rec.kind = Some("Artwork".to_string());
        // phrase 50 + word 15 + type substring 15 + type fuzzy 0.6*5 = 83.
        assert!((score("art", &rec) - 83.0).abs() < EPS);
    }

    #[test]
    fn test_score_monastery_field_tiers() {
        let mut rec = record("r1", "Alpha", "Beta text", &["zzz"]);
        rec.monastery = Some("Rumtek Monastery".to_string());

        let substring = score("rumtek monastery", &rec);
        let word_only = score("monastery qqq", &rec);
        assert!(substring > word_only);
        // Word tier: "monastery" in text 15 + monastery field 10, plus the
        // fuzzy bonus the monastery field still earns against the query.
        let expected = 25.0 + ratio("monastery qqq", "rumtek monastery") * 5.0;
        assert!((word_only - expected).abs() < EPS);
    }

    #[test]
    fn test_score_all_words_bonus_needs_multiple_words() {
        let one_word = record("r1", "Alpha", "Beta text", &["zzz"]);
        // Single word fully present never earns the 40-point bonus: the
        // score stays at phrase 50 + word 15 + description 25 = 90.
        assert!((score("beta", &one_word) - 90.0).abs() < EPS);
    }

    #[test]
    fn test_score_instruments_are_matchable() {
        let mut rec = record("r1", "Alpha", "Beta text", &["zzz"]);
        rec.instruments = Some(vec!["Dungchen".to_string(), "Gyaling".to_string()]);
        // phrase 50 + word 15 + field substring 15 = 80.
        assert!((score("dungchen", &rec) - 80.0).abs() < EPS);
    }

    // ============================================================
    // SCORER TESTS - real dataset
    // ============================================================

    #[test]
    fn test_score_exact_title_at_least_100() {
        let dataset = Dataset::load().unwrap();
        for rec in dataset.records() {
            let s = score(&rec.title, rec);
            assert!(s >= 100.0, "{}: exact-title score {} < 100", rec.id, s);
        }
    }

    #[test]
    fn test_score_thangka_archive_1() {
        let dataset = Dataset::load().unwrap();
        let archive_1 = &dataset.records()[0];
        assert_eq!(archive_1.id, "archive_1");
        // phrase 50 + word 15 + title partial 70 + exact tag 30 = 165.
        assert!((score("thangka", archive_1) - 165.0).abs() < EPS);
    }

    // ============================================================
    // ENGINE TESTS
    // ============================================================

    #[test]
    fn test_rank_never_exceeds_limit() {
        let dataset = Dataset::load().unwrap();
        for limit in [1, 3, 10] {
            let results = rank("buddhist", dataset.records(), limit);
            assert!(results.len() <= limit);
        }
    }

    #[test]
    fn test_rank_descending_order() {
        let dataset = Dataset::load().unwrap();
        let results = rank("monastery", dataset.records(), 10);
        for pair in results.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_rank_equal_scores_keep_dataset_order() {
        let a = record("first", "Same Title", "Same words here", &["same"]);
        let b = record("second", "Same Title", "Same words here", &["same"]);
        let records = vec![a, b];
        let results = rank("same", &records, 10);

        assert_eq!(results.len(), 2);
        assert!((results[0].1 - results[1].1).abs() < EPS);
        assert_eq!(results[0].0.id, "first");
        assert_eq!(results[1].0.id, "second");
    }

    #[test]
    fn test_rank_no_match_is_empty() {
        let dataset = Dataset::load().unwrap();
        assert!(rank("xyzabc123", dataset.records(), 10).is_empty());
    }

    #[test]
    fn test_rank_multi_word_filters_weak_matches() {
        // Scores only through fuzzy title similarity (0.8 * 10 = 8), below
        // the multi-word floor of 10.
        let weak = record("weak", "Monastery", "Old stone building", &["stone"]);
        // Full-phrase title match, far above the floor.
        let strong = record("strong", "Monastry Xq Files", "Container of things", &["files"]);
        let records = vec![weak, strong];

        let results = rank("monastry xq", &records, 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.id, "strong");
    }

    #[test]
    fn test_rank_single_word_keeps_weak_matches() {
        // The same fuzzy-only match survives a single-word query: the
        // score floor applies to multi-word queries only.
        let weak = record("weak", "Monastery", "Old stone building", &["stone"]);
        let records = vec![weak];

        let results = rank("monastry", &records, 5);
        assert_eq!(results.len(), 1);
        assert!(results[0].1 > 0.0 && results[0].1 < 10.0);
    }

    #[test]
    fn test_rank_multi_word_results_all_reach_floor() {
        let dataset = Dataset::load().unwrap();
        let results = rank("rumtek monastery", dataset.records(), 10);

        assert!(!results.is_empty());
        for (_, s) in &results {
            assert!(*s >= 10.0);
        }

        let ids: Vec<&str> = results.iter().map(|(r, _)| r.id.as_str()).collect();
        assert_eq!(ids[0], "monastery_1");
        // Every archive held at Rumtek ranks above the generic matches.
        for expected in ["archive_1", "archive_4", "archive_7", "archive_10"] {
            assert!(ids.contains(&expected), "missing {expected}");
        }
    }

    // ============================================================
    // SUGGEST TESTS
    // ============================================================

    #[test]
    fn test_suggest_title_then_vocabulary() {
        let dataset = Dataset::load().unwrap();
        let suggestions = suggest("than", dataset.records());
        assert_eq!(suggestions, vec!["Ancient Thangka Paintings", "thangka"]);
    }

    #[test]
    fn test_suggest_caps_at_five_in_dataset_order() {
        let dataset = Dataset::load().unwrap();
        let suggestions = suggest("a", dataset.records());
        assert_eq!(
            suggestions,
            vec![
                "Ancient Thangka Paintings",
                "Sacred Manuscripts",
                "Ceremonial Artifacts",
                "Historical Photographs",
                "Musical Instruments",
            ]
        );
    }

    #[test]
    fn test_suggest_case_insensitive() {
        let dataset = Dataset::load().unwrap();
        let suggestions = suggest("RUM", dataset.records());
        assert_eq!(
            suggestions,
            vec!["Musical Instruments", "Rumtek Monastery", "rumtek"]
        );
    }

    #[test]
    fn test_suggest_vocabulary_fills_remaining_slot() {
        let dataset = Dataset::load().unwrap();
        let suggestions = suggest("monaster", dataset.records());
        assert_eq!(
            suggestions,
            vec![
                "Monastery Chronicles",
                "Rumtek Monastery",
                "Pemayangtse Monastery",
                "Tashiding Monastery",
                "monasteries",
            ]
        );
    }

    #[test]
    fn test_suggest_no_match_is_empty() {
        let dataset = Dataset::load().unwrap();
        assert!(suggest("xyzabc123", dataset.records()).is_empty());
    }

    // ============================================================
    // HANDLER TESTS - boundary validation
    // ============================================================

    fn shared_dataset() -> Extension<Arc<Dataset>> {
        Extension(Arc::new(Dataset::load().unwrap()))
    }

    #[tokio::test]
    async fn test_handle_search_rejects_empty_query() {
        let params = Query(SearchParams {
            q: String::new(),
            limit: None,
        });
        let (status, _) = handle_search(params, shared_dataset())
            .await
            .err()
            .expect("empty query must be rejected");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handle_search_rejects_whitespace_query() {
        let params = Query(SearchParams {
            q: "   ".to_string(),
            limit: None,
        });
        let (status, _) = handle_search(params, shared_dataset())
            .await
            .err()
            .expect("whitespace-only query must be rejected");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handle_search_rejects_out_of_range_limit() {
        for limit in [0, 51] {
            let params = Query(SearchParams {
                q: "thangka".to_string(),
                limit: Some(limit),
            });
            let (status, _) = handle_search(params, shared_dataset())
                .await
                .err()
                .expect("out-of-range limit must be rejected");
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_handle_search_accepts_boundary_limits() {
        for limit in [1, 50] {
            let params = Query(SearchParams {
                q: "thangka".to_string(),
                limit: Some(limit),
            });
            let response = handle_search(params, shared_dataset())
                .await
                .expect("in-range limit must be accepted");
            assert_eq!(response.0.query, "thangka");
            assert_eq!(response.0.search_type, "ai_enhanced");
            assert!(response.0.results.len() <= limit);
        }
    }

    #[tokio::test]
    async fn test_handle_suggestions_rejects_empty_query() {
        for q in ["", "  "] {
            let params = Query(SuggestionParams { q: q.to_string() });
            let (status, _) = handle_suggestions(params, shared_dataset())
                .await
                .err()
                .expect("empty query must be rejected");
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_handle_suggestions_echoes_query() {
        let params = Query(SuggestionParams {
            q: "than".to_string(),
        });
        let response = handle_suggestions(params, shared_dataset()).await.unwrap();
        assert_eq!(response.0.query, "than");
        assert_eq!(
            response.0.suggestions,
            vec!["Ancient Thangka Paintings", "thangka"]
        );
    }

    // ============================================================
    // TYPES TESTS
    // ============================================================

    #[test]
    fn test_search_result_serializes_kind_as_type() {
        let dataset = Dataset::load().unwrap();
        let archive_1 = &dataset.records()[0];
        let result = SearchResult::from_record(archive_1, 165.0);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "Art");
        assert_eq!(json["category"], "archive");
        assert_eq!(json["relevance_score"], 165.0);
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_search_result_omits_absent_fields() {
        let dataset = Dataset::load().unwrap();
        let monastery_1 = &dataset.records()[10];
        assert_eq!(monastery_1.id, "monastery_1");

        let json = serde_json::to_value(SearchResult::from_record(monastery_1, 1.0)).unwrap();
        assert_eq!(json["location"], "Gangtok, Sikkim");
        assert!(json.get("type").is_none());
        assert!(json.get("monastery").is_none());
        assert!(json.get("date").is_none());
    }

    #[test]
    fn test_search_response_round_trip() {
        let dataset = Dataset::load().unwrap();
        let results: Vec<SearchResult> = rank("thangka", dataset.records(), 10)
            .into_iter()
            .map(|(rec, s)| SearchResult::from_record(rec, s))
            .collect();

        let response = SearchResponse {
            query: "thangka".to_string(),
            total_results: results.len(),
            results,
            search_type: "ai_enhanced".to_string(),
            suggestions: suggest("thangka", dataset.records()),
        };

        let json = serde_json::to_string(&response).unwrap();
        let restored: SearchResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.query, "thangka");
        assert_eq!(restored.search_type, "ai_enhanced");
        assert_eq!(restored.total_results, restored.results.len());
        assert_eq!(restored.results[0].id, "archive_1");
    }
}
