use super::*;
use crate::state::catalog::EntryKind;

fn catalog() -> Catalog<'static> {
    Catalog::builtin(6)
}

fn titles(results: &SearchResults<'_>) -> Vec<&'static str> {
    results.entries.iter().map(|e| e.title).collect()
}

// =============================================================
// Empty queries
// =============================================================

#[test]
fn empty_query_returns_first_six_as_popular() {
    let results = catalog().search("");
    assert_eq!(results.header, SearchHeader::Popular);
    assert_eq!(results.header.to_string(), "Popular items");
    assert_eq!(results.entries.len(), 6);
    let expected: Vec<_> = CATALOG.iter().take(6).collect();
    assert_eq!(results.entries, expected);
}

#[test]
fn whitespace_query_matches_empty_query() {
    assert_eq!(catalog().search("   "), catalog().search(""));
}

#[test]
fn popular_count_is_capped_by_catalog_size() {
    let small = Catalog::new(&CATALOG[..2], 6);
    assert_eq!(small.popular().entries.len(), 2);
}

// =============================================================
// Matching
// =============================================================

#[test]
fn compound_interest_finds_calculator_and_article() {
    let results = catalog().search("compound interest");
    let found = titles(&results);
    assert!(found.contains(&"Compound Interest Calculator"));
    assert!(found.contains(&"Understanding Compound Interest: A Complete Guide"));
    assert_eq!(results.header, SearchHeader::Found(found.len()));
    assert_eq!(results.header.to_string(), "Found 2 results");
}

#[test]
fn matching_is_case_insensitive_and_trimmed() {
    assert_eq!(catalog().search("  GEOMETRY "), catalog().search("geometry"));
}

#[test]
fn description_only_match_is_found() {
    let results = catalog().search("logarithms");
    assert_eq!(titles(&results), vec!["Scientific Calculator"]);
}

#[test]
fn single_match_uses_singular_label() {
    let results = catalog().search("trigonometry");
    assert_eq!(results.header, SearchHeader::Found(1));
    assert_eq!(results.header.to_string(), "Found 1 result");
}

#[test]
fn results_keep_catalog_order() {
    let results = catalog().search("calculat");
    let positions: Vec<usize> = results
        .entries
        .iter()
        .map(|e| CATALOG.iter().position(|c| c == *e).expect("entry from catalog"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn match_rule_holds_for_every_entry() {
    for query in ["area", "Calculator", "learn", "xyz", "percent"] {
        let results = catalog().search(query);
        let needle = query.to_lowercase();
        for entry in CATALOG {
            let expected =
                entry.title.to_lowercase().contains(&needle) || entry.description.to_lowercase().contains(&needle);
            assert_eq!(results.entries.contains(&entry), expected, "{query} vs {}", entry.title);
        }
    }
}

#[test]
fn no_match_carries_literal_query() {
    let results = catalog().search("zzzznotfound");
    assert!(results.is_empty());
    assert_eq!(results.header, SearchHeader::NoResults("zzzznotfound".to_owned()));
    assert!(results.header.to_string().contains("zzzznotfound"));
}

#[test]
fn search_is_deterministic() {
    assert_eq!(catalog().search("interest"), catalog().search("interest"));
}

#[test]
fn entry_kind_names() {
    assert_eq!(EntryKind::Calculator.as_str(), "calculator");
    assert_eq!(EntryKind::Article.as_str(), "article");
}

// =============================================================
// SearchState
// =============================================================

#[test]
fn state_starts_closed_without_results() {
    let state = SearchState::new(catalog());
    assert!(!state.is_open());
    assert!(state.results().is_none());
}

#[test]
fn opening_shows_popular_items() {
    let mut state = SearchState::new(catalog());
    state.open();
    assert!(state.is_open());
    let results = state.results().expect("results after open");
    assert_eq!(results.header, SearchHeader::Popular);
}

#[test]
fn input_recomputes_results() {
    let mut state = SearchState::new(catalog());
    state.open();
    state.input("probability");
    assert_eq!(state.query(), "probability");
    assert_eq!(state.results().map(|r| r.header.clone()), Some(SearchHeader::Found(1)));
    state.input("");
    assert_eq!(state.results().map(|r| r.header.clone()), Some(SearchHeader::Popular));
}

#[test]
fn closing_clears_query_and_results() {
    let mut state = SearchState::new(catalog());
    state.open();
    state.input("derivatives");
    state.close();
    assert!(!state.is_open());
    assert_eq!(state.query(), "");
    assert!(state.results().is_none());
}

#[test]
fn toggle_alternates_open_and_closed() {
    let mut state = SearchState::new(catalog());
    state.toggle();
    assert!(state.is_open());
    state.toggle();
    assert!(!state.is_open());
}

#[test]
fn selecting_closes_and_returns_url() {
    let mut state = SearchState::new(catalog());
    state.open();
    let url = state.select(&CATALOG[3]);
    assert_eq!(url, "calculators/compound-interest-calculator.html");
    assert!(!state.is_open());
}
