//! Matching rule: fields, case, literals, threshold, cap and order.

use crate::common::{many_matches_fixture, windows_fixture};
use sitesearch::testing::{index_of, make_doc_with};
use sitesearch::{filter_documents, match_documents, Matcher, SearchConfig};

#[test]
fn description_is_a_match_field() {
    let index = windows_fixture();
    let results = match_documents("powershell", &index);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].href, "/qa/install-windows");
}

#[test]
fn mixed_case_query_matches_mixed_case_fields() {
    let index = windows_fixture();
    assert_eq!(match_documents("GoOgLe", &index).len(), 1);
}

#[test]
fn query_whitespace_is_significant() {
    let index = windows_fixture();
    assert_eq!(match_documents("mcp servers", &index).len(), 1);
    assert!(match_documents("mcp  servers", &index).is_empty());
    assert!(match_documents(" mcp", &index).is_empty());
}

#[test]
fn special_characters_are_matched_literally() {
    let index = index_of(vec![
        make_doc_with("Edit settings.json", "", "Configuration", "/a"),
        make_doc_with("Settings overview", "", "Configuration", "/b"),
        make_doc_with("Use (parentheses) [and] brackets", "", "Usage", "/c"),
    ]);
    assert_eq!(match_documents("s.j", &index).len(), 1);
    assert_eq!(match_documents("(par", &index).len(), 1);
    assert_eq!(match_documents("[and]", &index).len(), 1);
    assert!(match_documents("s.*n", &index).is_empty());
    assert!(match_documents("^edit", &index).is_empty());
}

#[test]
fn non_ascii_queries_fold_case() {
    let index = index_of(vec![make_doc_with("Überblick", "", "Deutsch", "/de")]);
    assert_eq!(match_documents("übe", &index).len(), 1);
    assert_eq!(match_documents("ÜBER", &index).len(), 1);
}

#[test]
fn two_character_non_ascii_query_is_active() {
    assert!(Matcher::default().is_active("éa"));
    assert!(!Matcher::default().is_active("é"));
}

#[test]
fn cap_keeps_the_first_matches() {
    let index = many_matches_fixture();
    let capped = match_documents("in", &index);
    let all = filter_documents("in", &index);
    assert_eq!(capped.len(), 5);
    assert_eq!(all.len(), 7);
    assert_eq!(capped[..], all[..5]);
}

#[test]
fn matcher_from_config_uses_its_limits() {
    let config = SearchConfig {
        min_query_chars: 3,
        max_results: 2,
        ..SearchConfig::default()
    };
    let matcher = Matcher::from_config(&config);
    let index = many_matches_fixture();
    assert!(matcher.find("in", &index).is_empty());
    assert_eq!(matcher.find("ing", &index).len(), 2);
}

#[test]
fn empty_index_finds_nothing() {
    let index = sitesearch::DocumentIndex::empty();
    assert!(match_documents("gemini", &index).is_empty());
    assert!(filter_documents("gemini", &index).is_empty());
}
