use super::*;

fn row(id: i64, name: &str) -> PatientSummary {
    PatientSummary { id, name: name.to_owned(), dob: "1980-01-01".to_owned() }
}

#[test]
fn default_state_is_idle_and_empty() {
    let state = SearchState::default();
    assert!(!state.loading);
    assert!(state.results.is_empty());
    assert_eq!(state.message, None);
    assert_eq!(state.searched_for, None);
}

#[test]
fn begin_sets_loading_and_remembers_query() {
    let mut state = SearchState::default();
    state.begin("Doe");
    assert!(state.loading);
    assert_eq!(state.searched_for.as_deref(), Some("Doe"));
    assert_eq!(state.message.as_deref(), Some("Searching..."));
}

#[test]
fn finish_with_rows_stores_results_and_clears_message() {
    let mut state = SearchState::default();
    state.begin("Doe");
    state.finish(Ok(vec![row(1, "Doe John"), row(2, "Doe Jane")]));
    assert!(!state.loading);
    assert_eq!(state.results.len(), 2);
    assert_eq!(state.message, None);
}

#[test]
fn finish_with_no_rows_reports_no_matches() {
    let mut state = SearchState { results: vec![row(1, "Old Row")], ..SearchState::default() };
    state.begin("Zed");
    state.finish(Ok(Vec::new()));
    assert!(state.results.is_empty());
    assert_eq!(state.message.as_deref(), Some(NO_MATCHES_MESSAGE));
}

#[test]
fn finish_with_error_reports_failure() {
    let mut state = SearchState::default();
    state.begin("Doe");
    state.finish(Err("search request failed: 500".to_owned()));
    assert!(!state.loading);
    assert!(state.results.is_empty());
    assert_eq!(state.message.as_deref(), Some("Search failed: search request failed: 500"));
}

#[test]
fn reject_keeps_previous_results() {
    let mut state = SearchState { results: vec![row(1, "Doe John")], ..SearchState::default() };
    state.reject("Enter a last name to search.");
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.message.as_deref(), Some("Enter a last name to search."));
}

#[test]
fn begin_clears_previous_results() {
    let mut state = SearchState { results: vec![row(1, "Doe John")], ..SearchState::default() };
    state.begin("Smith");
    assert!(state.results.is_empty());
    assert_eq!(state.results_caption(), None);
}

#[test]
fn caption_names_query_of_finished_search() {
    let mut state = SearchState::default();
    assert_eq!(state.results_caption(), None);
    state.begin("Doe");
    state.finish(Ok(vec![row(1, "Doe John")]));
    assert_eq!(state.results_caption().as_deref(), Some("Results for \"Doe\""));
}

#[test]
fn caption_hidden_when_search_finds_nothing() {
    let mut state = SearchState::default();
    state.begin("Zed");
    state.finish(Ok(Vec::new()));
    assert_eq!(state.results_caption(), None);
}

#[test]
fn caption_survives_rejected_resubmit() {
    let mut state = SearchState::default();
    state.begin("Doe");
    state.finish(Ok(vec![row(1, "Doe John")]));
    state.query = "   ".to_owned();
    state.reject("Enter a last name to search.");
    assert_eq!(state.results_caption().as_deref(), Some("Results for \"Doe\""));
}
