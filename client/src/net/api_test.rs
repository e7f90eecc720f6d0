use super::*;

#[test]
fn search_failed_message_formats_status() {
    assert_eq!(search_failed_message(500), "search request failed: 500");
}

#[test]
fn classify_ok_response_has_rows() {
    assert_eq!(classify_search_status(200, true), Ok(true));
}

#[test]
fn classify_not_found_is_empty_result() {
    assert_eq!(classify_search_status(404, false), Ok(false));
}

#[test]
fn classify_other_failures_are_errors() {
    assert_eq!(classify_search_status(400, false), Err("search request failed: 400".to_owned()));
    assert_eq!(classify_search_status(503, false), Err("search request failed: 503".to_owned()));
}

#[test]
fn search_endpoint_is_under_api_prefix() {
    assert_eq!(PATIENT_SEARCH_ENDPOINT, "/api/patients/search");
}

#[test]
fn describe_failure_appends_server_detail() {
    assert_eq!(
        describe_failure("search request failed: 400".to_owned(), Some("last_name is required")),
        "search request failed: 400 (last_name is required)"
    );
}

#[test]
fn describe_failure_without_detail_keeps_message() {
    assert_eq!(describe_failure("search request failed: 502".to_owned(), None), "search request failed: 502");
    assert_eq!(describe_failure("search request failed: 502".to_owned(), Some("")), "search request failed: 502");
}
