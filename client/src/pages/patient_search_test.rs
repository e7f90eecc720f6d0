use super::*;

#[test]
fn validate_last_name_trims_input() {
    assert_eq!(validate_last_name("  Lopez "), Ok("Lopez".to_owned()));
}

#[test]
fn validate_last_name_rejects_blank_input() {
    assert_eq!(validate_last_name(""), Err(EMPTY_QUERY_MESSAGE));
    assert_eq!(validate_last_name(" \t "), Err(EMPTY_QUERY_MESSAGE));
}

#[test]
fn validate_last_name_keeps_inner_spaces() {
    assert_eq!(validate_last_name(" de la Cruz "), Ok("de la Cruz".to_owned()));
}
