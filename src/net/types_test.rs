use super::*;

// =============================================================
// parse_error_messages
// =============================================================

#[test]
fn parses_messages_in_order() {
    let body = r#"{"errors":[{"message":"Email required"},{"message":"Name required"}]}"#;
    assert_eq!(
        parse_error_messages(body),
        Some(vec!["Email required".to_owned(), "Name required".to_owned()])
    );
}

#[test]
fn ignores_extra_fields_on_entries() {
    let body = r#"{"error":"Validation errors","errors":[{"code":"TYPE_EMAIL","field":"email","message":"should be an email"}]}"#;
    assert_eq!(parse_error_messages(body), Some(vec!["should be an email".to_owned()]));
}

#[test]
fn non_json_body_is_none() {
    assert_eq!(parse_error_messages("<html>Bad Gateway</html>"), None);
}

#[test]
fn missing_errors_field_is_none() {
    assert_eq!(parse_error_messages(r#"{"error":"Form not found"}"#), None);
}

#[test]
fn empty_errors_array_is_an_empty_list() {
    assert_eq!(parse_error_messages(r#"{"errors":[]}"#), Some(Vec::new()));
}

#[test]
fn entry_without_message_is_none() {
    assert_eq!(parse_error_messages(r#"{"errors":[{"field":"email"}]}"#), None);
}

// =============================================================
// TransportResponse
// =============================================================

#[test]
fn every_2xx_status_is_success() {
    for status in [200, 201, 204, 299] {
        assert!(TransportResponse { status, body: None }.is_success());
    }
}

#[test]
fn non_2xx_status_is_not_success() {
    for status in [199, 300, 302, 400, 422, 500] {
        assert!(!TransportResponse { status, body: None }.is_success());
    }
}

// =============================================================
// FormSnapshot
// =============================================================

#[test]
fn snapshot_lookup_returns_first_value() {
    let snapshot = FormSnapshot::new(vec![
        ("topic".to_owned(), "hiring".to_owned()),
        ("topic".to_owned(), "other".to_owned()),
    ]);
    assert_eq!(snapshot.get("topic"), Some("hiring"));
    assert_eq!(snapshot.get("email"), None);
}
