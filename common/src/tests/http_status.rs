use crate::HttpStatusCode;

/// The executor accepts exactly [200, 299]; both boundaries matter because a
/// 300 redirect must not be treated as success.
#[test]
fn given_boundary_codes_when_is_success_then_range_is_inclusive() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(HttpStatusCode(299).is_success());

    assert!(!HttpStatusCode(199).is_success());
    assert!(!HttpStatusCode(300).is_success());
    assert!(!HttpStatusCode(404).is_success());
    assert!(!HttpStatusCode(500).is_success());
}

#[test]
fn given_4xx_and_5xx_codes_when_classified_then_client_and_server_errors_split() {
    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(404).is_server_error());

    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(503).is_client_error());

    assert!(!HttpStatusCode(200).is_client_error());
    assert!(!HttpStatusCode(200).is_server_error());
}

#[test]
fn given_u16_when_converted_then_code_preserved_and_displayed() {
    let status = HttpStatusCode::from(418);

    assert_eq!(status, HttpStatusCode(418));
    assert_eq!(format!("{status}"), "418");
}
