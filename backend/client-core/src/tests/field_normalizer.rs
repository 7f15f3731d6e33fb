// Unit tests for field_normalizer module
// Tests key transformations and JSON recursion

use crate::field_normalizer::{normalize_json, normalize_key};
use serde_json::json;

// ============================================
// UNIT TESTS: Individual Key Transformations
// ============================================

#[test]
fn given_camel_case_keys_when_normalize_key_then_converts_to_snake_case() {
    assert_eq!(normalize_key("userName"), "user_name");
    assert_eq!(normalize_key("emailAddress"), "email_address");
    assert_eq!(normalize_key("createdAt"), "created_at");
    assert_eq!(normalize_key("phoneNumberHome"), "phone_number_home");
}

/// Acronym runs are the cases naive converters get wrong
/// (userID must become user_id, not user_i_d).
#[test]
fn given_acronym_keys_when_normalize_key_then_run_collapses_to_one_word() {
    assert_eq!(normalize_key("userID"), "user_id");
    assert_eq!(normalize_key("baseURL"), "base_url");
    assert_eq!(normalize_key("HTMLBody"), "html_body");
    assert_eq!(normalize_key("requestID"), "request_id");
}

#[test]
fn given_snake_case_keys_when_normalize_key_then_returns_unchanged() {
    assert_eq!(normalize_key("user_name"), "user_name");
    assert_eq!(normalize_key("id"), "id");
    assert_eq!(normalize_key("email"), "email");
}

#[test]
fn given_leading_capital_when_normalize_key_then_no_leading_underscore() {
    assert_eq!(normalize_key("Name"), "name");
    assert_eq!(normalize_key("UserName"), "user_name");
}

#[test]
fn given_digits_in_key_when_normalize_key_then_boundary_after_digit() {
    assert_eq!(normalize_key("address2Line"), "address2_line");
}

// ============================================
// UNIT TESTS: JSON Recursion
// ============================================

#[test]
fn given_nested_objects_when_normalize_json_then_all_keys_normalized() {
    let input = json!({
        "userName": "Bret",
        "company": { "catchPhrase": "Multi-layered client-server neural-net" }
    });

    let normalized = normalize_json(input);

    assert_eq!(normalized["user_name"], "Bret");
    assert_eq!(
        normalized["company"]["catch_phrase"],
        "Multi-layered client-server neural-net"
    );
}

#[test]
fn given_array_of_objects_when_normalize_json_then_each_element_normalized() {
    let input = json!([{ "userName": "Bret" }, { "userName": "Antonette" }]);

    let normalized = normalize_json(input);

    assert_eq!(normalized[0]["user_name"], "Bret");
    assert_eq!(normalized[1]["user_name"], "Antonette");
}

#[test]
fn given_scalar_values_when_normalize_json_then_values_untouched() {
    let input = json!({ "displayName": "Leanne Graham", "id": 1, "active": true });

    let normalized = normalize_json(input);

    // Only keys change; string values keep their casing.
    assert_eq!(normalized["display_name"], "Leanne Graham");
    assert_eq!(normalized["id"], 1);
    assert_eq!(normalized["active"], true);
}
