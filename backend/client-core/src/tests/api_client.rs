// Unit tests for ApiClient in stub mode
// Live transport behavior is covered by integration_tests/

use crate::api_client::ApiClient;
use crate::endpoint::UserApi;
use crate::error::api_client::ApiClientError;
use crate::transport::StubRegistry;

use common::{HttpStatusCode, User};

use serde::Deserialize;

const USER_ONE_BODY: &str =
    r#"{"id":1,"name":"Leanne Graham","username":"Bret","email":"Sincere@april.biz"}"#;

/// The canonical stub scenario: one canned user for /users/1 decodes into
/// exactly that user.
#[tokio::test]
async fn given_stubbed_detail_when_executed_then_decodes_exact_user() {
    let mut stubs = StubRegistry::new();
    stubs.register("/users/1", 200, USER_ONE_BODY);
    let client = ApiClient::with_stubs(stubs);

    let user: User = client
        .execute(UserApi::GetUserDetail { id: 1 })
        .await
        .expect("stubbed detail should decode");

    assert_eq!(
        user,
        User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
        }
    );
}

/// A 404 must classify as BadStatus carrying the exact code; the empty body
/// must never reach the decoder.
#[tokio::test]
async fn given_stubbed_404_when_executed_then_bad_status_not_decode_error() {
    let mut stubs = StubRegistry::new();
    stubs.register("/users/999", 404, "");
    let client = ApiClient::with_stubs(stubs);

    let error = client
        .execute::<_, User>(UserApi::GetUserDetail { id: 999 })
        .await
        .expect_err("404 must fail");

    match error {
        ApiClientError::BadStatus { status, .. } => assert_eq!(status, HttpStatusCode(404)),
        other => panic!("expected BadStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn given_success_status_with_mismatched_body_when_executed_then_decode_error() {
    let mut stubs = StubRegistry::new();
    stubs.register("/users/1", 200, r#"{"id":"not-a-number","name":"x"}"#);
    let client = ApiClient::with_stubs(stubs);

    let error = client
        .execute::<_, User>(UserApi::GetUserDetail { id: 1 })
        .await
        .expect_err("shape mismatch must fail");

    assert!(
        matches!(error, ApiClientError::Decode { .. }),
        "expected Decode, got {error:?}"
    );
}

/// Two fetches against the same fixed stub data must yield structurally
/// equal lists.
#[tokio::test]
async fn given_stub_mode_when_list_fetched_twice_then_results_equal() {
    let client = ApiClient::new(true).expect("stub client builds");

    let first: Vec<User> = client
        .execute(UserApi::GetUsers)
        .await
        .expect("sample list decodes");
    let second: Vec<User> = client
        .execute(UserApi::GetUsers)
        .await
        .expect("sample list decodes");

    assert_eq!(first, second);
    assert!(!first.is_empty(), "sample data carries users");
}

/// camelCase wire keys match snake_case model fields through the
/// normalization pass.
#[tokio::test]
async fn given_camel_case_body_when_executed_then_fields_normalized() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Profile {
        user_name: String,
        base_url: String,
    }

    let mut stubs = StubRegistry::new();
    stubs.register(
        "/users/1",
        200,
        r#"{"userName":"Bret","baseURL":"https://april.biz"}"#,
    );
    let client = ApiClient::with_stubs(stubs);

    let profile: Profile = client
        .execute(UserApi::GetUserDetail { id: 1 })
        .await
        .expect("camelCase body should decode");

    assert_eq!(profile.user_name, "Bret");
    assert_eq!(profile.base_url, "https://april.biz");
}

#[tokio::test]
async fn given_stub_mode_when_detail_fetched_without_registration_then_sample_user_decoded() {
    let client = ApiClient::new(true).expect("stub client builds");

    let user: User = client
        .execute(UserApi::GetUserDetail { id: 1 })
        .await
        .expect("sample detail decodes");

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Leanne Graham");
}
