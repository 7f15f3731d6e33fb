use client_core::{ApiClient, ApiClientError, UserApi};
use common::{HttpStatusCode, User};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for the request executor against a real HTTP server
// These exercise the live transport end to end
// ============================================================================

const USERS_BODY: &str = r#"[
  {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz"},
  {"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv"}
]"#;

async fn server_with(route: &str, template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn given_2xx_and_matching_body_when_executed_then_list_decoded() {
    let server = server_with(
        "/users",
        ResponseTemplate::new(200).set_body_raw(USERS_BODY, "application/json"),
    )
    .await;
    let client = ApiClient::with_base_url(&server.uri()).expect("client builds");

    let users: Vec<User> = client
        .execute(UserApi::GetUsers)
        .await
        .expect("valid body should decode");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[1].username, "Antonette");
}

/// Status validation runs before decode: even a perfectly decodable body
/// must not rescue a non-2xx response.
#[tokio::test]
async fn given_500_with_decodable_body_when_executed_then_bad_status_with_exact_code() {
    let server = server_with(
        "/users",
        ResponseTemplate::new(500).set_body_raw(USERS_BODY, "application/json"),
    )
    .await;
    let client = ApiClient::with_base_url(&server.uri()).expect("client builds");

    let error = client
        .execute::<_, Vec<User>>(UserApi::GetUsers)
        .await
        .expect_err("500 must fail");

    match error {
        ApiClientError::BadStatus { status, .. } => assert_eq!(status, HttpStatusCode(500)),
        other => panic!("expected BadStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn given_404_with_junk_body_when_executed_then_bad_status_not_decode_error() {
    let server = server_with(
        "/users/999",
        ResponseTemplate::new(404).set_body_raw("not even json", "text/plain"),
    )
    .await;
    let client = ApiClient::with_base_url(&server.uri()).expect("client builds");

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
async fn given_2xx_with_missing_field_when_executed_then_decode_error() {
    let body = r#"[{"id": 1, "name": "Leanne Graham", "username": "Bret"}]"#;
    let server = server_with(
        "/users",
        ResponseTemplate::new(200).set_body_raw(body, "application/json"),
    )
    .await;
    let client = ApiClient::with_base_url(&server.uri()).expect("client builds");

    let error = client
        .execute::<_, Vec<User>>(UserApi::GetUsers)
        .await
        .expect_err("missing email must fail");

    assert!(
        matches!(error, ApiClientError::Decode { .. }),
        "expected Decode, got {error:?}"
    );
}

#[tokio::test]
async fn given_2xx_with_malformed_json_when_executed_then_decode_error() {
    let server = server_with(
        "/users",
        ResponseTemplate::new(200).set_body_raw("{not json", "application/json"),
    )
    .await;
    let client = ApiClient::with_base_url(&server.uri()).expect("client builds");

    let error = client
        .execute::<_, Vec<User>>(UserApi::GetUsers)
        .await
        .expect_err("malformed body must fail");

    assert!(
        matches!(error, ApiClientError::Decode { .. }),
        "expected Decode, got {error:?}"
    );
}

/// A call that never reaches a server is a transport failure; decode is
/// never attempted.
#[tokio::test]
async fn given_unreachable_server_when_executed_then_transport_error() {
    let client = ApiClient::with_base_url("http://127.0.0.1:65534").expect("client builds");

    let error = client
        .execute::<_, Vec<User>>(UserApi::GetUsers)
        .await
        .expect_err("nothing listens on that port");

    assert!(
        matches!(error, ApiClientError::Transport { .. }),
        "expected Transport, got {error:?}"
    );
}

/// The wire may spell fields in camelCase; the list endpoint still decodes.
#[tokio::test]
async fn given_camel_case_wire_body_when_executed_then_decoded() {
    #[derive(Debug, serde::Deserialize)]
    struct Company {
        catch_phrase: String,
    }

    let body = r#"{"catchPhrase": "Multi-layered client-server neural-net"}"#;
    let server = server_with(
        "/users/1",
        ResponseTemplate::new(200).set_body_raw(body, "application/json"),
    )
    .await;
    let client = ApiClient::with_base_url(&server.uri()).expect("client builds");

    let company: Company = client
        .execute(UserApi::GetUserDetail { id: 1 })
        .await
        .expect("camelCase body should decode");

    assert_eq!(company.catch_phrase, "Multi-layered client-server neural-net");
}
