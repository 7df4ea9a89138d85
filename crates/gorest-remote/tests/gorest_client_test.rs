//! Integration tests for `GoRestClient` against a mock GoREST server.

use gorest_config::RemoteConfig;
use gorest_core::{GorestError, Post, ResourceId, ToDo, User};
use gorest_remote::{GoRestClient, RemoteSource, PAGES_HEADER};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, token: Option<&str>) -> GoRestClient {
    let config = RemoteConfig {
        base_url: server.uri(),
        access_token: token.map(str::to_string),
        timeout_secs: 5,
        ..RemoteConfig::default()
    };
    GoRestClient::new(&config).expect("Failed to build client")
}

#[tokio::test]
async fn test_fetch_one_decodes_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/6940"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 6940,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "gender": "female",
            "status": "active"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user: User = client_for(&server, None)
        .fetch_one(ResourceId(6940))
        .await
        .unwrap();

    assert_eq!(user.id, ResourceId(6940));
    assert_eq!(user.name, "Ada Lovelace");
}

#[tokio::test]
async fn test_fetch_one_missing_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Resource not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .fetch_one::<Post>(ResourceId(1))
        .await
        .unwrap_err();

    assert!(matches!(err, GorestError::NotFound { resource_type: "Post", .. }));
}

#[tokio::test]
async fn test_fetch_one_server_error_is_external() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/3"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .fetch_one::<ToDo>(ResourceId(3))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 502);
}

#[tokio::test]
async fn test_fetch_page_reads_page_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(PAGES_HEADER, "7")
                .set_body_json(json!([
                    {"id": 11, "user_id": 1, "title": "a", "body": "b"},
                    {"id": 12, "user_id": 1, "title": "c", "body": "d"}
                ])),
        )
        .mount(&server)
        .await;

    let page = client_for(&server, None).fetch_page::<Post>(2).await.unwrap();

    assert_eq!(page.total_pages, 7);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].id, ResourceId(12));
}

#[tokio::test]
async fn test_fetch_page_without_header_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .fetch_page::<User>(1)
        .await
        .unwrap_err();

    match err {
        GorestError::ExternalService { message, .. } => assert!(message.contains(PAGES_HEADER)),
        other => panic!("Expected ExternalService, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bearer_token_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "name": "n", "email": "e", "gender": "g", "status": "s"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user: User = client_for(&server, Some("secret-token"))
        .fetch_one(ResourceId(1))
        .await
        .unwrap();

    assert_eq!(user.id, ResourceId(1));
}

#[tokio::test]
async fn test_malformed_body_is_external() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .fetch_one::<User>(ResourceId(1))
        .await
        .unwrap_err();

    assert!(matches!(err, GorestError::ExternalService { .. }));
}
