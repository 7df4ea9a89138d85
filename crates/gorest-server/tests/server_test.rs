//! Boots the server on an ephemeral port and drives it over HTTP.

use gorest_config::AppConfig;
use gorest_server::app::AppBuilder;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(remote: &MockServer) -> AppConfig {
    let mut config = AppConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.database.url = "sqlite::memory:".to_string();
    config.remote.base_url = remote.uri();
    config
}

#[tokio::test]
async fn test_server_serves_and_shuts_down() {
    let remote = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "gender": "female",
            "status": "active"
        })))
        .mount(&remote)
        .await;

    let app = AppBuilder::new()
        .with_config(test_config(&remote))
        .build()
        .await
        .expect("Failed to build app");
    let base = format!("http://127.0.0.1:{}", app.port().unwrap());

    let (stop, stopped) = oneshot::channel::<()>();
    let server = tokio::spawn(app.run_until(async {
        let _ = stopped.await;
    }));

    let client = reqwest::Client::new();

    let ready = client.get(format!("{base}/ready")).send().await.unwrap();
    assert_eq!(ready.status(), 200);

    let imported = client
        .post(format!("{base}/api/users/upload/12"))
        .send()
        .await
        .unwrap();
    assert_eq!(imported.status(), 201);

    let users: Value = client
        .get(format!("{base}/api/users/all"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users[0]["name"], "Grace Hopper");

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();
}
