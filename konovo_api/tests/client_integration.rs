use konovo_api::types::LoginRequest;
use konovo_api::{Client, Error};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn credentials() -> LoginRequest {
    LoginRequest {
        username: "zadatak".to_string(),
        password: "zadatak".to_string(),
    }
}

#[tokio::test]
async fn login_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "username": "zadatak",
            "password": "zadatak"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"token":"jwt-token"}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let resp = client.login(&credentials()).await.unwrap();
    assert_eq!(resp.token, "jwt-token");
}

#[tokio::test]
async fn login_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"bad credentials"}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.login(&credentials()).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(matches!(err, Error::HttpStatus { status: 401, .. }));
}

#[tokio::test]
async fn products_success_sends_bearer_token() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("products.json");

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("authorization", "Bearer jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let products = client.products("jwt-token").await.unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].sif_product, "1001");
}

#[tokio::test]
async fn products_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.products("stale-token").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn products_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.products("jwt-token").await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    assert!(!err.is_unauthorized());
}

#[tokio::test]
async fn products_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.products("jwt-token").await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed));
}

#[tokio::test]
async fn connection_refused_is_request_failed() {
    // Port 1 is unassigned; the connection is refused immediately.
    let client = Client::with_base_url("http://127.0.0.1:1").unwrap();
    let err = client.products("jwt-token").await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed));
}
