//! Mock Spotify services for integration tests.
//!
//! The mock server plays both the accounts service (`/api/token`) and the Web
//! API (`/v1/...`), and serves image bytes under `/image/...`.

#![allow(dead_code)]

use serde_json::{Value, json};
use spotify_image_downloader::config::Endpoints;
use spotify_image_downloader::types::Credentials;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token";
/// base64("test-id:test-secret")
pub const TEST_BASIC_AUTH: &str = "Basic dGVzdC1pZDp0ZXN0LXNlY3JldA==";
pub const FAKE_IMAGE_CONTENT: &[u8] = b"\xFF\xD8\xFF\xE0 fake jpeg";

pub fn endpoints(server: &MockServer) -> Endpoints {
    Endpoints {
        api_url: format!("{}/v1", server.uri()),
        token_url: format!("{}/api/token", server.uri()),
    }
}

pub fn test_credentials() -> Credentials {
    Credentials {
        client_id: "test-id".to_string(),
        client_secret: "test-secret".to_string(),
    }
}

pub fn image_url(server: &MockServer, name: &str) -> String {
    format!("{}/image/{}", server.uri(), name)
}

/// Album payload with three renditions in Spotify's usual largest-first order,
/// plus one without dimensions at the end.
pub fn album_payload(server: &MockServer) -> Value {
    json!({
        "id": "123",
        "name": "Some Album",
        "images": [
            { "url": image_url(server, "large"), "width": 640, "height": 640 },
            { "url": image_url(server, "medium"), "width": 300, "height": 300 },
            { "url": image_url(server, "unsized"), "width": null, "height": null }
        ]
    })
}

/// Accepts a client credentials request carrying `basic_auth`.
pub async fn mock_token(server: &MockServer, basic_auth: &str) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", basic_auth))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

/// Serves `payload` for an authorized GET on `api_path`.
pub async fn mock_lookup(server: &MockServer, api_path: &str, payload: Value) {
    Mock::given(method("GET"))
        .and(path(api_path))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(server)
        .await;
}

pub async fn mock_image(server: &MockServer, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/image/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(FAKE_IMAGE_CONTENT))
        .mount(server)
        .await;
}
