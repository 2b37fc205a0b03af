#![allow(dead_code)]

use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zerion_sdk::{Client, ClientConfig};

pub const TOKEN: &str = "T";
pub const API_PATH: &str = "/exzact/api/v80/acme";
pub const TOKEN_PATH: &str = "/exzact/api/v80/acme/oauth/token";

/// Config pointing both endpoints at the mock server.
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new("acme", "us", "client-key", "client-secret", 8.0)
        .unwrap()
        .endpoints(
            &format!("{}{}", server.uri(), API_PATH),
            &format!("{}{}", server.uri(), TOKEN_PATH),
        )
        .unwrap()
}

/// Token endpoint granting `TOKEN`.
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

/// Authenticated client in default (full response) mode.
pub async fn authenticated_client(server: &MockServer) -> Arc<Client> {
    mount_token(server).await;
    Client::new(mock_config(server)).await
}

pub fn api_path(resource: &str) -> String {
    format!("{}/{}", API_PATH, resource)
}
