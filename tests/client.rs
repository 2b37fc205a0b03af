mod common;

use common::{api_path, authenticated_client, mock_config, mount_token, TOKEN, TOKEN_PATH};
use serde_json::json;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zerion_sdk::{
    AutoRefreshConfig, Client, ClientConfig, ClientError, Response, RetryPolicy, SendOptions,
};

// ---------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------

#[tokio::test]
async fn test_construction_requests_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains(
            "grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer",
        ))
        .and(body_string_contains("assertion="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": TOKEN })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(mock_config(&server)).await;

    assert_eq!(client.access_token().as_deref(), Some(TOKEN));
    assert!(client.access_token_expiration().is_some());
    assert!(client.take_auth_error().is_none());
    assert_eq!(client.api_count(), 0);
}

#[tokio::test]
async fn test_token_response_without_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "nope" })))
        .mount(&server)
        .await;

    let client = Client::new(mock_config(&server)).await;

    assert!(client.access_token().is_none());
    assert!(matches!(
        client.take_auth_error(),
        Some(ClientError::AccessTokenNotGranted)
    ));
    assert!(client.take_auth_error().is_none());
}

#[tokio::test]
async fn test_token_endpoint_rejects_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
        .mount(&server)
        .await;

    let client = Client::new(mock_config(&server)).await;

    assert!(client.access_token().is_none());
    let err = client.take_auth_error().unwrap();
    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_unreachable_token_endpoint_does_not_panic() {
    let config = ClientConfig::new("acme", "us", "client-key", "client-secret", 8.0)
        .unwrap()
        .endpoints("http://127.0.0.1:1/api", "http://127.0.0.1:1/oauth/token")
        .unwrap();

    let client = Client::new(config).await;

    assert!(client.access_token().is_none());
    assert!(matches!(
        client.take_auth_error(),
        Some(ClientError::Authentication { status: None, .. })
    ));
}

#[tokio::test]
async fn test_grant_fields_other_than_access_token_are_ignored() {
    for grant in [
        json!({ "access_token": TOKEN, "expires_in": "3600" }),
        json!({ "access_token": TOKEN, "expires_in": 3600.0 }),
        json!({ "access_token": TOKEN, "token_type": 1 }),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(grant.clone()))
            .mount(&server)
            .await;

        let client = Client::new(mock_config(&server)).await;

        assert_eq!(client.access_token().as_deref(), Some(TOKEN), "grant {}", grant);
        assert!(client.take_auth_error().is_none());
    }
}

#[tokio::test]
async fn test_non_json_grant_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let client = Client::new(mock_config(&server)).await;

    assert!(client.access_token().is_none());
    assert!(matches!(client.take_auth_error(), Some(ClientError::Json(_))));
}

#[tokio::test]
async fn test_explicit_authenticate_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_token(&server).await;

    let client = Client::new(mock_config(&server)).await;
    assert!(client.access_token().is_none());

    assert_ok!(client.authenticate().await);
    assert_eq!(client.access_token().as_deref(), Some(TOKEN));
    assert!(client.take_auth_error().is_none());
}

#[tokio::test]
async fn test_unauthenticated_requests_omit_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/self")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "unauthorized" })))
        .mount(&server)
        .await;

    let client = Client::new(mock_config(&server)).await;
    let response = assert_ok!(client.profiles().get_home_profile().await);
    assert_eq!(response.status_code(), Some(401));

    let requests = server.received_requests().await.unwrap();
    let api_request = requests
        .iter()
        .find(|r| r.url.path().ends_with("profiles/self"))
        .unwrap();
    assert!(api_request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_expired_token_is_refreshed_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": TOKEN })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/self")))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;

    let refresh = AutoRefreshConfig {
        token_lifetime: Duration::ZERO,
        ..Default::default()
    };
    let client = Client::new(mock_config(&server).refresh_config(refresh)).await;
    let first_expiration = client.access_token_expiration().unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    assert_ok!(client.profiles().get_home_profile().await);

    assert!(client.access_token_expiration().unwrap() > first_expiration);
}

#[tokio::test]
async fn test_failed_refresh_aborts_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": TOKEN })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/self")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .expect(0)
        .mount(&server)
        .await;

    let refresh = AutoRefreshConfig {
        token_lifetime: Duration::ZERO,
        ..Default::default()
    };
    let client = Client::new(mock_config(&server).refresh_config(refresh)).await;
    assert_eq!(client.access_token().as_deref(), Some(TOKEN));

    tokio::time::sleep(Duration::from_millis(5)).await;
    let err = assert_err!(client.profiles().get_home_profile().await);

    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(500));
    assert_eq!(client.api_count(), 0);
}

#[tokio::test]
async fn test_fresh_token_is_not_refreshed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": TOKEN })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/self")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;

    let client = Client::new(mock_config(&server)).await;
    assert_ok!(client.profiles().get_home_profile().await);
    assert_ok!(client.profiles().get_home_profile().await);
}

// ---------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------

#[tokio::test]
async fn test_requests_carry_bearer_and_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/self")))
        .and(header("authorization", "Bearer T"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 123 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server).await;
    let response = assert_ok!(client.profiles().get_home_profile().await);

    assert_eq!(response.status_code(), Some(200));
    assert_eq!(response.body()["id"], 123);
    assert_eq!(client.api_count(), 1);
    assert!(client.last_execution_time().is_some());
}

#[tokio::test]
async fn test_call_by_operation_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/1/users/2/page_assignments/3")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "page_id": 3 })))
        .expect(2)
        .mount(&server)
        .await;

    let client = authenticated_client(&server).await;

    let by_name = assert_ok!(
        client
            .call("getUserPageAssignment", &[&1, &2, &3], SendOptions::new())
            .await
    );
    let typed = assert_ok!(client.users().get_user_page_assignment(1, 2, 3).await);

    assert_eq!(by_name.body(), typed.body());
    assert_eq!(client.api_count(), 2);
}

#[tokio::test]
async fn test_call_rejects_bad_operations_without_sending() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;

    let err = assert_err!(client.call("getNothing", &[&1], SendOptions::new()).await);
    assert!(matches!(err, ClientError::UnknownOperation(_)));

    let err = assert_err!(client.call("fetchUsers", &[&1], SendOptions::new()).await);
    assert!(matches!(err, ClientError::UnknownOperation(_)));

    let err = assert_err!(client.call("getUser", &[&1], SendOptions::new()).await);
    assert!(matches!(
        err,
        ClientError::PathParameters { expected: 2, given: 1, .. }
    ));

    assert_eq!(client.api_count(), 0);
}

#[tokio::test]
async fn test_query_and_body_are_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("profiles/1/pages/2/records")))
        .and(query_param("fields", r#"id(>"100")"#))
        .and(wiremock::matchers::body_json(json!({ "status": "done" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 101 }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server).await;
    let options = SendOptions::new()
        .with_query("fields", r#"id(>"100")"#)
        .with_body(json!({ "status": "done" }));

    let response = assert_ok!(client.call("putRecords", &[&1, &2], options).await);
    assert_eq!(response.status_code(), Some(200));
}

#[tokio::test]
async fn test_copy_verb() {
    let server = MockServer::start().await;
    Mock::given(method("COPY"))
        .and(path(api_path("profiles/1/pages/2")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 3 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server).await;
    let response = assert_ok!(client.pages().copy_page(1, 2).await);

    assert_eq!(response.status_code(), Some(201));
    assert_eq!(response.body()["id"], 3);
}

#[tokio::test]
async fn test_error_statuses_are_returned_as_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/9")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error_message": "not found" })),
        )
        .mount(&server)
        .await;

    let client = authenticated_client(&server).await;
    let response = assert_ok!(client.profiles().get_profile(9).await);

    let full = response.as_full().unwrap();
    assert_eq!(full.status_code, 404);
    assert!(!full.is_success());
    assert_eq!(full.response["error_message"], "not found");
    assert_eq!(full.to_string(), "404");
}

#[tokio::test]
async fn test_headers_and_iteration_in_full_mode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/1/users")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-total-count", "2")
                .set_body_json(json!([{ "id": 1 }, { "id": 2 }])),
        )
        .mount(&server)
        .await;

    let client = authenticated_client(&server).await;
    let response = assert_ok!(client.users().get_users(1, None).await);

    let full = response.as_full().unwrap();
    assert_eq!(full.header("x-total-count"), Some("2"));
    let ids: Vec<i64> = full.iter().filter_map(|u| u["id"].as_i64()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_simple_response_mode() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;

    let client = Client::new(mock_config(&server).simple_response(true)).await;
    let response = assert_ok!(client.profiles().get_profile(1).await);

    assert!(matches!(response, Response::Body(_)));
    assert_eq!(response.status_code(), None);
    assert_eq!(response.into_body(), json!({ "id": 1 }));
}

#[tokio::test]
async fn test_non_json_and_empty_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("profiles/1/users/2")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/1/media")))
        .respond_with(ResponseTemplate::new(200).set_body_string("binary-ish"))
        .mount(&server)
        .await;

    let client = authenticated_client(&server).await;

    let deleted = assert_ok!(client.users().delete_user(1, 2).await);
    assert_eq!(deleted.status_code(), Some(204));
    assert!(deleted.body().is_null());

    let media = assert_ok!(client.media().get_private_media(1, "https://x/y.jpg").await);
    assert_eq!(media.body(), &json!("binary-ish"));
}

#[tokio::test]
async fn test_truncated_body_still_counts_round_trip() {
    let token_server = MockServer::start().await;
    mount_token(&token_server).await;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"id\"")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let config = mock_config(&token_server)
        .endpoints(
            &format!("http://{}/api", addr),
            &format!("{}{}", token_server.uri(), TOKEN_PATH),
        )
        .unwrap();
    let client = Client::new(config).await;
    assert_eq!(client.access_token().as_deref(), Some(TOKEN));

    let err = assert_err!(client.profiles().get_profile(1).await);

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(client.api_count(), 1);
    assert!(client.last_execution_time().is_some());
}

// ---------------------------------------------------------------
// Rate limiting
// ---------------------------------------------------------------

#[tokio::test]
async fn test_rate_limited_request_is_retried() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/1")))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;

    let delay = Duration::from_millis(100);
    let config = mock_config(&server).retry_policy(RetryPolicy::with_delay(delay));
    let client = Client::new(config).await;

    let started = Instant::now();
    let response = assert_ok!(client.profiles().get_profile(1).await);

    assert!(started.elapsed() >= delay);
    assert_eq!(response.status_code(), Some(200));
    assert_eq!(client.api_count(), 2);
}

#[tokio::test]
async fn test_skip_rate_limit_retry_returns_429() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/1")))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let config = mock_config(&server).skip_rate_limit_retry(true);
    let client = Client::new(config).await;

    let started = Instant::now();
    let response = assert_ok!(client.profiles().get_profile(1).await);

    assert!(started.elapsed() < Duration::from_secs(60));
    assert_eq!(response.status_code(), Some(429));
    assert_eq!(client.api_count(), 1);
}

#[tokio::test]
async fn test_retry_limit_returns_last_429() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path(api_path("profiles/1")))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&server)
        .await;

    let policy = RetryPolicy::with_delay(Duration::from_millis(10)).max_retries(2);
    let client = Client::new(mock_config(&server).retry_policy(policy)).await;

    let response = assert_ok!(client.profiles().get_profile(1).await);
    assert_eq!(response.status_code(), Some(429));
    assert_eq!(client.api_count(), 3);
}
