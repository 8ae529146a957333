/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Contract tests for `SfuApiClient` against an in-process mock SFU.


use std::time::Duration;

use axum::http::{Method, StatusCode};
use mock_sfu::{MockSfu, TEST_SECRET};
use serde_json::json;
use sfu_api_client::sfu_api_types::{JoinRequest, TokenRequest};
use sfu_api_client::{ApiError, SfuApiClient};

fn client_for(mock: &MockSfu) -> SfuApiClient {
    SfuApiClient::new(&mock.base_url, TEST_SECRET).expect("client")
}

#[tokio::test]
async fn create_meeting_posts_empty_body_and_reads_meeting() {
    let mock = MockSfu::start(StatusCode::OK, r#"{"meeting":"https://sfu.test/join/abc"}"#).await;

    let reply = client_for(&mock).create_meeting().await.unwrap();
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body.meeting, "https://sfu.test/join/abc");

    let req = mock.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/api/v1/meeting");
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn join_sends_stringly_typed_body() {
    let mock = MockSfu::start(StatusCode::OK, r#"{"join":"https://sfu.test/room/test"}"#).await;

    let reply = client_for(&mock)
        .join(&JoinRequest::default())
        .await
        .unwrap();
    assert_eq!(reply.body.join, "https://sfu.test/room/test");

    let req = mock.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/api/v1/join");
    let body = req.json();
    assert_eq!(body["room"], "test");
    assert_eq!(body["roomPassword"], "false");
    assert_eq!(body["notify"], "true");
    assert_eq!(body["audio"], "false");
    assert_eq!(body["token"]["presenter"], "true");
    assert_eq!(body["token"]["expire"], "1h");
}

#[tokio::test]
async fn list_meetings_uses_get_and_returns_raw_json() {
    let mock = MockSfu::start(
        StatusCode::OK,
        r#"{"meetings":[{"roomId":"test","peers":[{"name":"alice","presenter":true}]}]}"#,
    )
    .await;

    let reply = client_for(&mock).list_meetings().await.unwrap();
    assert_eq!(reply.body["meetings"][0]["roomId"], "test");

    let req = mock.only_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/api/v1/meetings");
}

#[tokio::test]
async fn issue_token_returns_token() {
    let mock = MockSfu::start(StatusCode::OK, r#"{"token":"abc123"}"#).await;

    let request = TokenRequest {
        presenter: false,
        expire: "30m".to_string(),
        ..TokenRequest::default()
    };
    let reply = client_for(&mock).issue_token(&request).await.unwrap();
    assert_eq!(reply.body.token, "abc123");

    let req = mock.only_request();
    assert_eq!(req.path, "/api/v1/token");
    assert_eq!(
        req.json(),
        json!({
            "username": "username",
            "password": "password",
            "presenter": "false",
            "expire": "30m",
        })
    );
}

#[tokio::test]
async fn stats_uses_get() {
    let mock = MockSfu::start(StatusCode::OK, r#"{"success":true,"totalRooms":2,"totalPeers":5}"#).await;

    let reply = client_for(&mock).stats().await.unwrap();
    assert_eq!(reply.body["totalRooms"], 2);

    let req = mock.only_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/api/v1/stats");
}

#[tokio::test]
async fn every_call_sends_secret_and_json_content_type() {
    let mock = MockSfu::start(
        StatusCode::OK,
        r#"{"meeting":"m","join":"j","token":"t"}"#,
    )
    .await;
    let client = client_for(&mock);

    client.create_meeting().await.unwrap();
    client.join(&JoinRequest::default()).await.unwrap();
    client.list_meetings().await.unwrap();
    client.issue_token(&TokenRequest::default()).await.unwrap();
    client.stats().await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 5);
    for req in requests {
        assert_eq!(req.authorization.as_deref(), Some(TEST_SECRET), "{}", req.path);
        assert_eq!(
            req.content_type.as_deref(),
            Some("application/json"),
            "{}",
            req.path
        );
    }
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let mock = MockSfu::start(StatusCode::OK, r#"{"token":"abc123"}"#).await;
    let client = SfuApiClient::new(&format!("{}/", mock.base_url), TEST_SECRET).unwrap();

    client.issue_token(&TokenRequest::default()).await.unwrap();
    assert_eq!(mock.only_request().path, "/api/v1/token");
}

#[tokio::test]
async fn non_success_status_keeps_raw_body() {
    let mock = MockSfu::start(StatusCode::NOT_FOUND, "not found").await;

    let err = client_for(&mock).list_meetings().await.unwrap_err();
    match err {
        ApiError::Status { status, ref body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn list_meetings_treats_any_status_but_200_as_failure() {
    let mock = MockSfu::start(StatusCode::CREATED, "created").await;

    let err = client_for(&mock).list_meetings().await.unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 201);
            assert_eq!(body, "created");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn list_meetings_no_content_is_a_status_error() {
    let mock = MockSfu::start(StatusCode::NO_CONTENT, "").await;

    let err = client_for(&mock).list_meetings().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 204, ref body } if body.is_empty()));
}

#[tokio::test]
async fn other_endpoints_still_accept_any_2xx() {
    let mock = MockSfu::start(StatusCode::CREATED, r#"{"meeting":"m-201"}"#).await;

    let reply = client_for(&mock).create_meeting().await.unwrap();
    assert_eq!(reply.status, 201);
    assert_eq!(reply.body.meeting, "m-201");
}

#[tokio::test]
async fn slow_server_hits_configured_timeout() {
    let mock = MockSfu::start_delayed(
        StatusCode::OK,
        r#"{"token":"late"}"#,
        Duration::from_secs(3),
    )
    .await;
    let client =
        SfuApiClient::with_timeout(&mock.base_url, TEST_SECRET, Some(Duration::from_secs(1)))
            .unwrap();

    let err = client
        .issue_token(&TokenRequest::default())
        .await
        .unwrap_err();
    match err {
        ApiError::Network(ref e) => assert!(e.is_timeout(), "expected timeout, got {e:?}"),
        other => panic!("expected network error, got {other:?}"),
    }
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn unauthorized_token_request_is_a_status_error() {
    let mock = MockSfu::start(StatusCode::FORBIDDEN, r#"{"error":"Unauthorized!"}"#).await;

    let err = client_for(&mock)
        .issue_token(&TokenRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 403, .. }));
}

#[tokio::test]
async fn error_field_in_success_body_is_a_remote_error() {
    let mock = MockSfu::start(StatusCode::OK, r#"{"error":"Stats disabled"}"#).await;

    let err = client_for(&mock).stats().await.unwrap_err();
    match err {
        ApiError::Remote { status, message } => {
            assert_eq!(status, 200);
            assert_eq!(message, "Stats disabled");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_key_is_a_decode_error() {
    let mock = MockSfu::start(StatusCode::OK, r#"{"room":"test"}"#).await;

    let err = client_for(&mock).create_meeting().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { status: 200, .. }));
    let source = std::error::Error::source(&err).expect("decode error has a source");
    assert!(source.to_string().contains("missing field `meeting`"));
    assert!(!err.to_string().contains("missing field"));
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let mock = MockSfu::start(StatusCode::OK, "<html>maintenance</html>").await;

    let err = client_for(&mock).issue_token(&TokenRequest::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SfuApiClient::new(&format!("http://{addr}/api/v1"), TEST_SECRET).unwrap();
    let err = client.create_meeting().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn empty_base_url_is_rejected() {
    let err = SfuApiClient::new("/", TEST_SECRET).unwrap_err();
    assert!(matches!(err, ApiError::Config(_)));
}

#[test]
fn secret_with_newline_is_rejected() {
    let err = SfuApiClient::new("http://localhost:3010/api/v1", "bad\nsecret").unwrap_err();
    assert!(matches!(err, ApiError::Config(_)));
}
