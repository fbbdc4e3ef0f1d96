//! Authenticated fetch layer against a local mock server.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

mod common;

use homeboard_api::{ApiError, AuthedClient, MutateMethod};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use common::{TEST_TOKEN, bearer, start};

#[tokio::test]
async fn authed_get_sends_bearer_token() {
    let (server, http) = start().await;
    Mock::given(method("GET"))
        .and(path("/thing"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthedClient::new(http, "test");
    let value: Value = require_ok!(
        client
            .authed_get(&format!("{}/thing", server.uri()), TEST_TOKEN)
            .await
    );
    assert_eq!(value["ok"], json!(true));
}

#[tokio::test]
async fn non_2xx_becomes_upstream_error_with_body() {
    let (server, http) = start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(503).set_body_string("backend down"))
        .mount(&server)
        .await;

    let client = AuthedClient::new(http, "test");
    let result: Result<Value, ApiError> = client
        .authed_get(&format!("{}/broken", server.uri()), TEST_TOKEN)
        .await;

    match result {
        Err(ApiError::Upstream {
            service,
            status,
            body,
        }) => {
            assert_eq!(service, "test");
            assert_eq!(status, 503);
            assert_eq!(body, "backend down");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_is_detectable() {
    let (server, http) = start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = AuthedClient::new(http, "test");
    let err = client
        .authed_get::<Value>(&format!("{}/any", server.uri()), TEST_TOKEN)
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn mutate_204_is_empty_success() {
    let (server, http) = start().await;
    Mock::given(method("DELETE"))
        .and(path("/items/1"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthedClient::new(http, "test");
    let result: Option<Value> = require_ok!(
        client
            .authed_mutate(
                &format!("{}/items/1", server.uri()),
                TEST_TOKEN,
                MutateMethod::Delete,
                None,
            )
            .await
    );
    assert!(result.is_none());
}

#[tokio::test]
async fn mutate_sends_json_body_and_parses_reply() {
    let (server, http) = start().await;
    Mock::given(method("PATCH"))
        .and(path("/items/1"))
        .and(body_json(json!({ "status": "completed" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "1", "status": "completed" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthedClient::new(http, "test");
    let body = json!({ "status": "completed" });
    let result: Option<Value> = require_ok!(
        client
            .authed_mutate(
                &format!("{}/items/1", server.uri()),
                TEST_TOKEN,
                MutateMethod::Patch,
                Some(&body),
            )
            .await
    );
    assert_eq!(result.unwrap()["status"], json!("completed"));
}

#[tokio::test]
async fn mutate_error_keeps_status() {
    let (server, http) = start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(409).set_body_string("conflict"))
        .mount(&server)
        .await;

    let client = AuthedClient::new(http, "test");
    let err = client
        .authed_mutate::<Value>(
            &format!("{}/items", server.uri()),
            TEST_TOKEN,
            MutateMethod::Post,
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    let http = homeboard_api::create_http_client();
    let client = AuthedClient::new(http, "test");
    // 端口 9 (discard) 在测试环境中不会有 HTTP 服务
    let err = client
        .authed_get::<Value>("http://127.0.0.1:9/nothing", TEST_TOKEN)
        .await
        .unwrap_err();
    assert!(
        matches!(err, ApiError::NetworkError { .. } | ApiError::Timeout { .. }),
        "unexpected error: {err:?}"
    );
}
