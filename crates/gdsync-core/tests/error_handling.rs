//! Failure-path contract: every error aborts the call with no report, and
//! fetch-phase failures are distinguishable from apply-phase ones.

use gdsync_core::{Error, Phase, UpdateOption, Updater};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RECORDS_PATH: &str = "/v1/domains/example.com/records/A";

#[tokio::test]
async fn fetch_with_non_200_status_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = Updater::new()
        .check_and_update(
            "example.com",
            "101.101.101.101",
            [UpdateOption::Endpoint(server.uri())],
        )
        .await
        .expect_err("a 500 fetch must fail the call");

    match err {
        Error::FetchStatus { status } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected a fetch status error, got: {}", other),
    }
}

#[tokio::test]
async fn apply_failure_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"data": "100.100.100.100", "name": "@", "ttl": 600, "type": "A"},
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("bad request"))
        .mount(&server)
        .await;

    let err = Updater::new()
        .check_and_update(
            "example.com",
            "101.101.101.101",
            [UpdateOption::Endpoint(server.uri())],
        )
        .await
        .expect_err("a 500 apply must fail the call");

    match err {
        Error::ApplyStatus { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "bad request");
        }
        other => panic!("expected an apply status error, got: {}", other),
    }
}

#[tokio::test]
async fn undecodable_fetch_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not a record array"))
        .mount(&server)
        .await;

    let err = Updater::new()
        .check_and_update(
            "example.com",
            "101.101.101.101",
            [UpdateOption::Endpoint(server.uri())],
        )
        .await
        .expect_err("an undecodable body must fail the call");

    assert!(matches!(err, Error::Decode(_)), "got: {}", err);
}

#[tokio::test]
async fn missing_record_fields_are_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"data": "100.100.100.100", "name": "@"},
        ])))
        .mount(&server)
        .await;

    let err = Updater::new()
        .check_and_update(
            "example.com",
            "101.101.101.101",
            [UpdateOption::Endpoint(server.uri())],
        )
        .await
        .expect_err("records without ttl/type must fail decoding");

    assert!(matches!(err, Error::Decode(_)), "got: {}", err);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_fetch_transport_error() {
    // Grab a free port, then shut the server down so nothing listens on it.
    let server = MockServer::start().await;
    let endpoint = server.uri();
    drop(server);

    let err = Updater::new()
        .check_and_update(
            "example.com",
            "101.101.101.101",
            [UpdateOption::Endpoint(endpoint)],
        )
        .await
        .expect_err("a refused connection must fail the call");

    match err {
        Error::Transport { phase, .. } => assert_eq!(phase, Phase::Fetch),
        other => panic!("expected a transport error, got: {}", other),
    }
}

#[tokio::test]
async fn apply_status_error_mentions_status_and_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"data": "100.100.100.100", "name": "@", "ttl": 600, "type": "A"},
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(422).set_body_string("ttl out of range"))
        .mount(&server)
        .await;

    let err = Updater::new()
        .check_and_update(
            "example.com",
            "101.101.101.101",
            [UpdateOption::Endpoint(server.uri())],
        )
        .await
        .expect_err("a 422 apply must fail the call");

    let message = err.to_string();
    assert!(message.contains("422"), "message was: {}", message);
    assert!(message.contains("ttl out of range"), "message was: {}", message);
}
