use crate::common::create_test_client;
use mockito::Server;
use serde_json::{Value, json};
use wolk_simulator_client::prelude::*;

fn http_error(err: AppError) -> HttpError {
    match err {
        AppError::Http(e) => e,
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn json_error_body_is_parsed() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/devices/404")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Device not found","path":"/api/devices/404"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = http_error(client.get::<Value>("/api/devices/404", None).await.unwrap_err());

    assert_eq!(err.code, 404);
    assert_eq!(err.error_type, HttpErrorType::NotFound);
    assert_eq!(err.message, "Device not found");
    assert_eq!(err.response["path"], "/api/devices/404");
    assert!(err.trace.contains("Code: 404"));
}

#[tokio::test]
async fn text_error_body_is_kept_raw() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/scenarios")
        .with_status(500)
        .with_body("Internal failure")
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = http_error(
        client
            .post::<_, Value>("/api/scenarios", &json!({}), None)
            .await
            .unwrap_err(),
    );

    assert_eq!(err.code, 500);
    assert_eq!(err.error_type, HttpErrorType::InternalServerError);
    assert_eq!(err.message, "INTERNAL_SERVER_ERROR");
    assert_eq!(err.response, Value::String("Internal failure".to_string()));
}

#[tokio::test]
async fn non_json_path_maps_errors_the_same_way() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/feeds")
        .with_status(401)
        .with_body(r#"{"message":"Token expired"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let config = RequestConfig::new().with_accept("application/vnd.page+json");
    let err = http_error(
        client
            .get::<Page<Value>>("/api/feeds", Some(&config))
            .await
            .unwrap_err(),
    );
    assert_eq!(err.code, 401);
    assert_eq!(err.error_type, HttpErrorType::Unauthorized);
    assert_eq!(err.message, "Token expired");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = create_test_client("http://127.0.0.1:1");
    let err = http_error(client.get::<Value>("/api/devices", None).await.unwrap_err());
    assert_eq!(err.code, 0);
    assert_eq!(err.error_type, HttpErrorType::NetworkError);
    assert!(!err.message.is_empty());
    assert_eq!(err.response, Value::Null);
}

#[tokio::test]
async fn undecodable_success_body_keeps_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/devices/1")
        .with_status(200)
        .with_body(r#"{"id":"not-a-number"}"#)
        .create_async()
        .await;

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Strict {
        id: i64,
    }

    let client = create_test_client(&server.url());
    let err = http_error(client.get::<Strict>("/api/devices/1", None).await.unwrap_err());
    assert_eq!(err.code, 200);
    assert_eq!(err.error_type, HttpErrorType::UnknownError);
}
