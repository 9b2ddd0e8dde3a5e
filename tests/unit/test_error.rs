use assert_json_diff::assert_json_eq;
use serde_json::json;
use wolk_simulator_client::error::{AppError, HttpError, HttpErrorType};

#[test]
fn test_app_error_display_no_file() {
    assert_eq!(AppError::NoFile.to_string(), "no file found");
}

#[test]
fn test_app_error_display_missing_base_url() {
    assert_eq!(
        AppError::MissingBaseUrl.to_string(),
        "base url must be provided"
    );
}

#[test]
fn test_app_error_display_invalid_parameter() {
    let error = AppError::InvalidParameterType("{\"a\":1}".to_string());
    assert_eq!(error.to_string(), "cannot convert to parameters: {\"a\":1}");
}

#[test]
fn test_app_error_display_http() {
    let error: AppError = HttpError::new(404, json!({"message": "gone fishing"})).into();
    assert_eq!(error.to_string(), "http error: NOT_FOUND (404): gone fishing");
    assert_eq!(error.as_http().map(|e| e.code), Some(404));
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(matches!(app_error, AppError::Json(_)));
    assert!(app_error.as_http().is_none());
}

#[test]
fn test_app_error_from_io() {
    let app_error: AppError = std::io::Error::other("test").into();
    assert!(matches!(app_error, AppError::Io(_)));
}

#[test]
fn test_error_type_is_a_function_of_status() {
    let cases = [
        (0, HttpErrorType::NetworkError),
        (400, HttpErrorType::BadRequest),
        (401, HttpErrorType::Unauthorized),
        (403, HttpErrorType::Forbidden),
        (404, HttpErrorType::NotFound),
        (409, HttpErrorType::Conflict),
        (422, HttpErrorType::UnprocessableEntity),
        (500, HttpErrorType::InternalServerError),
        (503, HttpErrorType::ServiceUnavailable),
        (599, HttpErrorType::UnknownError),
    ];
    for (code, expected) in cases {
        assert_eq!(HttpErrorType::from_status(code), expected, "status {code}");
        assert_eq!(HttpError::new(code, json!(null)).error_type, expected);
    }
}

#[test]
fn test_http_error_serializes_with_type_field() {
    let error = HttpError::new(400, json!({"message": "size must be positive", "field": "size"}));
    assert_json_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({
            "code": 400,
            "type": "BAD_REQUEST",
            "message": "size must be positive",
            "response": {"message": "size must be positive", "field": "size"},
            "trace": "Type: BAD_REQUEST\nCode: 400\nMessage: size must be positive",
        })
    );
}

#[test]
fn test_http_error_non_string_message_falls_back() {
    let error = HttpError::new(500, json!({"message": 42}));
    assert_eq!(error.message, "INTERNAL_SERVER_ERROR");
}
