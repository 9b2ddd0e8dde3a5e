/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types of the client
//!
//! [`HttpError`] is the normalized shape of every transport failure (network
//! error or non-2xx status). [`AppError`] is the crate-wide error returned by
//! every fallible operation; transport failures travel inside
//! [`AppError::Http`].

use crate::constants::NETWORK_ERROR_CODE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Classification of an HTTP status code
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpErrorType {
    /// The request never produced a status (connection refused, DNS, timeout)
    NetworkError,
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 405
    MethodNotAllowed,
    /// 406
    NotAcceptable,
    /// 408
    RequestTimeout,
    /// 409
    Conflict,
    /// 410
    Gone,
    /// 412
    PreconditionFailed,
    /// 413
    PayloadTooLarge,
    /// 415
    UnsupportedMediaType,
    /// 422
    UnprocessableEntity,
    /// 429
    TooManyRequests,
    /// 500
    InternalServerError,
    /// 501
    NotImplemented,
    /// 502
    BadGateway,
    /// 503
    ServiceUnavailable,
    /// 504
    GatewayTimeout,
    /// Any status without a dedicated entry
    UnknownError,
}

impl HttpErrorType {
    /// Looks up the classification of a status code
    #[must_use]
    pub fn from_status(code: u16) -> Self {
        match code {
            NETWORK_ERROR_CODE => Self::NetworkError,
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            406 => Self::NotAcceptable,
            408 => Self::RequestTimeout,
            409 => Self::Conflict,
            410 => Self::Gone,
            412 => Self::PreconditionFailed,
            413 => Self::PayloadTooLarge,
            415 => Self::UnsupportedMediaType,
            422 => Self::UnprocessableEntity,
            429 => Self::TooManyRequests,
            500 => Self::InternalServerError,
            501 => Self::NotImplemented,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            _ => Self::UnknownError,
        }
    }

    /// Wire name of the classification, e.g. `NOT_FOUND`
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkError => "NETWORK_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::NotAcceptable => "NOT_ACCEPTABLE",
            Self::RequestTimeout => "REQUEST_TIMEOUT",
            Self::Conflict => "CONFLICT",
            Self::Gone => "GONE",
            Self::PreconditionFailed => "PRECONDITION_FAILED",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            Self::TooManyRequests => "TOO_MANY_REQUESTS",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::BadGateway => "BAD_GATEWAY",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::GatewayTimeout => "GATEWAY_TIMEOUT",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for HttpErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized transport failure
///
/// Built exactly once per failed call by
/// [`parse_error`](crate::transport::error_mapping::parse_error) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpError {
    /// HTTP status code, `0` when no response was received
    pub code: u16,
    /// Classification derived from `code`
    #[serde(rename = "type")]
    pub error_type: HttpErrorType,
    /// `message` field of the error body, or the classification name
    pub message: String,
    /// Raw error body (parsed JSON when possible, otherwise the original string)
    pub response: Value,
    /// Diagnostic trace embedding type, code and message
    pub trace: String,
}

impl HttpError {
    /// Builds the error for a status code and an already decoded body
    pub fn new(code: u16, response: Value) -> Self {
        let message = response
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| HttpErrorType::from_status(code).as_str().to_owned());
        Self::with_message(code, message, response)
    }

    /// Builds the error with an explicit message, e.g. when no body was received
    pub fn with_message(code: u16, message: impl Into<String>, response: Value) -> Self {
        let error_type = HttpErrorType::from_status(code);
        let message = message.into();
        let trace = format!("Type: {error_type}\nCode: {code}\nMessage: {message}");
        Self {
            code,
            error_type,
            message,
            response,
            trace,
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.error_type, self.code, self.message)
    }
}

impl std::error::Error for HttpError {}

/// Main error type of the crate
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The backend answered with a non-2xx status or could not be reached
    #[error("http error: {0}")]
    Http(#[from] HttpError),
    /// A media download returned an empty body
    #[error("no file found")]
    NoFile,
    /// A request parameter is neither a scalar nor an array of scalars
    #[error("cannot convert to parameters: {0}")]
    InvalidParameterType(String),
    /// The client was constructed without a base URL
    #[error("base url must be provided")]
    MissingBaseUrl,
    /// The underlying HTTP client could not be built
    #[error("http client build error: {0}")]
    ClientBuild(String),
    /// A header name or value could not be encoded
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    /// A multipart part could not be built
    #[error("multipart error: {0}")]
    Multipart(String),
    /// The token provider failed to produce an authorization value
    #[error("token error: {0}")]
    Token(String),
    /// JSON (de)serialization failure outside of a transport call
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Local I/O failure, e.g. reading a file for upload
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns the transport error carried by this error, if any
    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            AppError::Http(e) => Some(e),
            _ => None,
        }
    }
}
