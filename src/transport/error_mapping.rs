/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Single normalization point for transport failures
//!
//! Every failed call of [`ApiClientService`](super::ApiClientService) goes
//! through one of these functions, and every mapped error is logged.

use crate::constants::NETWORK_ERROR_CODE;
use crate::error::HttpError;
use serde_json::Value;
use tracing::error;

/// Maps a status code and raw error body into an [`HttpError`]
///
/// The body is parsed as JSON when possible. A body that is not JSON is logged
/// and kept as a plain string; an empty body becomes `null`.
pub fn parse_error(code: u16, body: &str) -> HttpError {
    let response = if body.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => value,
            Err(e) => {
                error!("Could not parse error response to JSON ({e}), body: {body}");
                Value::String(body.to_owned())
            }
        }
    };

    logged(HttpError::new(code, response))
}

fn logged(mapped: HttpError) -> HttpError {
    error!("Request failed with status {}: {}", mapped.code, mapped.message);
    mapped
}

/// Maps a failure that happened before or while receiving a response
///
/// Uses the status attached to the error when there is one, otherwise code `0`.
/// No body was received, so `response` is `null` and the reqwest error text
/// becomes the message.
pub fn map_transport_error(err: &reqwest::Error) -> HttpError {
    let code = err
        .status()
        .map(|s| s.as_u16())
        .unwrap_or(NETWORK_ERROR_CODE);
    logged(HttpError::with_message(code, err.to_string(), Value::Null))
}

/// Maps a 2xx response whose body could not be decoded into the expected type
pub fn map_decode_error(code: u16, err: &serde_json::Error) -> HttpError {
    logged(HttpError::with_message(
        code,
        format!("could not decode response body: {err}"),
        Value::Null,
    ))
}
