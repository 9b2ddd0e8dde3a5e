/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Translation of a [`RequestConfig`] into transport headers, query pairs and
//! multipart bodies

use crate::constants::APPLICATION_JSON;
use crate::error::AppError;
use crate::model::request::{MultiPart, MultiPartContent, RequestConfig, RequestParams};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

fn header_value(name: &HeaderName, value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value).map_err(|e| AppError::InvalidHeader(format!("{name}: {e}")))
}

/// Builds the outgoing headers of a request
///
/// `Accept` defaults to `application/json`. `Content-Type` is set only when
/// configured. Unless the request is public an `Authorization` header is
/// always present, carrying `authorization` or an empty placeholder.
///
/// # Errors
/// * `AppError::InvalidHeader` - if a configured value is not a valid header value
pub fn build_headers(
    config: &RequestConfig,
    authorization: Option<&str>,
) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    let accept = config.headers.accept.as_deref().unwrap_or(APPLICATION_JSON);
    headers.insert(ACCEPT, header_value(&ACCEPT, accept)?);

    if let Some(content_type) = config.headers.content_type.as_deref().filter(|c| !c.is_empty()) {
        headers.insert(CONTENT_TYPE, header_value(&CONTENT_TYPE, content_type)?);
    }

    if !config.public {
        let value = authorization.unwrap_or_default();
        headers.insert(AUTHORIZATION, header_value(&AUTHORIZATION, value)?);
    }

    Ok(headers)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Flattens request parameters into ordered query pairs
///
/// Null and empty-string values are skipped. Scalars give one pair, arrays
/// give one pair per element under the same key (null elements skipped).
///
/// # Errors
/// * `AppError::InvalidParameterType` - for objects, or arrays holding anything but scalars
pub fn build_query_params(params: &RequestParams) -> Result<Vec<(String, String)>, AppError> {
    let mut pairs = Vec::with_capacity(params.len());

    for (key, value) in params {
        if is_empty_value(value) {
            continue;
        }
        match value {
            Value::Array(values) => {
                for item in values.iter().filter(|v| !v.is_null()) {
                    let item = scalar_to_string(item)
                        .ok_or_else(|| AppError::InvalidParameterType(value.to_string()))?;
                    pairs.push((key.clone(), item));
                }
            }
            scalar => {
                let item = scalar_to_string(scalar)
                    .ok_or_else(|| AppError::InvalidParameterType(scalar.to_string()))?;
                pairs.push((key.clone(), item));
            }
        }
    }

    Ok(pairs)
}

/// Encodes query pairs as an `application/x-www-form-urlencoded` string
///
/// # Errors
/// * `AppError::InvalidParameterType` - if the pairs cannot be encoded
pub fn encode_query(pairs: &[(String, String)]) -> Result<String, AppError> {
    serde_urlencoded::to_string(pairs).map_err(|e| AppError::InvalidParameterType(e.to_string()))
}

/// Builds a multipart body, keeping the order of `parts`
///
/// Text content is sent as an `application/json` chunk; file content keeps its
/// file name and media type.
///
/// # Errors
/// * `AppError::Multipart` - if a media type cannot be parsed
pub fn build_multipart_form(parts: Vec<MultiPart>) -> Result<Form, AppError> {
    let mut form = Form::new();

    for part in parts {
        let built = match part.content {
            MultiPartContent::Text(text) => Part::text(text).mime_str(APPLICATION_JSON),
            MultiPartContent::File(file) => {
                let mime = file.mime_type();
                Part::bytes(file.content).file_name(file.name).mime_str(&mime)
            }
        }
        .map_err(|e| AppError::Multipart(format!("{}: {e}", part.name)))?;
        form = form.part(part.name, built);
    }

    Ok(form)
}
