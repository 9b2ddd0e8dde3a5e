/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::INTERNAL_URL_PREFIX;
use crate::error::AppError;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Response headers keyed by lower-case header name
///
/// Values that are not valid UTF-8 are kept as `None`.
pub type HttpHeaders = BTreeMap<String, Option<String>>;

/// Envelope produced by every successful client call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    /// Decoded body, `None` when the server sent no content
    pub data: Option<T>,
    /// Response headers
    pub headers: HttpHeaders,
}

impl<T> ApiResponse<T> {
    /// Creates a new envelope
    pub fn new(data: Option<T>, headers: HttpHeaders) -> Self {
        Self { data, headers }
    }

    /// Looks up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|v| v.as_deref())
    }

    /// Consumes the envelope and returns the body
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Maps the body, keeping the headers
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        ApiResponse {
            data: self.data.map(f),
            headers: self.headers,
        }
    }
}

/// Copies every header of a transport response
///
/// Repeated headers are joined with `", "`. Values that are not valid UTF-8
/// are copied as `None`.
pub fn copy_headers(headers: &HeaderMap) -> HttpHeaders {
    let mut copied = HttpHeaders::new();
    for name in headers.keys() {
        let values: Option<Vec<&str>> = headers
            .get_all(name)
            .iter()
            .map(|v| std::str::from_utf8(v.as_bytes()).ok())
            .collect();
        copied.insert(name.as_str().to_owned(), values.map(|v| v.join(", ")));
    }
    copied
}

/// Reference to a media file served by the backend or by an external host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Name given to the downloaded file
    pub name: String,
    /// Absolute URL, or a backend path prefixed with `{{host}}`
    pub url: String,
}

impl MediaFile {
    /// Creates a new media reference
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Whether the URL points at the configured backend
    pub fn is_internal(&self) -> bool {
        self.url.starts_with(INTERNAL_URL_PREFIX)
    }

    /// Resolves the URL against `base_url` when internal, otherwise returns it unchanged
    pub fn resolve(&self, base_url: &str) -> String {
        match self.url.strip_prefix(INTERNAL_URL_PREFIX) {
            Some(path) => format!("{base_url}{path}"),
            None => self.url.clone(),
        }
    }
}

/// Named binary payload, used for downloads and multipart uploads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileData {
    /// File name
    pub name: String,
    /// Media type, when known
    pub content_type: Option<String>,
    /// File bytes
    pub content: Vec<u8>,
}

impl FileData {
    /// Creates a file from memory
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            content: content.into(),
        }
    }

    /// Set the media type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Reads a file from disk, guessing its media type from the extension
    ///
    /// # Errors
    /// * `AppError::Io` - if the file cannot be read
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        let content_type = mime_guess::from_path(path).first_or_octet_stream().to_string();
        Ok(Self {
            name,
            content_type: Some(content_type),
            content,
        })
    }

    /// Media type to send, guessed from the name when not set
    pub fn mime_type(&self) -> String {
        match &self.content_type {
            Some(ct) => ct.clone(),
            None => mime_guess::from_path(&self.name)
                .first_or_octet_stream()
                .to_string(),
        }
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the file has no content
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Undecoded body of a non-JSON `get`, shaped by the declared response type
#[derive(Debug, Clone, PartialEq)]
pub enum RawBody {
    /// `json` response type; `Null` when the body was empty
    Json(Value),
    /// `text` response type
    Text(String),
    /// `blob` or `arraybuffer` response type
    Binary(Vec<u8>),
}

impl RawBody {
    /// Converts the body into `T`
    ///
    /// JSON bodies deserialize directly (`null` gives `None`), text bodies
    /// deserialize from a JSON string and binary bodies from an array of bytes,
    /// so `String` and `Vec<u8>` are the natural targets for those.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Option<T>, serde_json::Error> {
        let value = match self {
            RawBody::Json(Value::Null) => return Ok(None),
            RawBody::Json(value) => value,
            RawBody::Text(text) => Value::String(text),
            RawBody::Binary(bytes) => Value::Array(bytes.into_iter().map(Value::from).collect()),
        };
        serde_json::from_value(value).map(Some)
    }
}
