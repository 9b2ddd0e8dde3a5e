/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::APPLICATION_JSON;
use crate::error::AppError;
use crate::model::response::FileData;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query parameters of a request, keyed by parameter name
///
/// Values must be scalars (string, number, boolean), arrays of scalars, or
/// empty (`null` / `""`). Anything else is rejected when the query is built.
pub type RequestParams = Map<String, Value>;

/// How the body of a non-JSON `get` is read
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Raw bytes
    ArrayBuffer,
    /// Raw bytes
    Blob,
    /// Parsed JSON
    #[default]
    Json,
    /// UTF-8 text
    Text,
}

/// Header overrides of a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeaders {
    /// `Accept` header, `application/json` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    /// `Content-Type` header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Body interpretation for non-JSON `get` calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
}

/// Per-call request configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Header overrides
    #[serde(default)]
    pub headers: RequestHeaders,
    /// Query parameters
    #[serde(default)]
    pub params: RequestParams,
    /// Public requests are sent without an `Authorization` header
    #[serde(default)]
    pub public: bool,
}

impl RequestConfig {
    /// Creates an empty configuration: JSON accept, no params, authenticated
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accept header
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.headers.accept = Some(accept.into());
        self
    }

    /// Set the content type header
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.headers.content_type = Some(content_type.into());
        self
    }

    /// Set the response type used by non-JSON `get` calls
    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.headers.response_type = Some(response_type);
        self
    }

    /// Mark the request as public (or not)
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Adds a single query parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Merges the fields of a serializable parameter struct into the query parameters
    ///
    /// # Errors
    /// * `AppError::InvalidParameterType` - if `params` does not serialize to an object
    /// * `AppError::Json` - if serialization itself fails
    pub fn with_params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self, AppError> {
        match serde_json::to_value(params)? {
            Value::Object(map) => {
                self.params.extend(map);
                Ok(self)
            }
            Value::Null => Ok(self),
            other => Err(AppError::InvalidParameterType(other.to_string())),
        }
    }

    /// Effective accept header
    pub fn accept(&self) -> &str {
        self.headers.accept.as_deref().unwrap_or(APPLICATION_JSON)
    }

    /// Whether the response is plain JSON (no accept override, or `application/json`)
    pub fn has_json_response(&self) -> bool {
        match self.headers.accept.as_deref() {
            None | Some("") => true,
            Some(accept) => accept == APPLICATION_JSON,
        }
    }

    /// Effective response type for non-JSON `get` calls
    pub fn response_type(&self) -> ResponseType {
        self.headers.response_type.unwrap_or_default()
    }
}

/// Content of one multipart entry
#[derive(Debug, Clone, PartialEq)]
pub enum MultiPartContent {
    /// Sent as a JSON-typed chunk
    Text(String),
    /// Sent with its original file name
    File(FileData),
}

/// One named entry of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPart {
    /// Form field name
    pub name: String,
    /// Field content
    pub content: MultiPartContent,
}

impl MultiPart {
    /// A JSON-typed text part
    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: MultiPartContent::Text(content.into()),
        }
    }

    /// A JSON part built by serializing `value`
    ///
    /// # Errors
    /// * `AppError::Json` - if `value` cannot be serialized
    pub fn json<T: Serialize + ?Sized>(name: impl Into<String>, value: &T) -> Result<Self, AppError> {
        Ok(Self::text(name, serde_json::to_string(value)?))
    }

    /// A file part
    pub fn file(name: impl Into<String>, file: FileData) -> Self {
        Self {
            name: name.into(),
            content: MultiPartContent::File(file),
        }
    }
}
