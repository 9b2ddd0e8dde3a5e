/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::auth::TokenProvider;
use crate::application::config::Config;
use crate::constants::{APPLICATION_OCTET_STREAM, USER_AGENT};
use crate::error::AppError;
use crate::model::request::{MultiPart, RequestConfig, RequestParams, ResponseType};
use crate::model::response::{ApiResponse, FileData, HttpHeaders, MediaFile, RawBody, copy_headers};
use crate::transport::api_client::ApiClient;
use crate::transport::error_mapping::{map_decode_error, map_transport_error, parse_error};
use crate::transport::options::{build_headers, build_multipart_form, build_query_params};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// [`ApiClient`] implementation backed by `reqwest`
///
/// Holds no state between calls besides the base URL captured at construction
/// and the optional token provider.
pub struct ApiClientService {
    http_client: Client,
    base_url: String,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl ApiClientService {
    /// Creates a client for the configured base URL
    ///
    /// # Returns
    /// * `Ok(ApiClientService)` - client ready to use
    /// * `Err(AppError::MissingBaseUrl)` - if the base URL is empty
    /// * `Err(AppError::ClientBuild)` - if the HTTP client cannot be created
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if config.rest_api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.rest_api.timeout));
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::ClientBuild(e.to_string()))?;
        Self::with_http_client(config, http_client)
    }

    /// Creates a client around an existing `reqwest` client
    pub fn with_http_client(config: &Config, http_client: Client) -> Result<Self, AppError> {
        let base_url = config.rest_api.base_url.trim();
        if base_url.is_empty() {
            error!("[ApiClientService] - base url must be provided from the application");
            return Err(AppError::MissingBaseUrl);
        }

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token_provider: None,
        })
    }

    /// Injects the provider of `Authorization` values for authenticated requests
    pub fn with_token_provider(mut self, token_provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(token_provider);
        self
    }

    /// Base URL every relative path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn authorization(&self, config: &RequestConfig) -> Result<Option<String>, AppError> {
        if config.public {
            return Ok(None);
        }
        match &self.token_provider {
            Some(provider) => Ok(Some(provider.authorization().await?)),
            None => Ok(None),
        }
    }

    /// Builds a request with headers and query parameters applied
    async fn prepare(
        &self,
        method: Method,
        url: &str,
        config: &RequestConfig,
    ) -> Result<RequestBuilder, AppError> {
        let query = build_query_params(&config.params)?;
        let authorization = self.authorization(config).await?;
        let headers = build_headers(config, authorization.as_deref())?;

        debug!("{} {}", method, url);
        let mut request = self.http_client.request(method, url).headers(headers);
        if !query.is_empty() {
            request = request.query(&query);
        }
        Ok(request)
    }

    /// Sends a request, mapping network failures and non-2xx statuses
    async fn execute(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request.send().await.map_err(|e| map_transport_error(&e))?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Could not read error response body ({status}): {e}");
                String::new()
            }
        };
        Err(parse_error(status.as_u16(), &body).into())
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, AppError> {
        let response = self.execute(request).await?;
        let (status, headers, body) = read_body(response).await?;
        let data = match parse_json_body(status, &body)? {
            Value::Null => None,
            value => Some(serde_json::from_value(value).map_err(|e| map_decode_error(status, &e))?),
        };
        Ok(ApiResponse::new(data, headers))
    }

    async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        parts: Vec<MultiPart>,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError> {
        let mut config = config.cloned().unwrap_or_default();
        if config.headers.content_type.take().is_some() {
            warn!("Ignoring configured content type on multipart request to {}", path);
        }
        let request = self.prepare(method, &self.url(path), &config).await?;
        let form = build_multipart_form(parts)?;
        self.send_json(request.multipart(form)).await
    }

    /// GET whose body is read according to the configured response type
    async fn fetch_raw(
        &self,
        path: &str,
        config: &RequestConfig,
    ) -> Result<(u16, ApiResponse<RawBody>), AppError> {
        let request = self.prepare(Method::GET, &self.url(path), config).await?;
        let response = self.execute(request).await?;
        let (status, headers, body) = read_body(response).await?;

        let raw = match config.response_type() {
            ResponseType::Json => RawBody::Json(parse_json_body(status, &body)?),
            ResponseType::Text => RawBody::Text(String::from_utf8_lossy(&body).into_owned()),
            ResponseType::Blob | ResponseType::ArrayBuffer => RawBody::Binary(body),
        };
        Ok((status, ApiResponse::new(Some(raw), headers)))
    }
}

async fn read_body(response: Response) -> Result<(u16, HttpHeaders, Vec<u8>), AppError> {
    let status = response.status().as_u16();
    let headers = copy_headers(response.headers());
    let body = response
        .bytes()
        .await
        .map_err(|e| map_transport_error(&e))?;
    Ok((status, headers, body.to_vec()))
}

fn parse_json_body(status: u16, body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| map_decode_error(status, &e).into())
}

#[async_trait]
impl ApiClient for ApiClientService {
    async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let default = RequestConfig::default();
        let request = self
            .prepare(Method::POST, &self.url(path), config.unwrap_or(&default))
            .await?
            .json(body);
        self.send_json(request).await
    }

    async fn put<B, T>(
        &self,
        path: &str,
        body: &B,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let default = RequestConfig::default();
        let request = self
            .prepare(Method::PUT, &self.url(path), config.unwrap_or(&default))
            .await?
            .json(body);
        self.send_json(request).await
    }

    async fn delete<T>(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        let default = RequestConfig::default();
        let request = self
            .prepare(Method::DELETE, &self.url(path), config.unwrap_or(&default))
            .await?;
        self.send_json(request).await
    }

    async fn get<T>(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        let default = RequestConfig::default();
        let config = config.unwrap_or(&default);

        if config.has_json_response() {
            let request = self.prepare(Method::GET, &self.url(path), config).await?;
            return self.send_json(request).await;
        }

        let (status, response) = self.fetch_raw(path, config).await?;
        let ApiResponse { data, headers } = response;
        let data = match data {
            Some(raw) => raw.decode().map_err(|e| map_decode_error(status, &e))?,
            None => None,
        };
        Ok(ApiResponse::new(data, headers))
    }

    async fn get_raw(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<RawBody>, AppError> {
        let default = RequestConfig::default();
        let (_, response) = self.fetch_raw(path, config.unwrap_or(&default)).await?;
        Ok(response)
    }

    async fn get_media_file(
        &self,
        media_file: &MediaFile,
        params: Option<&RequestParams>,
    ) -> Result<ApiResponse<FileData>, AppError> {
        let internal = media_file.is_internal();
        let mut config = RequestConfig::new()
            .with_accept(APPLICATION_OCTET_STREAM)
            .with_public(!internal);
        if let Some(params) = params {
            config.params = params.clone();
        }

        let url = media_file.resolve(&self.base_url);
        let request = self.prepare(Method::GET, &url, &config).await?;
        let response = self.execute(request).await?;
        let (_, headers, body) = read_body(response).await?;

        if body.is_empty() {
            error!("No file found at {}", url);
            return Err(AppError::NoFile);
        }

        let file = FileData {
            name: media_file.name.clone(),
            content_type: headers.get("content-type").cloned().flatten(),
            content: body,
        };
        Ok(ApiResponse::new(Some(file), headers))
    }

    async fn post_multipart<T>(
        &self,
        path: &str,
        parts: Vec<MultiPart>,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.send_multipart(Method::POST, path, parts, config).await
    }

    async fn put_multipart<T>(
        &self,
        path: &str,
        parts: Vec<MultiPart>,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.send_multipart(Method::PUT, path, parts, config).await
    }
}
