/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::request::{MultiPart, RequestConfig, RequestParams};
use crate::model::response::{ApiResponse, FileData, MediaFile, RawBody};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Typed access to the simulator REST API
///
/// Paths are relative to the configured base URL. Every call resolves to
/// exactly one [`ApiResponse`] or one error; transport failures arrive as
/// [`AppError::Http`].
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// POSTs `body` as JSON
    async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send;

    /// PUTs `body` as JSON
    async fn put<B, T>(
        &self,
        path: &str,
        body: &B,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send;

    /// Sends a DELETE
    async fn delete<T>(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send;

    /// Sends a GET
    ///
    /// With a JSON accept header the body is decoded as JSON. With any other
    /// accept header the body is read according to the configured
    /// [`ResponseType`](crate::model::request::ResponseType) and then decoded.
    async fn get<T>(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send;

    /// Sends a GET and returns the body as read, without decoding
    async fn get_raw(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<RawBody>, AppError>;

    /// Downloads a media file
    ///
    /// URLs prefixed with `{{host}}` are resolved against the base URL and sent
    /// authenticated; any other URL is fetched as-is and public. An empty body
    /// fails with [`AppError::NoFile`].
    async fn get_media_file(
        &self,
        media_file: &MediaFile,
        params: Option<&RequestParams>,
    ) -> Result<ApiResponse<FileData>, AppError>;

    /// POSTs a multipart body
    async fn post_multipart<T>(
        &self,
        path: &str,
        parts: Vec<MultiPart>,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send;

    /// PUTs a multipart body
    async fn put_multipart<T>(
        &self,
        path: &str,
        parts: Vec<MultiPart>,
        config: Option<&RequestConfig>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send;
}
