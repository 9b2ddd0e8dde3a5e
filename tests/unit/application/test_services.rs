use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use wolk_simulator_client::application::services::{
    DeviceApi, DeviceService, FeedApi, FeedService, ScenarioApi, ScenarioService,
};
use wolk_simulator_client::error::{AppError, HttpError, HttpErrorType};
use wolk_simulator_client::model::parameters::{
    DevicePageParameters, ScenarioPageParameters,
};
use wolk_simulator_client::model::request::{MultiPart, RequestConfig, RequestParams};
use wolk_simulator_client::model::response::{ApiResponse, FileData, HttpHeaders, MediaFile, RawBody};
use wolk_simulator_client::transport::api_client::ApiClient;

/// Records every `get` and answers with a canned body or error
struct RecordingClient {
    calls: Mutex<Vec<(String, RequestConfig)>>,
    body: Value,
    fail_with: Option<u16>,
}

impl RecordingClient {
    fn answering(body: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            body,
            fail_with: None,
        }
    }

    fn failing(code: u16) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            body: Value::Null,
            fail_with: Some(code),
        }
    }

    fn calls(&self) -> Vec<(String, RequestConfig)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiClient for RecordingClient {
    async fn post<B, T>(&self, _: &str, _: &B, _: Option<&RequestConfig>) -> Result<ApiResponse<T>, AppError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        unimplemented!()
    }

    async fn put<B, T>(&self, _: &str, _: &B, _: Option<&RequestConfig>) -> Result<ApiResponse<T>, AppError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        unimplemented!()
    }

    async fn delete<T>(&self, _: &str, _: Option<&RequestConfig>) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        unimplemented!()
    }

    async fn get<T>(&self, path: &str, config: Option<&RequestConfig>) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), config.cloned().unwrap_or_default()));
        if let Some(code) = self.fail_with {
            return Err(HttpError::new(code, json!({"message": "boom"})).into());
        }
        let mut headers = HttpHeaders::new();
        headers.insert("x-trace".to_string(), Some("abc".to_string()));
        Ok(ApiResponse::new(Some(serde_json::from_value(self.body.clone())?), headers))
    }

    async fn get_raw(&self, _: &str, _: Option<&RequestConfig>) -> Result<ApiResponse<RawBody>, AppError> {
        unimplemented!()
    }

    async fn get_media_file(&self, _: &MediaFile, _: Option<&RequestParams>) -> Result<ApiResponse<FileData>, AppError> {
        unimplemented!()
    }

    async fn post_multipart<T>(&self, _: &str, _: Vec<MultiPart>, _: Option<&RequestConfig>) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        unimplemented!()
    }

    async fn put_multipart<T>(&self, _: &str, _: Vec<MultiPart>, _: Option<&RequestConfig>) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        unimplemented!()
    }
}

fn page_body(content: Value) -> Value {
    json!({"content": content, "size": 20, "number": 0, "first": true, "last": true})
}

#[tokio::test]
async fn device_page_forwards_path_accept_and_params() {
    let client = Arc::new(RecordingClient::answering(page_body(json!([{"id": 7, "name": "pump"}]))));
    let api = DeviceApi::new(client.clone());

    let params = DevicePageParameters::new(0, 20).with_search_filter("pu");
    let response = api.page(Some(&params)).await.unwrap();

    let page = response.data.as_ref().unwrap();
    assert_eq!(page.content[0].id, 7);
    assert_eq!(response.header("x-trace"), Some("abc"));

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    let (path, config) = &calls[0];
    assert_eq!(path, "/api/devices");
    assert_eq!(config.accept(), "application/vnd.page+json");
    assert!(!config.public);
    assert_eq!(config.params.get("page"), Some(&json!(0)));
    assert_eq!(config.params.get("size"), Some(&json!(20)));
    assert_eq!(config.params.get("searchFilter"), Some(&json!("pu")));
}

#[tokio::test]
async fn feed_page_without_params_sends_none() {
    let client = Arc::new(RecordingClient::answering(page_body(json!([]))));
    let api = FeedApi::new(client.clone());

    let response = api.page(None).await.unwrap();
    assert!(response.data.unwrap().content.is_empty());

    let (path, config) = &client.calls()[0];
    assert_eq!(path, "/api/feeds");
    assert!(config.params.is_empty());
}

#[tokio::test]
async fn scenario_page_passes_errors_through() {
    let client = Arc::new(RecordingClient::failing(503));
    let api = ScenarioApi::new(client.clone());

    let err = api
        .page(Some(&ScenarioPageParameters::new(1, 10)))
        .await
        .unwrap_err();
    let http = err.as_http().expect("http error");
    assert_eq!(http.code, 503);
    assert_eq!(http.error_type, HttpErrorType::ServiceUnavailable);
    assert_eq!(http.message, "boom");
    assert_eq!(client.calls()[0].0, "/api/scenarios");
}

#[tokio::test]
async fn device_api_exposes_client() {
    let client = Arc::new(RecordingClient::answering(page_body(json!([]))));
    let api = DeviceApi::new(client.clone());
    assert!(Arc::ptr_eq(&api.api_client(), &client));
}

#[tokio::test]
async fn scenario_page_returns_envelope_and_headers() {
    let client = Arc::new(RecordingClient::answering(page_body(json!([
        {"id": 2, "name": "night", "status": "FINISHED"}
    ]))));
    let api = ScenarioApi::new(client.clone());

    let response = api
        .page(Some(&ScenarioPageParameters::new(0, 20).with_sort("name,asc")))
        .await
        .unwrap();
    assert_eq!(response.header("x-trace"), Some("abc"));
    let page = response.data.unwrap();
    assert_eq!(page.content[0].name, "night");

    let (path, config) = &client.calls()[0];
    assert_eq!(path, "/api/scenarios");
    assert_eq!(config.accept(), "application/vnd.page+json");
    assert_eq!(config.params.get("sort"), Some(&json!(["name,asc"])));
}
