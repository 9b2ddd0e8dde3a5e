use crate::application::interfaces::device::DeviceService;
use crate::application::services::page_config;
use crate::constants::DEVICES_PATH;
use crate::error::AppError;
use crate::model::page::Page;
use crate::model::parameters::DevicePageParameters;
use crate::model::response::ApiResponse;
use crate::presentation::device::Device;
use crate::transport::api_client::ApiClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Device queries on top of an [`ApiClient`]
///
/// Errors and envelopes from the client pass through unchanged.
pub struct DeviceApi<C: ApiClient> {
    api_client: Arc<C>,
}

impl<C: ApiClient> DeviceApi<C> {
    /// Creates a new instance of the device service
    pub fn new(api_client: Arc<C>) -> Self {
        Self { api_client }
    }

    /// Gets the underlying client
    pub fn api_client(&self) -> Arc<C> {
        self.api_client.clone()
    }
}

#[async_trait]
impl<C: ApiClient + 'static> DeviceService for DeviceApi<C> {
    async fn page(
        &self,
        params: Option<&DevicePageParameters>,
    ) -> Result<ApiResponse<Page<Device>>, AppError> {
        let config = page_config(params)?;
        info!("Getting device page");

        let response = self
            .api_client
            .get::<Page<Device>>(DEVICES_PATH, Some(&config))
            .await?;

        if let Some(page) = &response.data {
            debug!(
                "Device page {} obtained: {} of {} devices",
                page.number,
                page.content.len(),
                page.total_elements
            );
        }
        Ok(response)
    }
}
