use crate::error::AppError;
use crate::model::page::Page;
use crate::model::parameters::DevicePageParameters;
use crate::model::response::ApiResponse;
use crate::presentation::device::Device;
use async_trait::async_trait;

/// Interface for the device service
#[async_trait]
pub trait DeviceService: Send + Sync {
    /// Gets one page of devices
    ///
    /// # Arguments
    /// * `params` - Optional search filter, page, size and sort
    ///
    /// # Returns
    /// * The page envelope together with the response headers
    async fn page(
        &self,
        params: Option<&DevicePageParameters>,
    ) -> Result<ApiResponse<Page<Device>>, AppError>;
}
