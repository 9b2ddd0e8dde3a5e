/// Device paging wrapper
pub mod device_service;
/// Feed paging wrapper
pub mod feed_service;
/// Scenario paging wrapper
pub mod scenario_service;

pub use crate::application::interfaces::device::*;
pub use crate::application::interfaces::feed::*;
pub use crate::application::interfaces::scenario::*;
pub use device_service::DeviceApi;
pub use feed_service::FeedApi;
pub use scenario_service::ScenarioApi;

use crate::constants::APPLICATION_PAGE_JSON;
use crate::error::AppError;
use crate::model::request::RequestConfig;
use serde::Serialize;

/// Request configuration shared by every paging query
pub(crate) fn page_config<P: Serialize>(params: Option<&P>) -> Result<RequestConfig, AppError> {
    let config = RequestConfig::new().with_accept(APPLICATION_PAGE_JSON);
    match params {
        Some(params) => config.with_params(params),
        None => Ok(config),
    }
}
