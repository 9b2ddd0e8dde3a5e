use crate::application::interfaces::scenario::ScenarioService;
use crate::application::services::page_config;
use crate::constants::SCENARIOS_PATH;
use crate::error::AppError;
use crate::model::page::Page;
use crate::model::parameters::ScenarioPageParameters;
use crate::model::response::ApiResponse;
use crate::presentation::scenario::Scenario;
use crate::transport::api_client::ApiClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Scenario queries on top of an [`ApiClient`]
pub struct ScenarioApi<C: ApiClient> {
    api_client: Arc<C>,
}

impl<C: ApiClient> ScenarioApi<C> {
    /// Creates a new instance of the scenario service
    pub fn new(api_client: Arc<C>) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl<C: ApiClient + 'static> ScenarioService for ScenarioApi<C> {
    async fn page(
        &self,
        params: Option<&ScenarioPageParameters>,
    ) -> Result<ApiResponse<Page<Scenario>>, AppError> {
        let config = page_config(params)?;
        info!("Getting scenario page");

        let response = self
            .api_client
            .get::<Page<Scenario>>(SCENARIOS_PATH, Some(&config))
            .await?;

        debug!(
            "Scenario page obtained: {} scenarios",
            response.data.as_ref().map_or(0, |p| p.content.len())
        );
        Ok(response)
    }
}
