use crate::error::AppError;
use crate::model::page::Page;
use crate::model::parameters::ScenarioPageParameters;
use crate::model::response::ApiResponse;
use crate::presentation::scenario::Scenario;
use async_trait::async_trait;

/// Interface for the scenario service
#[async_trait]
pub trait ScenarioService: Send + Sync {
    /// Gets one page of scenarios
    ///
    /// # Arguments
    /// * `params` - Optional search filter, page, size and sort
    ///
    /// # Returns
    /// * The page envelope together with the response headers
    async fn page(
        &self,
        params: Option<&ScenarioPageParameters>,
    ) -> Result<ApiResponse<Page<Scenario>>, AppError>;
}
