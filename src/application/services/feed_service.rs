use crate::application::interfaces::feed::FeedService;
use crate::application::services::page_config;
use crate::constants::FEEDS_PATH;
use crate::error::AppError;
use crate::model::page::Page;
use crate::model::parameters::FeedPageParameters;
use crate::model::response::ApiResponse;
use crate::presentation::feed::Feed;
use crate::transport::api_client::ApiClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Feed queries on top of an [`ApiClient`]
pub struct FeedApi<C: ApiClient> {
    api_client: Arc<C>,
}

impl<C: ApiClient> FeedApi<C> {
    /// Creates a new instance of the feed service
    pub fn new(api_client: Arc<C>) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl<C: ApiClient + 'static> FeedService for FeedApi<C> {
    async fn page(
        &self,
        params: Option<&FeedPageParameters>,
    ) -> Result<ApiResponse<Page<Feed>>, AppError> {
        let config = page_config(params)?;
        info!("Getting feed page");

        let response = self
            .api_client
            .get::<Page<Feed>>(FEEDS_PATH, Some(&config))
            .await?;

        debug!(
            "Feed page obtained: {} feeds",
            response.data.as_ref().map_or(0, |p| p.content.len())
        );
        Ok(response)
    }
}
