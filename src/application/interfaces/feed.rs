use crate::error::AppError;
use crate::model::page::Page;
use crate::model::parameters::FeedPageParameters;
use crate::model::response::ApiResponse;
use crate::presentation::feed::Feed;
use async_trait::async_trait;

/// Interface for the feed service
#[async_trait]
pub trait FeedService: Send + Sync {
    /// Gets one page of feeds
    ///
    /// # Arguments
    /// * `params` - Optional search filter, page, size and sort
    ///
    /// # Returns
    /// * The page envelope together with the response headers
    async fn page(
        &self,
        params: Option<&FeedPageParameters>,
    ) -> Result<ApiResponse<Page<Feed>>, AppError>;
}
