use std::error::Error;
use std::sync::Arc;
use tracing::{error, info};
use wolk_simulator_client::prelude::*;
use wolk_simulator_client::utils::config::get_env_or_none;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    // Load configuration from environment variables
    let cfg = Config::new();
    info!("Loaded config → {}", cfg.rest_api.base_url);

    let mut client = ApiClientService::new(&cfg)?;
    if let Some(token) = get_env_or_none::<String>("WOLK_REST_TOKEN") {
        client = client.with_token_provider(Arc::new(StaticTokenProvider::bearer(token)));
    }
    let client = Arc::new(client);

    let devices = DeviceApi::new(client.clone());
    let params = DevicePageParameters::new(0, 10).with_sort("name,asc");
    match devices.page(Some(&params)).await {
        Ok(response) => {
            let page = response.into_data().unwrap_or_default();
            info!(
                "✅ {} of {} devices (page {}/{})",
                page.content.len(),
                page.total_elements,
                page.number + 1,
                page.total_pages
            );
            for device in &page.content {
                info!("{}", device);
            }
        }
        Err(e) => {
            error!("Failed to load devices: {e}");
            return Err(Box::new(e));
        }
    }

    let scenarios = ScenarioApi::new(client.clone());
    let page = scenarios.page(None).await?.into_data().unwrap_or_default();
    for scenario in &page.content {
        info!("{} [{:?}]", scenario.name, scenario.status);
    }

    let config = RequestConfig::new().with_param("size", 5);
    let feeds: ApiResponse<serde_json::Value> = client.get("/api/feeds", Some(&config)).await?;
    info!("Raw feeds page: {}", feeds.data.unwrap_or_default());

    Ok(())
}
