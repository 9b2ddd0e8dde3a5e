/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::DEFAULT_REST_TIMEOUT_SECS;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the simulator backend, e.g. `http://localhost:8080`
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the simulator client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads `WOLK_REST_BASE_URL` and
    /// `WOLK_REST_TIMEOUT`. A missing base URL is left empty; the client refuses
    /// to start with it.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("WOLK_REST_BASE_URL", String::new());
        if base_url.trim().is_empty() {
            error!("WOLK_REST_BASE_URL not found in environment variables or .env file");
        }

        Config {
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("WOLK_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration for `base_url` with the default timeout
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REST_TIMEOUT_SECS,
            },
        }
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }
}
