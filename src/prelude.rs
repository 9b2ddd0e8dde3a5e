/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Wolk Simulator Client Prelude
//!
//! Convenient import of the types needed for most interactions with the
//! simulator backend.
//!
//! ```rust
//! use wolk_simulator_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8080");
//! let client = ApiClientService::new(&config).unwrap();
//! assert_eq!(client.base_url(), "http://localhost:8080");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, RestApiConfig};
pub use crate::utils::logger::setup_logger;
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{AppError, HttpError, HttpErrorType};

// ============================================================================
// AUTHENTICATION
// ============================================================================

pub use crate::application::auth::{StaticTokenProvider, TokenProvider};

// ============================================================================
// TRANSPORT
// ============================================================================

pub use crate::transport::api_client::ApiClient;
pub use crate::transport::http_client::ApiClientService;

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

pub use crate::model::page::{Page, PageParameters, Pageable, Sort};
pub use crate::model::parameters::{
    DevicePageParameters, FeedPageParameters, ScenarioPageParameters,
};
pub use crate::model::request::{
    MultiPart, MultiPartContent, RequestConfig, RequestHeaders, RequestParams, ResponseType,
};
pub use crate::model::response::{ApiResponse, FileData, HttpHeaders, MediaFile, RawBody};

// ============================================================================
// DOMAIN SERVICES
// ============================================================================

pub use crate::application::services::{
    DeviceApi, DeviceService, FeedApi, FeedService, ScenarioApi, ScenarioService,
};
pub use crate::presentation::device::Device;
pub use crate::presentation::feed::Feed;
pub use crate::presentation::scenario::{Scenario, ScenarioStatus};
