/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Wolk Simulator Client
//!
//! Typed REST client for the wolk simulator backend. It exposes scenarios,
//! devices and feeds through thin domain wrappers built on a generic client
//! that handles headers, query parameters, multipart uploads, media downloads
//! and normalization of every transport failure into one [`error::HttpError`].
//!
//! ## Example
//! ```ignore
//! use std::sync::Arc;
//! use wolk_simulator_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Arc::new(
//!     ApiClientService::new(&config)?
//!         .with_token_provider(Arc::new(StaticTokenProvider::bearer("token"))),
//! );
//!
//! let devices = DeviceApi::new(client.clone());
//! let page = devices.page(Some(&DevicePageParameters::new(0, 20))).await?;
//! ```

/// Application layer: configuration, auth capability and domain wrappers
pub mod application;
/// Shared constants
pub mod constants;
/// Error types
pub mod error;
/// Request, response and pagination models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Backend resource models
pub mod presentation;
/// REST client and request building
pub mod transport;
/// Environment and logging utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
