/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Authorization capability injected into the client
//!
//! Authenticated (non-public) requests ask the configured [`TokenProvider`] for
//! the value of their `Authorization` header right before being sent.

use crate::error::AppError;
use async_trait::async_trait;

/// Supplies the `Authorization` header value of authenticated requests
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns the full header value, e.g. `Bearer eyJ...`
    async fn authorization(&self) -> Result<String, AppError>;
}

/// Provider returning a fixed header value
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    value: String,
}

impl StaticTokenProvider {
    /// Uses `value` verbatim as the header value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Builds a `Bearer <token>` provider
    pub fn bearer(token: impl AsRef<str>) -> Self {
        Self::new(format!("Bearer {}", token.as_ref()))
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn authorization(&self) -> Result<String, AppError> {
        if self.value.is_empty() {
            return Err(AppError::Token("empty authorization value".to_string()));
        }
        Ok(self.value.clone())
    }
}
