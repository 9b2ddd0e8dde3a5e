/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Simulated device
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Backend identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Key the device uses to connect to the platform
    #[serde(default)]
    pub device_key: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the simulated device is currently connected
    #[serde(default)]
    pub connected: bool,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
