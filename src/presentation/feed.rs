/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Data feed published by a simulated device
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    /// Backend identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Reference used on the wire
    #[serde(default)]
    pub reference: Option<String>,
    /// Unit of the published values
    #[serde(default)]
    pub unit: Option<String>,
    /// Device publishing the feed
    #[serde(default)]
    pub device_id: Option<i64>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
