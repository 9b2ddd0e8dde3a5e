/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioStatus {
    /// Defined but not started
    #[default]
    Idle,
    /// Currently driving its devices
    Running,
    /// Stopped by the user
    Stopped,
    /// Ran to completion
    Finished,
}

/// Simulation scenario driving a set of devices
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Backend identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle state
    #[serde(default)]
    pub status: ScenarioStatus,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
