//! Status report structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of everything the host knows, printed by the `status` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub running: bool,
    pub offset: i64,
    pub base: i64,
    pub elapsed_millis: i64,
    pub display: String,
    pub visible: bool,
    pub rotations: u32,
    pub uptime: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Format a duration in whole seconds as e.g. `1h 2m 3s`
pub fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
