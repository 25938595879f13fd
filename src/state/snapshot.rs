//! Saved-state record handed to the host across configuration changes

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

/// Largest magnitude accepted for a restored offset or base
pub const MAX_RESTORED_MILLIS: i64 = i64::MAX / 2;

/// Everything needed to continue the stopwatch in a fresh screen instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimerSnapshot {
    /// Banked milliseconds
    pub offset: i64,
    pub running: bool,
    /// Display base, in monotonic milliseconds
    pub base: i64,
}

impl TimerSnapshot {
    /// Create a snapshot from its three fields
    pub fn new(offset: i64, running: bool, base: i64) -> Self {
        Self {
            offset,
            running,
            base,
        }
    }

    /// Encode as a JSON bundle
    pub fn encode(&self) -> String {
        json!({
            "offset": self.offset,
            "running": self.running,
            "base": self.base,
        })
        .to_string()
    }

    /// Decode and validate a JSON bundle
    pub fn decode(bundle: &str) -> Result<Self, String> {
        let snapshot: Self = serde_json::from_str(bundle)
            .map_err(|e| format!("Malformed snapshot bundle: {}", e))?;

        if snapshot.offset < 0 {
            return Err(format!("Snapshot offset is negative: {}", snapshot.offset));
        }
        if snapshot.offset > MAX_RESTORED_MILLIS {
            return Err(format!("Snapshot offset out of range: {}", snapshot.offset));
        }
        if snapshot.base.checked_abs().map_or(true, |b| b > MAX_RESTORED_MILLIS) {
            return Err(format!("Snapshot base out of range: {}", snapshot.base));
        }

        Ok(snapshot)
    }

    /// Decode an optional bundle, treating anything unusable as a first run
    pub fn from_bundle(bundle: Option<&str>) -> Option<Self> {
        let bundle = bundle?;
        match Self::decode(bundle) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("{}, starting fresh", e);
                None
            }
        }
    }
}
