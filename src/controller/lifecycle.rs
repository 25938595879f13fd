//! Host-driven lifecycle hooks and user intents

use std::{fmt, str::FromStr};

use crate::state::TimerSnapshot;

/// Callbacks an external host invokes at times of its choosing
pub trait Lifecycle {
    /// The screen was created, possibly from a previously captured snapshot
    fn on_create(&mut self, restored: Option<TimerSnapshot>);
    /// The screen is about to become invisible
    fn on_suspend(&mut self);
    /// The screen is visible again
    fn on_resume(&mut self);
    /// The host is about to save state
    fn on_capture_state(&self) -> TimerSnapshot;
}

/// Zero-argument triggers bound to the three buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Pause,
    Reset,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::Pause => "pause",
            Intent::Reset => "reset",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" | "s" => Ok(Intent::Start),
            "pause" | "p" => Ok(Intent::Pause),
            "reset" | "r" => Ok(Intent::Reset),
            other => Err(format!("Unknown intent: {}", other)),
        }
    }
}
