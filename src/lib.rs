//! Pocket Stopwatch - a single-screen stopwatch that survives configuration changes
//!
//! The [`controller`] keeps the running flag and banked time consistent with
//! an elapsed-time display across start, pause, reset and host lifecycle
//! events. The [`host`] and [`tasks`] modules drive it from a terminal.

pub mod config;
pub mod controller;
pub mod host;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use controller::{Intent, Lifecycle, StopwatchController};
pub use host::Activity;
pub use state::TimerSnapshot;
pub use utils::signals::shutdown_signal;
