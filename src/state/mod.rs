//! State management module
//!
//! This module contains the controller's bookkeeping and the snapshot record
//! that carries it across configuration changes.

pub mod snapshot;
pub mod timer_state;

// Re-export main types
pub use snapshot::TimerSnapshot;
pub use timer_state::TimerState;
