//! Stopwatch control module
//!
//! The controller owns the running flag and banked offset and drives an
//! [`ElapsedDisplay`](crate::services::ElapsedDisplay). Hosts talk to it
//! through the [`Lifecycle`] trait and [`Intent`]s.

pub mod lifecycle;
pub mod stopwatch;

// Re-export main types
pub use lifecycle::{Intent, Lifecycle};
pub use stopwatch::StopwatchController;
