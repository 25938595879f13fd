//! Platform capabilities the stopwatch consumes
//!
//! The monotonic clock and the elapsed-time display widget live here, each
//! behind a trait so the controller can be driven by hand in tests.

pub mod chronometer;
pub mod clock;

// Re-export main types
pub use chronometer::{format_elapsed, Chronometer, ElapsedDisplay};
pub use clock::{ManualClock, MonotonicClock, SystemClock};
