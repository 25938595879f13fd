//! Terminal host module
//!
//! This module stands in for the platform's lifecycle driver: it owns the
//! screen, recreates it on configuration changes, and reports its status.

pub mod activity;
pub mod command;
pub mod report;

// Re-export main types
pub use activity::Activity;
pub use command::Command;
pub use report::StatusReport;
