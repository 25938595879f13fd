//! Async tasks module
//!
//! This module contains the display loop and the console reader thread that feeds it.

pub mod console_input;
pub mod display_loop;

// Re-export main functions
pub use console_input::{read_commands, spawn_console_reader, spawn_reader};
pub use display_loop::run_display_loop;
