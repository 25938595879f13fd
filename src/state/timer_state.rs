//! Stopwatch bookkeeping held by the controller

/// Running flag and banked time. The base epoch lives in the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub running: bool,
    /// Milliseconds accumulated before the current run segment
    pub offset: i64,
}

impl TimerState {
    /// Create a stopped timer with nothing banked
    pub fn new() -> Self {
        Self {
            running: false,
            offset: 0,
        }
    }

    /// Check if the stopwatch is meant to be advancing
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
