//! The stopwatch controller

use tracing::debug;

use super::{Intent, Lifecycle};
use crate::{
    services::{ElapsedDisplay, MonotonicClock},
    state::{TimerSnapshot, TimerState},
};

/// Translates intents and lifecycle events into display and state mutations
#[derive(Debug)]
pub struct StopwatchController<D, C> {
    display: D,
    clock: C,
    state: TimerState,
}

impl<D: ElapsedDisplay, C: MonotonicClock> StopwatchController<D, C> {
    /// Create a stopped controller driving `display`
    pub fn new(display: D, clock: C) -> Self {
        Self {
            display,
            clock,
            state: TimerState::new(),
        }
    }

    /// Check if the stopwatch is meant to be advancing
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Milliseconds banked before the current run segment
    pub fn offset(&self) -> i64 {
        self.state.offset
    }

    /// Copy of the running flag and banked offset
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// The display widget being driven
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Dispatch a button press
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Start => self.start(),
            Intent::Pause => self.pause(),
            Intent::Reset => self.reset(),
        }
    }

    /// Start counting up from the banked offset, unless already running
    pub fn start(&mut self) {
        if self.state.running {
            debug!("Start ignored, stopwatch already running");
            return;
        }
        self.set_base_time();
        self.display.start();
        self.state.running = true;
        debug!("Stopwatch started from offset {}ms", self.state.offset);
    }

    /// Bank the elapsed time and freeze the display, if running
    pub fn pause(&mut self) {
        if !self.state.running {
            debug!("Pause ignored, stopwatch not running");
            return;
        }
        self.save_offset();
        self.display.stop();
        self.state.running = false;
        debug!("Stopwatch paused at {}ms", self.state.offset);
    }

    /// Rebase the display at zero without touching the running flag
    pub fn reset(&mut self) {
        self.state.offset = 0;
        self.set_base_time();
        debug!("Stopwatch reset (running={})", self.state.running);
    }

    fn set_base_time(&mut self) {
        self.display
            .set_base(self.clock.now_millis().saturating_sub(self.state.offset));
    }

    fn save_offset(&mut self) {
        self.state.offset = self.clock.now_millis().saturating_sub(self.display.base());
    }
}

impl<D: ElapsedDisplay, C: MonotonicClock> Lifecycle for StopwatchController<D, C> {
    fn on_create(&mut self, restored: Option<TimerSnapshot>) {
        let Some(snapshot) = restored else {
            debug!("Created without saved state");
            return;
        };

        self.state.offset = snapshot.offset;
        self.state.running = snapshot.running;
        if snapshot.running {
            self.display.set_base(snapshot.base);
            self.display.start();
        } else {
            self.set_base_time();
        }
        debug!("Restored {:?}", snapshot);
    }

    fn on_suspend(&mut self) {
        if self.state.running {
            self.save_offset();
            self.display.stop();
            debug!("Suspended while running, banked {}ms", self.state.offset);
        }
    }

    fn on_resume(&mut self) {
        if self.state.running {
            // Order matters: the base must absorb the offset before it is cleared.
            self.set_base_time();
            self.display.start();
            self.state.offset = 0;
            debug!("Resumed running from base {}", self.display.base());
        }
    }

    fn on_capture_state(&self) -> TimerSnapshot {
        TimerSnapshot::new(self.state.offset, self.state.running, self.display.base())
    }
}
