//! Elapsed-time display widget

use super::clock::MonotonicClock;

/// A display that renders `now - base` while started and freezes while stopped
pub trait ElapsedDisplay {
    fn set_base(&mut self, base: i64);
    fn base(&self) -> i64;
    fn start(&mut self);
    fn stop(&mut self);
    /// The value currently shown, in milliseconds
    fn elapsed_millis(&self) -> i64;
}

/// Default [`ElapsedDisplay`] that ticks off a [`MonotonicClock`]
#[derive(Debug, Clone)]
pub struct Chronometer<C> {
    clock: C,
    base: i64,
    started: bool,
    /// Last rendered value, shown while stopped
    shown: i64,
}

impl<C: MonotonicClock> Chronometer<C> {
    /// A stopped chronometer based at the current time, so it reads zero
    pub fn new(clock: C) -> Self {
        let base = clock.now_millis();
        Self {
            clock,
            base,
            started: false,
            shown: 0,
        }
    }

    /// Check if the display is advancing
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Render the current value as `MM:SS`, or `H:MM:SS` past the hour
    pub fn text(&self) -> String {
        format_elapsed(self.elapsed_millis())
    }

    fn render(&mut self) {
        self.shown = self.clock.now_millis().saturating_sub(self.base);
    }
}

impl<C: MonotonicClock> ElapsedDisplay for Chronometer<C> {
    fn set_base(&mut self, base: i64) {
        self.base = base;
        self.render();
    }

    fn base(&self) -> i64 {
        self.base
    }

    fn start(&mut self) {
        self.started = true;
        self.render();
    }

    fn stop(&mut self) {
        if self.started {
            self.render();
        }
        self.started = false;
    }

    fn elapsed_millis(&self) -> i64 {
        if self.started {
            self.clock.now_millis().saturating_sub(self.base)
        } else {
            self.shown
        }
    }
}

/// Format elapsed milliseconds as a stopwatch face
pub fn format_elapsed(millis: i64) -> String {
    let sign = if millis < 0 { "-" } else { "" };
    let total = (millis / 1000).unsigned_abs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}{}:{:02}:{:02}", sign, hours, minutes, seconds)
    } else {
        format!("{}{:02}:{:02}", sign, minutes, seconds)
    }
}
