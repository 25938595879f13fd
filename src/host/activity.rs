//! The single stopwatch screen, as seen by its host

use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::report::{format_uptime, StatusReport};
use crate::{
    controller::{Intent, Lifecycle, StopwatchController},
    services::{Chronometer, ElapsedDisplay, MonotonicClock},
    state::TimerSnapshot,
};

pub type ScreenController<C> = StopwatchController<Chronometer<C>, C>;

/// Owns the current screen instance and plays the lifecycle driver for it
#[derive(Debug)]
pub struct Activity<C> {
    clock: C,
    controller: ScreenController<C>,
    visible: bool,
    rotations: u32,
    created_at: Instant,
    last_action: Option<String>,
    last_action_time: Option<DateTime<Utc>>,
}

impl<C: MonotonicClock> Activity<C> {
    /// Create the screen, optionally from saved state, and bring it to the foreground
    pub fn create(clock: C, restored: Option<TimerSnapshot>) -> Self {
        let mut controller = Self::build_screen(&clock, restored);
        controller.on_resume();
        info!("Screen created (running={})", controller.is_running());

        Self {
            clock,
            controller,
            visible: true,
            rotations: 0,
            created_at: Instant::now(),
            last_action: None,
            last_action_time: None,
        }
    }

    fn build_screen(clock: &C, restored: Option<TimerSnapshot>) -> ScreenController<C> {
        let mut controller = StopwatchController::new(Chronometer::new(clock.clone()), clock.clone());
        controller.on_create(restored);
        controller
    }

    /// The controller of the current screen instance
    pub fn controller(&self) -> &ScreenController<C> {
        &self.controller
    }

    /// Check if the screen is in the foreground
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the display should be redrawn on each tick
    pub fn is_ticking(&self) -> bool {
        self.visible && self.controller.display().is_started()
    }

    /// Text currently shown on the stopwatch face
    pub fn display_text(&self) -> String {
        self.controller.display().text()
    }

    /// Forward a button press and record it as the last action
    pub fn press(&mut self, intent: Intent) {
        self.controller.handle(intent);
        self.record_action(intent.as_str());
    }

    /// Send the screen to the background
    pub fn suspend(&mut self) {
        if !self.visible {
            debug!("Suspend ignored, screen already hidden");
            return;
        }
        self.controller.on_suspend();
        self.visible = false;
        self.record_action("suspend");
        info!("Screen suspended");
    }

    /// Bring the screen back to the foreground
    pub fn resume(&mut self) {
        if self.visible {
            debug!("Resume ignored, screen already visible");
            return;
        }
        self.controller.on_resume();
        self.visible = true;
        self.record_action("resume");
        info!("Screen resumed");
    }

    /// Run a configuration change: save, destroy, recreate from the bundle, resume
    pub fn rotate(&mut self) {
        if !self.visible {
            debug!("Rotate ignored, screen is hidden");
            return;
        }

        self.controller.on_suspend();
        let bundle = self.save();
        debug!("Saved bundle {}", bundle);

        let restored = TimerSnapshot::from_bundle(Some(&bundle));
        self.controller = Self::build_screen(&self.clock, restored);
        self.controller.on_resume();

        self.rotations += 1;
        self.record_action("rotate");
        info!("Screen recreated after configuration change #{}", self.rotations);
    }

    /// Current saved-state bundle
    pub fn save(&self) -> String {
        self.snapshot().encode()
    }

    /// State the screen would save right now
    pub fn snapshot(&self) -> TimerSnapshot {
        self.controller.on_capture_state()
    }

    /// Build a status report for the `status` command
    pub fn status(&self) -> StatusReport {
        let display = self.controller.display();
        StatusReport {
            running: self.controller.is_running(),
            offset: self.controller.offset(),
            base: display.base(),
            elapsed_millis: display.elapsed_millis(),
            display: display.text(),
            visible: self.visible,
            rotations: self.rotations,
            uptime: format_uptime(self.created_at.elapsed().as_secs()),
            last_action: self.last_action.clone(),
            last_action_time: self.last_action_time,
        }
    }

    fn record_action(&mut self, action: &str) {
        self.last_action = Some(action.to_string());
        self.last_action_time = Some(Utc::now());
    }
}
