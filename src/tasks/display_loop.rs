//! Display refresh and command dispatch loop

use std::{io::Write, time::Duration};

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::{
    host::{Activity, Command},
    services::MonotonicClock,
    state::TimerSnapshot,
};

/// Drive `activity` until `quit` or until the command channel closes.
///
/// Every `tick` the face is written to `out` while the screen is visible and
/// the display is advancing. Returns the state the screen would save on exit.
pub async fn run_display_loop<C, W>(
    activity: &mut Activity<C>,
    tick: Duration,
    commands: &mut mpsc::Receiver<Command>,
    out: &mut W,
) -> TimerSnapshot
where
    C: MonotonicClock,
    W: Write,
{
    info!("Starting display loop (tick={}ms)", tick.as_millis());

    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    emit(out, &activity.display_text());

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if activity.is_ticking() {
                    emit(out, &activity.display_text());
                }
            }

            command = commands.recv() => {
                let Some(command) = command else {
                    debug!("Command channel closed");
                    break;
                };
                debug!("Received command: {:?}", command);

                match command {
                    Command::Quit => break,
                    Command::Intent(intent) => {
                        activity.press(intent);
                        emit(out, &activity.display_text());
                    }
                    Command::Suspend => activity.suspend(),
                    Command::Resume => {
                        activity.resume();
                        emit(out, &activity.display_text());
                    }
                    Command::Rotate => {
                        activity.rotate();
                        emit(out, &activity.display_text());
                    }
                    Command::Save => emit(out, &activity.save()),
                    Command::Status => match serde_json::to_string(&activity.status()) {
                        Ok(json) => emit(out, &json),
                        Err(e) => error!("Failed to encode status: {}", e),
                    },
                }
            }
        }
    }

    info!("Display loop stopped");
    activity.snapshot()
}

fn emit<W: Write>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
        warn!("Failed to write to display: {}", e);
    }
}
