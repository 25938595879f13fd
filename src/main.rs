//! Pocket Stopwatch - a single-screen stopwatch that survives configuration changes
//!
//! This is the terminal entry point: commands are read from stdin and the
//! stopwatch face is written to stdout.

use tokio::sync::mpsc;
use tracing::info;

use pocket_stopwatch::{
    config::Config,
    host::Activity,
    services::SystemClock,
    state::TimerSnapshot,
    tasks::{run_display_loop, spawn_console_reader},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the stopwatch face
    tracing_subscriber::fmt()
        .with_env_filter(format!("pocket_stopwatch={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting pocket-stopwatch v1.0.0");
    info!("Commands: start|s, pause|p, reset|r, hide, show, rotate, save, status, quit");

    let restored = TimerSnapshot::from_bundle(config.restore.as_deref());
    let mut activity = Activity::create(SystemClock::new(), restored);

    let (tx, mut rx) = mpsc::channel(32);
    spawn_console_reader(tx)?;

    let mut stdout = std::io::stdout();
    tokio::select! {
        _ = run_display_loop(&mut activity, config.tick_interval(), &mut rx, &mut stdout) => {}
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Final state: {}", activity.save());
    info!("Stopwatch shutdown complete");
    Ok(())
}
