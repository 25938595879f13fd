//! Console input background thread
//!
//! Reads run on a plain OS thread so a pending read never holds up runtime
//! shutdown.

use std::{
    io::{self, BufRead, BufReader},
    thread::{self, JoinHandle},
};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::host::Command;

/// Spawn a detached thread forwarding stdin commands to `tx`
pub fn spawn_console_reader(tx: mpsc::Sender<Command>) -> io::Result<JoinHandle<()>> {
    spawn_reader(BufReader::new(io::stdin()), tx)
}

/// Spawn a detached thread forwarding commands read from `reader` to `tx`
pub fn spawn_reader<R>(reader: R, tx: mpsc::Sender<Command>) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || {
            info!("Reading commands from console");
            read_commands(reader, tx);
        })
}

/// Parse one command per line. A `Quit` is sent when input runs out.
///
/// Blocks the calling thread, so it must not run on an async worker.
pub fn read_commands<R: BufRead>(reader: R, tx: mpsc::Sender<Command>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read console input: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if tx.blocking_send(command).is_err() {
                    debug!("Command receiver dropped, stopping console reader");
                    return;
                }
                if command == Command::Quit {
                    return;
                }
            }
            Err(e) => warn!("{}", e),
        }
    }

    debug!("Console input exhausted");
    let _ = tx.blocking_send(Command::Quit);
}
