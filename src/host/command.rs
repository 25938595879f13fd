//! Console commands understood by the terminal host

use std::str::FromStr;

use crate::controller::Intent;

/// One line of console input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A button press
    Intent(Intent),
    /// Send the screen to the background
    Suspend,
    /// Bring the screen back
    Resume,
    /// Tear the screen down and rebuild it from saved state
    Rotate,
    /// Print the saved-state bundle
    Save,
    /// Print a status report
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(intent) = s.parse::<Intent>() {
            return Ok(Command::Intent(intent));
        }

        match s.trim().to_lowercase().as_str() {
            "suspend" | "hide" => Ok(Command::Suspend),
            "resume" | "show" => Ok(Command::Resume),
            "rotate" => Ok(Command::Rotate),
            "save" => Ok(Command::Save),
            "status" => Ok(Command::Status),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}
