//! Serial command interpreter.
//!
//! Consumes at most one byte from the receive slot per call, prints the
//! console acknowledgement, and applies the command to the loop state.

use core::fmt::Write as _;

use log::{info, warn};

use super::commands::{Command, HELP_TEXT};
use super::ports::{Board, ConsolePort};
use super::state::LoopState;
use crate::drivers::led_patterns::PatternEngine;
use crate::events::PendingByte;

/// Longest formatted acknowledgement line.
const LINE_CAP: usize = 48;

#[derive(Debug, Default)]
pub struct CommandInterpreter;

impl CommandInterpreter {
    pub fn new() -> Self {
        Self
    }

    /// Handle the pending byte, if any. Returns the command that ran.
    pub fn process_pending_command(
        &self,
        rx: &PendingByte,
        state: &mut LoopState,
        engine: &PatternEngine,
        hw: &mut impl Board,
    ) -> Option<Command> {
        let byte = rx.take()?;
        let command = Command::decode(byte);
        self.execute(command, state, engine, hw);
        Some(command)
    }

    pub fn execute(
        &self,
        command: Command,
        state: &mut LoopState,
        engine: &PatternEngine,
        hw: &mut impl Board,
    ) {
        match command {
            Command::Help => {
                hw.print_line("Now displaying help message..");
                print_help(hw);
            }
            Command::SetSpeed(speed) => {
                let mut line = heapless::String::<LINE_CAP>::new();
                let _ = write!(line, "Setting LED speed to {}...", speed);
                hw.print_line(&line);
                state.set_speed(speed);
                info!("cmd: speed -> {}", speed);
            }
            Command::RunBounce => {
                hw.print_line("Changing to bounce mode.");
                engine.run_bounce(state.speed(), hw);
            }
            Command::RunBar => {
                hw.print_line("Changing to bar mode.");
                engine.run_bar(state.speed(), hw);
            }
            Command::StopWatchdog => {
                hw.print_line("No longer hitting the watchdog..");
                state.stop_feeding_watchdog();
                warn!("cmd: watchdog feeding stopped, reset imminent");
            }
            Command::Unknown(byte) => {
                hw.print_line(
                    "Error: unknown command. Please enter one of the following commands:",
                );
                print_help(hw);
                info!("cmd: unknown byte 0x{:02x}", byte);
            }
        }
    }
}

/// Print the command help, one line per entry.
pub fn print_help(console: &mut impl ConsolePort) {
    for line in HELP_TEXT {
        console.print_line(line);
    }
}
