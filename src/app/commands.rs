//! Serial command set.
//!
//! One ASCII byte per command, no framing. [`Command::decode`] maps every
//! possible byte to exactly one command; anything unrecognised becomes
//! [`Command::Unknown`].

use super::state::FlashSpeed;

/// Commands accepted on the serial console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `?`: print the help text.
    Help,
    /// `0`..`9`: set the flash speed.
    SetSpeed(FlashSpeed),
    /// `a`: run the bounce pattern once.
    RunBounce,
    /// `b`: run the bar pattern once.
    RunBar,
    /// `x`: stop feeding the watchdog (the board will reset).
    StopWatchdog,
    /// Any other byte.
    Unknown(u8),
}

impl Command {
    pub fn decode(byte: u8) -> Self {
        if let Some(speed) = FlashSpeed::from_digit(byte) {
            return Self::SetSpeed(speed);
        }
        match byte {
            b'?' => Self::Help,
            b'a' => Self::RunBounce,
            b'b' => Self::RunBar,
            b'x' => Self::StopWatchdog,
            other => Self::Unknown(other),
        }
    }
}

/// Help text, one console line per entry.
pub const HELP_TEXT: &[&str] = &[
    "",
    "***********Commands*************",
    " ?  : Display this help message",
    "0-9 : Set speed 0 (slow) to 9 (fast).",
    "a   : Select pattern A (bounce).",
    "b   : Select pattern B (bar).",
    "x   : Stop hitting the watchdog.",
    "BTN LEFT : Push-button LEFT to toggle mode.",
    "BTN UP   : Push-button UP to increase speed.",
    "BTN DOWN : Push-button DOWN to decrease speed.",
    "*********************************",
];
