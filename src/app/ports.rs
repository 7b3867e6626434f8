//! Port traits: the hexagonal boundary between the control loop and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Scheduler / Engine / Poller / Interpreter
//! ```
//!
//! The real board adapter ([`HardwareAdapter`](crate::adapters::hardware::HardwareAdapter))
//! and the host test mocks implement these traits. Core components take
//! `&mut impl Board`, so one value satisfies every port and call order is
//! observable in a single history.

use crate::error::Result;

// ───────────────────────────────────────────────────────────────
// Digital I/O
// ───────────────────────────────────────────────────────────────

/// Logic level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

/// Raw GPIO access.
///
/// `configure_*` is called once at start-up and must be idempotent.
/// Reads and writes are infallible at this boundary; adapters log any
/// driver-level failure instead of surfacing it to the loop.
pub trait GpioPort {
    fn configure_output(&mut self, pin: i32) -> Result<()>;

    fn configure_input(&mut self, pin: i32) -> Result<()>;

    fn write_pin(&mut self, pin: i32, level: Level);

    fn read_pin(&mut self, pin: i32) -> Level;
}

// ───────────────────────────────────────────────────────────────
// Watchdog
// ───────────────────────────────────────────────────────────────

/// Hardware watchdog. If `hit()` is not called within the timeout the
/// board resets.
pub trait WatchdogPort {
    /// Arm the watchdog.
    fn init(&mut self) -> Result<()>;

    /// Feed the watchdog.
    fn hit(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Blocking delay
// ───────────────────────────────────────────────────────────────

/// Coarse blocking delay.
///
/// One unit is one busy-wait iteration; it is not calibrated to wall-clock
/// time. Nothing else in the core runs while this blocks.
pub trait DelayPort {
    fn busy_wait(&mut self, units: u32);
}

// ───────────────────────────────────────────────────────────────
// Serial console (sink side)
// ───────────────────────────────────────────────────────────────

/// Line-oriented output on the serial console.
pub trait ConsolePort {
    fn print_line(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Reset cause register
// ───────────────────────────────────────────────────────────────

/// Boot-time access to the reset-source status register.
pub trait ResetCausePort {
    /// Raw register value.
    fn read_raw(&self) -> u32;

    /// Clear the status bits so the next boot reports only its own cause.
    fn clear(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Board bundle
// ───────────────────────────────────────────────────────────────

/// Everything the control loop drives during an iteration.
pub trait Board: GpioPort + WatchdogPort + DelayPort + ConsolePort {}

impl<T: GpioPort + WatchdogPort + DelayPort + ConsolePort> Board for T {}
