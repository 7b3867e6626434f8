//! Unified error types for the LightBouncer firmware.
//!
//! The control loop itself has no recoverable errors: unknown commands are
//! reported on the console and out-of-range speeds saturate. Everything here
//! belongs to start-up: peripheral bring-up, watchdog arming and config
//! validation. All variants are `Copy` so adapters can return them without
//! allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible bring-up operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// A GPIO pin could not be configured or accessed.
    Gpio(GpioError),
    /// Configuration is invalid.
    Config(&'static str),
    /// Watchdog arming failed (raw driver return code).
    Watchdog(i32),
    /// Serial console driver failed (raw driver return code).
    Uart(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Watchdog(rc) => write!(f, "watchdog: driver returned {rc}"),
            Self::Uart(rc) => write!(f, "uart: driver returned {rc}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Direction/pull configuration was rejected by the driver.
    ConfigFailed { pin: i32, rc: i32 },
    /// The pin number does not belong to this board.
    UnknownPin(i32),
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFailed { pin, rc } => write!(f, "GPIO{pin} config failed (rc={rc})"),
            Self::UnknownPin(pin) => write!(f, "GPIO{pin} is not assigned on this board"),
        }
    }
}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
