//! Board configuration parameters
//!
//! All tunable timing constants for the LightBouncer firmware. Values are
//! fixed at build time; the firmware never persists or reloads them.

use serde::{Deserialize, Serialize};

use crate::app::state::FlashSpeed;
use crate::error::{Error, Result};

/// Core board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    // --- Patterns ---
    /// Base unit of the pattern step delay (busy-wait units at speed 9)
    pub base_delay_units: u32,
    /// Speed the firmware boots with (0 = slowest, 9 = fastest)
    pub default_speed: u8,

    // --- Input ---
    /// Busy-wait applied once per loop iteration after polling the buttons
    pub debounce_units: u32,

    // --- Timing ---
    /// Length of one busy-wait unit on real hardware (nanoseconds)
    pub delay_ns_per_unit: u32,
    /// Hardware watchdog timeout (milliseconds)
    pub watchdog_timeout_ms: u32,
    /// Periodic timer period; each tick allows one watchdog feed (milliseconds)
    pub timer_period_ms: u32,

    // --- Serial ---
    /// Console baud rate
    pub uart_baud: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            // Patterns
            base_delay_units: 10_000,
            default_speed: FlashSpeed::DEFAULT,

            // Input
            debounce_units: 0x4_0000,

            // Timing
            delay_ns_per_unit: 20,
            watchdog_timeout_ms: 10_000, // 10 s
            timer_period_ms: 100,        // 10 Hz

            // Serial
            uart_baud: 115_200,
        }
    }
}

impl BoardConfig {
    /// Reject values that would break the timing contract.
    ///
    /// Invalid values are rejected, not clamped: a config that cannot feed
    /// the watchdog in time must never reach the scheduler.
    pub fn validate(&self) -> Result<()> {
        if self.base_delay_units == 0 {
            return Err(Error::Config("base_delay_units must be non-zero"));
        }
        if self.default_speed > FlashSpeed::MAX {
            return Err(Error::Config("default_speed must be within 0..=9"));
        }
        if self.timer_period_ms == 0 {
            return Err(Error::Config("timer_period_ms must be non-zero"));
        }
        if self.timer_period_ms >= self.watchdog_timeout_ms {
            return Err(Error::Config(
                "timer_period_ms must be shorter than watchdog_timeout_ms",
            ));
        }
        if self.uart_baud == 0 {
            return Err(Error::Config("uart_baud must be non-zero"));
        }
        Ok(())
    }

    /// Speed the loop state starts with.
    pub fn initial_speed(&self) -> FlashSpeed {
        FlashSpeed::new(self.default_speed)
    }
}
