//! LED pattern engine.
//!
//! Drives the four indicator LEDs through one full, blocking cycle of either
//! pattern. The step delay is exponential in the flash speed:
//!
//! ```text
//! delay_units = base_units * 2^(9 - speed)
//! ```
//!
//! so speed 9 waits `base_units` per step and speed 0 waits 512× longer.
//!
//! ## Patterns
//!
//! | Pattern | Forward pass (0→3)             | Backward pass (3→0)            |
//! |---------|--------------------------------|--------------------------------|
//! | Bounce  | on, hit, wait, off             | on, hit, wait, off             |
//! | Bar     | on, hit, wait (left lit)       | off, hit, wait                 |
//!
//! Both finish with one extra watchdog hit. A full pass at speed 0 can take
//! longer than the watchdog timeout, so every step feeds it.

use log::debug;

use crate::app::ports::{Board, GpioPort, Level};
use crate::app::state::{FlashSpeed, PatternMode};
use crate::error::Result;

/// Number of indicator LEDs.
pub const LED_COUNT: usize = 4;

/// Step delay for `speed`, saturating instead of overflowing.
pub fn delay_units(base_units: u32, speed: FlashSpeed) -> u32 {
    let shift = u32::from(FlashSpeed::MAX - speed.get());
    base_units.saturating_mul(1 << shift)
}

pub struct PatternEngine {
    leds: [i32; LED_COUNT],
    base_units: u32,
}

impl PatternEngine {
    pub fn new(leds: [i32; LED_COUNT], base_units: u32) -> Self {
        Self { leds, base_units }
    }

    /// Configure every LED pin as an output and switch it off.
    pub fn configure(&self, hw: &mut impl GpioPort) -> Result<()> {
        for &pin in &self.leds {
            hw.configure_output(pin)?;
            hw.write_pin(pin, Level::Low);
        }
        Ok(())
    }

    pub fn delay_units(&self, speed: FlashSpeed) -> u32 {
        delay_units(self.base_units, speed)
    }

    pub fn run(&self, mode: PatternMode, speed: FlashSpeed, hw: &mut impl Board) {
        match mode {
            PatternMode::Bounce => self.run_bounce(speed, hw),
            PatternMode::Bar => self.run_bar(speed, hw),
        }
    }

    /// One LED lit at a time, 0→3 then 3→0.
    pub fn run_bounce(&self, speed: FlashSpeed, hw: &mut impl Board) {
        let wait = self.delay_units(speed);
        debug!("pattern: bounce (speed={}, step={} units)", speed, wait);

        for &pin in self.leds.iter().chain(self.leds.iter().rev()) {
            hw.write_pin(pin, Level::High);
            hw.hit();
            hw.busy_wait(wait);
            hw.write_pin(pin, Level::Low);
        }

        hw.hit();
    }

    /// Fill 0→3, then empty 3→0.
    pub fn run_bar(&self, speed: FlashSpeed, hw: &mut impl Board) {
        let wait = self.delay_units(speed);
        debug!("pattern: bar (speed={}, step={} units)", speed, wait);

        for &pin in &self.leds {
            hw.write_pin(pin, Level::High);
            hw.hit();
            hw.busy_wait(wait);
        }

        for &pin in self.leds.iter().rev() {
            hw.write_pin(pin, Level::Low);
            hw.hit();
            hw.busy_wait(wait);
        }

        hw.hit();
    }
}
