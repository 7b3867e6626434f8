//! Mock board for integration tests.
//!
//! Records every output-side call (pin writes, watchdog hits, busy-waits,
//! console lines) in one ordered history so tests can assert on both the
//! effects and their interleaving without touching real GPIO registers.

use std::collections::HashSet;

use lightbouncer::app::ports::{ConsolePort, DelayPort, GpioPort, Level, WatchdogPort};
use lightbouncer::config::BoardConfig;
use lightbouncer::error::{GpioError, Result};
use lightbouncer::events::{PendingByte, TimerFlag};
use lightbouncer::pins;
use lightbouncer::scheduler::Scheduler;

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    WritePin(i32, Level),
    Hit,
    Wait(u32),
    Print(String),
}

// ── MockBoard ─────────────────────────────────────────────────

pub struct MockBoard {
    pub calls: Vec<Call>,
    pub outputs: Vec<i32>,
    pub inputs: Vec<i32>,
    pub watchdog_armed: bool,
    pressed: HashSet<i32>,
    reject_pin: Option<i32>,
}

#[allow(dead_code)]
impl MockBoard {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            outputs: Vec::new(),
            inputs: Vec::new(),
            watchdog_armed: false,
            pressed: HashSet::new(),
            reject_pin: None,
        }
    }

    /// Board whose driver refuses to configure `pin`.
    pub fn rejecting(pin: i32) -> Self {
        Self {
            reject_pin: Some(pin),
            ..Self::new()
        }
    }

    /// Hold a button down (pin reads LOW) until released.
    pub fn press(&mut self, pin: i32) {
        self.pressed.insert(pin);
    }

    pub fn release(&mut self, pin: i32) {
        self.pressed.remove(&pin);
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn hits(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Hit).count()
    }

    pub fn waits(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Wait(units) => Some(*units),
                _ => None,
            })
            .collect()
    }

    pub fn writes(&self) -> Vec<(i32, Level)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::WritePin(pin, level) => Some((*pin, *level)),
                _ => None,
            })
            .collect()
    }

    pub fn printed(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Print(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioPort for MockBoard {
    fn configure_output(&mut self, pin: i32) -> Result<()> {
        if self.reject_pin == Some(pin) {
            return Err(GpioError::ConfigFailed { pin, rc: -1 }.into());
        }
        self.outputs.push(pin);
        Ok(())
    }

    fn configure_input(&mut self, pin: i32) -> Result<()> {
        if self.reject_pin == Some(pin) {
            return Err(GpioError::ConfigFailed { pin, rc: -1 }.into());
        }
        self.inputs.push(pin);
        Ok(())
    }

    fn write_pin(&mut self, pin: i32, level: Level) {
        self.calls.push(Call::WritePin(pin, level));
    }

    fn read_pin(&mut self, pin: i32) -> Level {
        if self.pressed.contains(&pin) {
            Level::Low
        } else {
            Level::High
        }
    }
}

impl WatchdogPort for MockBoard {
    fn init(&mut self) -> Result<()> {
        self.watchdog_armed = true;
        Ok(())
    }

    fn hit(&mut self) {
        self.calls.push(Call::Hit);
    }
}

impl DelayPort for MockBoard {
    fn busy_wait(&mut self, units: u32) {
        self.calls.push(Call::Wait(units));
    }
}

impl ConsolePort for MockBoard {
    fn print_line(&mut self, line: &str) {
        self.calls.push(Call::Print(line.to_string()));
    }
}

// ── Fixtures ──────────────────────────────────────────────────

/// Debounce wait issued once per iteration with the default config.
pub const DEBOUNCE: u32 = 0x4_0000;

/// Scheduler on the default config, wired to caller-owned hand-off slots
/// so tests never share the process-wide statics.
#[allow(dead_code)]
pub fn scheduler<'a>(rx: &'a PendingByte, tick: &'a TimerFlag) -> Scheduler<'a> {
    Scheduler::from_config(&BoardConfig::default(), rx, tick)
}

#[allow(dead_code)]
pub const LEFT: i32 = pins::BUTTON_LEFT_GPIO;
#[allow(dead_code)]
pub const UP: i32 = pins::BUTTON_UP_GPIO;
#[allow(dead_code)]
pub const DOWN: i32 = pins::BUTTON_DOWN_GPIO;
