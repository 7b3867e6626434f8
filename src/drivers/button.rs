//! Polled joystick buttons.
//!
//! ## Hardware
//!
//! Three active-low momentary switches (Left, Up, Down) with pull-ups and no
//! hardware debounce. A button counts as actuated whenever its pin reads LOW.
//!
//! ## Polling
//!
//! [`InputPoller::poll_and_handle`] runs once per scheduler iteration:
//!
//! 1. Left : toggle the pattern mode and run that pattern (blocking)
//! 2. Up   : one step faster (saturating at 9)
//! 3. Down : one step slower (saturating at 0)
//! 4. one fixed busy-wait, the only debounce
//!
//! There is no previous-state memory. Holding Left replays the pattern on
//! every iteration and keeps toggling the mode; holding Up or Down keeps
//! stepping the speed.

use log::debug;

use crate::app::ports::{Board, GpioPort, Level};
use crate::app::state::LoopState;
use crate::drivers::led_patterns::PatternEngine;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Up,
    Down,
}

pub struct InputPoller {
    left: i32,
    up: i32,
    down: i32,
    debounce_units: u32,
}

impl InputPoller {
    pub fn new(left: i32, up: i32, down: i32, debounce_units: u32) -> Self {
        Self {
            left,
            up,
            down,
            debounce_units,
        }
    }

    pub fn configure(&self, hw: &mut impl GpioPort) -> Result<()> {
        hw.configure_input(self.left)?;
        hw.configure_input(self.up)?;
        hw.configure_input(self.down)?;
        Ok(())
    }

    /// GPIO pin `button` is wired to.
    pub fn pin(&self, button: Button) -> i32 {
        match button {
            Button::Left => self.left,
            Button::Up => self.up,
            Button::Down => self.down,
        }
    }

    /// Active-low: pressed reads LOW.
    pub fn is_pressed(&self, button: Button, hw: &mut impl GpioPort) -> bool {
        hw.read_pin(self.pin(button)) == Level::Low
    }

    pub fn poll_and_handle(
        &self,
        state: &mut LoopState,
        engine: &PatternEngine,
        hw: &mut impl Board,
    ) {
        if self.is_pressed(Button::Left, hw) {
            let mode = state.toggle_mode();
            debug!("button: left -> {:?}", mode);
            engine.run(mode, state.speed(), hw);
        }

        if self.is_pressed(Button::Up, hw) {
            state.set_speed(state.speed().faster());
            debug!("button: up -> speed {}", state.speed());
        }

        if self.is_pressed(Button::Down, hw) {
            state.set_speed(state.speed().slower());
            debug!("button: down -> speed {}", state.speed());
        }

        hw.busy_wait(self.debounce_units);
    }
}
