//! Cooperative scheduler: the firmware's only thread of control.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     run_iteration()                          │
//! │                                                              │
//! │  1. CommandInterpreter  ◀── PendingByte  ◀── UART RX task     │
//! │         │                                                    │
//! │  2. InputPoller         ◀── Left / Up / Down pins            │
//! │         │  (patterns + debounce block here)                  │
//! │         ▼                                                    │
//! │  3. TimerFlag ── set? ──▶ gate open? ──▶ Watchdog::hit()     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order inside an iteration never changes. Every blocking call is
//! bounded, so every iteration reaches step 3. The loop never exits; after
//! the `x` command the watchdog starves and resets the board.

use log::{info, warn};

use crate::app::interpreter::CommandInterpreter;
use crate::app::ports::Board;
use crate::app::state::LoopState;
use crate::config::BoardConfig;
use crate::drivers::button::InputPoller;
use crate::drivers::led_patterns::PatternEngine;
use crate::error::Result;
use crate::events::{PendingByte, TimerFlag};
use crate::pins;

pub struct Scheduler<'a> {
    state: LoopState,
    engine: PatternEngine,
    poller: InputPoller,
    interpreter: CommandInterpreter,
    rx: &'a PendingByte,
    tick: &'a TimerFlag,
    iterations: u64,
    watchdog_feeds: u64,
    starvation_reported: bool,
}

impl<'a> Scheduler<'a> {
    pub fn new(
        state: LoopState,
        engine: PatternEngine,
        poller: InputPoller,
        rx: &'a PendingByte,
        tick: &'a TimerFlag,
    ) -> Self {
        Self {
            state,
            engine,
            poller,
            interpreter: CommandInterpreter::new(),
            rx,
            tick,
            iterations: 0,
            watchdog_feeds: 0,
            starvation_reported: false,
        }
    }

    /// Build the scheduler for the board's fixed pin map.
    pub fn from_config(config: &BoardConfig, rx: &'a PendingByte, tick: &'a TimerFlag) -> Self {
        Self::new(
            LoopState::new(config.initial_speed()),
            PatternEngine::new(pins::LED_GPIOS, config.base_delay_units),
            InputPoller::new(
                pins::BUTTON_LEFT_GPIO,
                pins::BUTTON_UP_GPIO,
                pins::BUTTON_DOWN_GPIO,
                config.debounce_units,
            ),
            rx,
            tick,
        )
    }

    /// Configure LED outputs and button inputs. Call once before [`run`](Self::run).
    pub fn configure(&self, hw: &mut impl Board) -> Result<()> {
        self.engine.configure(hw)?;
        self.poller.configure(hw)?;
        info!("Scheduler: 4 LED outputs + 3 button inputs configured");
        Ok(())
    }

    /// One pass: commands, then inputs, then the watchdog gate.
    pub fn run_iteration(&mut self, hw: &mut impl Board) {
        self.iterations += 1;

        self.interpreter
            .process_pending_command(self.rx, &mut self.state, &self.engine, hw);

        self.poller
            .poll_and_handle(&mut self.state, &self.engine, hw);

        if self.tick.take() {
            if self.state.watchdog_gate().is_closed() {
                if !self.starvation_reported {
                    warn!(
                        "Scheduler: watchdog not fed (iteration {}), waiting for reset",
                        self.iterations
                    );
                    self.starvation_reported = true;
                }
            } else {
                hw.hit();
                self.watchdog_feeds += 1;
            }
        }
    }

    /// Run forever.
    pub fn run(&mut self, hw: &mut impl Board) -> ! {
        info!("Scheduler: entering main loop");
        loop {
            self.run_iteration(hw);
        }
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn engine(&self) -> &PatternEngine {
        &self.engine
    }

    /// Iterations completed since start-up.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Watchdog hits issued by the timer gate (pattern hits not included).
    pub fn watchdog_feeds(&self) -> u64 {
        self.watchdog_feeds
    }
}
