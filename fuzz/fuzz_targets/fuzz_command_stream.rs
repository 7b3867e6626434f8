//! Fuzz target: drive the scheduler with arbitrary serial bytes, button
//! levels and timer ticks.
//!
//! Input is consumed in pairs `[serial_byte, control]`. Control bits:
//! 0 = Left held, 1 = Up held, 2 = Down held, 3 = timer tick,
//! 4 = post the serial byte.
//!
//! Must never panic, and after any `x` the timer gate must never feed the
//! watchdog again.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lightbouncer::app::ports::{ConsolePort, DelayPort, GpioPort, Level, WatchdogPort};
use lightbouncer::config::BoardConfig;
use lightbouncer::error::Result;
use lightbouncer::events::{PendingByte, TimerFlag};
use lightbouncer::pins;
use lightbouncer::scheduler::Scheduler;

#[derive(Default)]
struct FuzzBoard {
    held: [bool; 3],
    lit: u32,
}

impl GpioPort for FuzzBoard {
    fn configure_output(&mut self, _pin: i32) -> Result<()> {
        Ok(())
    }

    fn configure_input(&mut self, _pin: i32) -> Result<()> {
        Ok(())
    }

    fn write_pin(&mut self, pin: i32, level: Level) {
        let bit = 1u32 << (pin & 31);
        match level {
            Level::High => self.lit |= bit,
            Level::Low => self.lit &= !bit,
        }
    }

    fn read_pin(&mut self, pin: i32) -> Level {
        let idx = pins::BUTTON_GPIOS.iter().position(|&p| p == pin);
        match idx {
            Some(i) if self.held[i] => Level::Low,
            _ => Level::High,
        }
    }
}

impl WatchdogPort for FuzzBoard {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn hit(&mut self) {}
}

impl DelayPort for FuzzBoard {
    fn busy_wait(&mut self, _units: u32) {}
}

impl ConsolePort for FuzzBoard {
    fn print_line(&mut self, _line: &str) {}
}

fuzz_target!(|data: &[u8]| {
    let rx = PendingByte::new();
    let tick = TimerFlag::new();
    let mut scheduler = Scheduler::from_config(&BoardConfig::default(), &rx, &tick);
    let mut hw = FuzzBoard::default();
    let mut stopped = false;

    for pair in data.chunks_exact(2) {
        let (byte, control) = (pair[0], pair[1]);
        hw.held = [control & 1 != 0, control & 2 != 0, control & 4 != 0];
        if control & 8 != 0 {
            tick.set();
        }
        if control & 16 != 0 {
            rx.post(byte);
            stopped |= byte == b'x';
        }

        let feeds = scheduler.watchdog_feeds();
        scheduler.run_iteration(&mut hw);

        assert!(scheduler.state().speed().get() <= 9);
        assert_eq!(scheduler.state().watchdog_gate().is_closed(), stopped);
        if stopped {
            assert_eq!(scheduler.watchdog_feeds(), feeds);
        }
        assert_eq!(hw.lit, 0, "a pattern left an LED on");
    }
});
