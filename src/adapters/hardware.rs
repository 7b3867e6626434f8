//! Hardware adapter: bridges the board peripherals to the port traits.
//!
//! Owns the watchdog, the busy-wait delay and the console UART, and routes
//! GPIO through the raw `hw_init` calls. This is the only module in the
//! system that touches real hardware. On non-espidf targets the underlying
//! drivers use cfg-gated simulation stubs.

use embedded_hal::delay::DelayNs;

use crate::app::ports::{ConsolePort, DelayPort, GpioPort, Level, WatchdogPort};
use crate::drivers::delay::BusyWait;
use crate::drivers::hw_init;
use crate::drivers::uart::Uart;
use crate::drivers::watchdog::Watchdog;
use crate::error::{GpioError, Result};
use crate::pins;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<D> {
    watchdog: Watchdog,
    delay: BusyWait<D>,
    uart: Uart,
}

impl<D: DelayNs> HardwareAdapter<D> {
    pub fn new(watchdog: Watchdog, delay: BusyWait<D>, uart: Uart) -> Self {
        Self {
            watchdog,
            delay,
            uart,
        }
    }

    pub fn uart(&self) -> &Uart {
        &self.uart
    }

    pub fn watchdog(&self) -> &Watchdog {
        &self.watchdog
    }
}

fn check_output(pin: i32) -> core::result::Result<(), GpioError> {
    if pins::LED_GPIOS.contains(&pin) {
        Ok(())
    } else {
        Err(GpioError::UnknownPin(pin))
    }
}

fn check_input(pin: i32) -> core::result::Result<(), GpioError> {
    if pins::BUTTON_GPIOS.contains(&pin) {
        Ok(())
    } else {
        Err(GpioError::UnknownPin(pin))
    }
}

// ── GpioPort implementation ───────────────────────────────────

impl<D: DelayNs> GpioPort for HardwareAdapter<D> {
    fn configure_output(&mut self, pin: i32) -> Result<()> {
        check_output(pin)?;
        hw_init::init_output(pin).map_err(GpioError::from)?;
        Ok(())
    }

    fn configure_input(&mut self, pin: i32) -> Result<()> {
        check_input(pin)?;
        hw_init::init_input(pin).map_err(GpioError::from)?;
        Ok(())
    }

    fn write_pin(&mut self, pin: i32, level: Level) {
        hw_init::gpio_write(pin, level == Level::High);
    }

    fn read_pin(&mut self, pin: i32) -> Level {
        Level::from(hw_init::gpio_read(pin))
    }
}

// ── WatchdogPort implementation ───────────────────────────────

impl<D: DelayNs> WatchdogPort for HardwareAdapter<D> {
    fn init(&mut self) -> Result<()> {
        self.watchdog.init()
    }

    fn hit(&mut self) {
        self.watchdog.hit();
    }
}

// ── DelayPort implementation ──────────────────────────────────

impl<D: DelayNs> DelayPort for HardwareAdapter<D> {
    fn busy_wait(&mut self, units: u32) {
        self.delay.busy_wait(units);
    }
}

// ── ConsolePort implementation ────────────────────────────────

impl<D: DelayNs> ConsolePort for HardwareAdapter<D> {
    fn print_line(&mut self, line: &str) {
        self.uart.write_line(line);
    }
}
