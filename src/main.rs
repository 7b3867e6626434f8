//! LightBouncer Firmware: Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter (GPIO + TWDT + Ets delay + UART0)             │
//! │  EspResetCause   (esp_reset_reason)                            │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │  Scheduler: CommandInterpreter · InputPoller ·         │    │
//! │  │             PatternEngine · watchdog gate              │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  UART RX task ──▶ SERIAL_RX      esp_timer ──▶ TIMER_TICK      │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use lightbouncer::adapters::hardware::HardwareAdapter;
use lightbouncer::adapters::reset_cause::EspResetCause;
use lightbouncer::app::interpreter::print_help;
use lightbouncer::app::ports::WatchdogPort;
use lightbouncer::config::BoardConfig;
use lightbouncer::diagnostics;
use lightbouncer::drivers::{delay, hw_timer, uart::Uart, watchdog::Watchdog};
use lightbouncer::events::{SERIAL_RX, TIMER_TICK};
use lightbouncer::pins;
use lightbouncer::scheduler::Scheduler;

fn halt(what: &str, e: impl core::fmt::Display) -> ! {
    // Nothing feeds the watchdog from here, so the board resets after the timeout.
    log::error!("{} failed: {}, halting", what, e);
    #[allow(clippy::empty_loop)]
    loop {}
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    diagnostics::install_panic_handler();

    info!("╔══════════════════════════════════════╗");
    info!("║  LightBouncer v{}                  ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = BoardConfig::default();
    config.validate()?;
    match serde_json::to_string(&config) {
        Ok(json) => info!("Config: {}", json),
        Err(e) => log::warn!("Config: not serialisable ({})", e),
    }

    // ── 3. Peripheral bring-up ────────────────────────────────
    let mut console = Uart::new(pins::UART_PORT);
    if let Err(e) = console.install(config.uart_baud, pins::UART_TX_GPIO, pins::UART_RX_GPIO) {
        halt("UART install", e);
    }
    let mut hw = HardwareAdapter::new(
        Watchdog::new(config.watchdog_timeout_ms),
        delay::board_delay(config.delay_ns_per_unit),
        console,
    );

    let mut scheduler = Scheduler::from_config(&config, &SERIAL_RX, &TIMER_TICK);
    if let Err(e) = scheduler.configure(&mut hw) {
        halt("GPIO init", e);
    }

    // ── 4. Watchdog, tick timer, serial receive ───────────────
    if let Err(e) = hw.init() {
        halt("Watchdog init", e);
    }
    if let Err(e) = hw_timer::start_timer(config.timer_period_ms) {
        halt("Timer start", e);
    }
    if let Err(e) = hw.uart().spawn_rx_task() {
        halt("UART RX task", e);
    }

    // ── 5. Console greeting and boot diagnostics ──────────────
    diagnostics::print_banner(&mut hw);
    let mut reset_register = EspResetCause::read();
    diagnostics::report_reset_cause(&mut hw, &mut reset_register);
    print_help(&mut hw);

    // ── 6. Control loop (never returns) ───────────────────────
    scheduler.run(&mut hw)
}
