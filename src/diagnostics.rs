//! Boot diagnostics.
//!
//! Prints the welcome banner, reports why the board last reset, and clears
//! the reset-source register so the next boot reports only its own cause.
//! Also installs a panic hook that logs the reason before the board resets.

use core::fmt::Write as _;

use log::info;

use crate::app::ports::{ConsolePort, ResetCausePort};

/// Register value after a power-on (cold) reset.
pub const COLD_RESET: u32 = 0x01;
/// Register value after a watchdog reset.
pub const WATCHDOG_RESET: u32 = 0x10;
/// Register value after an external (reset pin) reset.
pub const EXTERNAL_RESET: u32 = 0x20;

/// Why the board last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    Cold,
    Watchdog,
    External,
    /// Any other register value, including several bits at once.
    Other(u32),
}

impl ResetCause {
    /// Exact match against the single-source register values.
    pub fn classify(raw: u32) -> Self {
        match raw {
            COLD_RESET => Self::Cold,
            WATCHDOG_RESET => Self::Watchdog,
            EXTERNAL_RESET => Self::External,
            other => Self::Other(other),
        }
    }
}

/// Welcome banner printed once at boot.
pub fn print_banner(console: &mut impl ConsolePort) {
    let mut line = heapless::String::<48>::new();
    let _ = write!(line, "Welcome to LightBouncer v{}!", env!("CARGO_PKG_VERSION"));
    console.print_line("");
    console.print_line(&line);
}

/// Read, print and clear the reset cause.
pub fn report_reset_cause(
    console: &mut impl ConsolePort,
    register: &mut impl ResetCausePort,
) -> ResetCause {
    let raw = register.read_raw();
    let cause = ResetCause::classify(raw);

    let mut line = heapless::String::<96>::new();
    let _ = write!(line, "Value in Reset Register: {}", raw);
    console.print_line(&line);

    line.clear();
    let _ = write!(
        line,
        "List of Reset Sources (External Reset, Watchdog Reset, Cold Reset): {}, {}, {}",
        u8::from(cause == ResetCause::External),
        u8::from(cause == ResetCause::Watchdog),
        u8::from(cause == ResetCause::Cold),
    );
    console.print_line(&line);

    register.clear();
    info!("Boot: reset cause {:?} (raw=0x{:x})", cause, raw);
    cause
}

/// Install a panic hook that logs the reason before the default handler
/// aborts and the board resets.
///
/// Must be called once during init, after the logger is ready.
pub fn install_panic_handler() {
    std::panic::set_hook(Box::new(|info| {
        let reason = if let Some(msg) = info.payload().downcast_ref::<&str>() {
            *msg
        } else if let Some(msg) = info.payload().downcast_ref::<String>() {
            msg.as_str()
        } else {
            "unknown panic"
        };

        match info.location() {
            Some(loc) => log::error!("PANIC: {} at {}:{}", reason, loc.file(), loc.line()),
            None => log::error!("PANIC: {}", reason),
        }
    }));
}
