//! Interrupt-to-loop hand-off.
//!
//! Two values cross from producer contexts into the scheduler:
//!
//! ```text
//! ┌──────────────┐  post()   ┌──────────────┐  take()   ┌──────────────┐
//! │ UART RX task │──────────▶│ PendingByte  │──────────▶│              │
//! └──────────────┘           │ (1 slot)     │           │  Scheduler   │
//! ┌──────────────┐  set()    ┌──────────────┐  take()   │  (consumer)  │
//! │ Timer ISR    │──────────▶│ TimerFlag    │──────────▶│              │
//! └──────────────┘           └──────────────┘           └──────────────┘
//! ```
//!
//! `PendingByte` holds at most one byte. A second byte posted before the
//! loop consumes the first replaces it: last write wins and the earlier
//! byte is dropped silently.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

// ── Serial receive slot ──────────────────────────────────────

/// Single-slot, overwrite-on-full byte channel.
pub struct PendingByte {
    slot: Signal<CriticalSectionRawMutex, u8>,
}

impl PendingByte {
    pub const fn new() -> Self {
        Self {
            slot: Signal::new(),
        }
    }

    /// Store `byte`, replacing any byte not yet consumed.
    /// Safe to call from interrupt context.
    pub fn post(&self, byte: u8) {
        self.slot.signal(byte);
    }

    /// Take the pending byte, leaving the slot empty.
    pub fn take(&self) -> Option<u8> {
        self.slot.try_take()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.signaled()
    }
}

impl Default for PendingByte {
    fn default() -> Self {
        Self::new()
    }
}

// ── Periodic timer flag ──────────────────────────────────────

/// Flag raised by the periodic timer, polled and cleared by the loop.
/// Repeated ticks before the loop observes the flag collapse into one.
pub struct TimerFlag {
    raised: AtomicBool,
}

impl TimerFlag {
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Raise the flag. Safe to call from interrupt context.
    pub fn set(&self) {
        self.raised.store(true, Ordering::Release);
    }

    pub fn is_set(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Clear the flag, returning whether it was raised.
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::AcqRel)
    }
}

impl Default for TimerFlag {
    fn default() -> Self {
        Self::new()
    }
}

// ── Process-wide instances ───────────────────────────────────

/// Byte most recently received on the console UART.
pub static SERIAL_RX: PendingByte = PendingByte::new();

/// Raised by the periodic hardware timer.
pub static TIMER_TICK: TimerFlag = TimerFlag::new();

/// Serial receive handler: register with the UART producer.
pub fn serial_rx_isr(byte: u8) {
    SERIAL_RX.post(byte);
}

/// Periodic timer handler: register with the hardware timer.
pub fn timer_isr() {
    TIMER_TICK.set();
}
