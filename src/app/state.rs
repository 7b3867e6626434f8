//! Loop state owned by the scheduler.
//!
//! Speed, pattern mode and the watchdog gate are single-writer values: only
//! the scheduler thread touches them. Instead of process-wide globals they
//! live in one [`LoopState`] that the scheduler lends (`&mut`) to the
//! interpreter and the input poller on each call.

// ───────────────────────────────────────────────────────────────
// FlashSpeed
// ───────────────────────────────────────────────────────────────

/// LED flash speed, 0 (slowest) to 9 (fastest).
///
/// Construction and arithmetic saturate at the bounds; the value can never
/// leave `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FlashSpeed(u8);

impl FlashSpeed {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 9;
    pub const DEFAULT: u8 = 4;

    /// Clamp `value` into range.
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Speed selected by an ASCII digit (`'0'..='9'`), if `byte` is one.
    pub const fn from_digit(byte: u8) -> Option<Self> {
        if byte.is_ascii_digit() {
            Some(Self(byte - b'0'))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// One step faster, saturating at 9.
    #[must_use]
    pub const fn faster(self) -> Self {
        if self.0 >= Self::MAX {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    /// One step slower, saturating at 0.
    #[must_use]
    pub const fn slower(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Default for FlashSpeed {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl core::fmt::Display for FlashSpeed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ───────────────────────────────────────────────────────────────
// PatternMode
// ───────────────────────────────────────────────────────────────

/// Which LED sequence the Left button selects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternMode {
    /// One LED at a time, 0→3 then 3→0.
    #[default]
    Bounce,
    /// LEDs fill 0→3 then empty 3→0.
    Bar,
}

impl PatternMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Bounce => Self::Bar,
            Self::Bar => Self::Bounce,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// WatchdogGate
// ───────────────────────────────────────────────────────────────

/// Sticky "stop feeding the watchdog" switch.
///
/// Once closed it stays closed; the watchdog then resets the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WatchdogGate {
    closed: bool,
}

impl WatchdogGate {
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub const fn is_closed(self) -> bool {
        self.closed
    }
}

// ───────────────────────────────────────────────────────────────
// LoopState
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopState {
    speed: FlashSpeed,
    mode: PatternMode,
    gate: WatchdogGate,
}

impl LoopState {
    pub fn new(speed: FlashSpeed) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    pub fn speed(&self) -> FlashSpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: FlashSpeed) {
        self.speed = speed;
    }

    pub fn mode(&self) -> PatternMode {
        self.mode
    }

    /// Flip the pattern mode and return the new one.
    pub fn toggle_mode(&mut self) -> PatternMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn watchdog_gate(&self) -> WatchdogGate {
        self.gate
    }

    pub fn stop_feeding_watchdog(&mut self) {
        self.gate.close();
    }
}
