//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements                        | Connects to            |
//! |---------------|-----------------------------------|------------------------|
//! | `hardware`    | GpioPort, WatchdogPort,           | ESP32 GPIO, TWDT,      |
//! |               | DelayPort, ConsolePort            | ROM delay, UART0       |
//! | `reset_cause` | ResetCausePort                    | `esp_reset_reason()`   |

pub mod hardware;
pub mod reset_cause;
