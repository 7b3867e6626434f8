//! Reset-cause adapter.
//!
//! The ESP32-S3 exposes the last reset reason through `esp_reset_reason()`
//! rather than a writable status register. The adapter folds that reason
//! into the single-bit register values [`diagnostics`](crate::diagnostics)
//! classifies, and models "clear" by reporting zero for the rest of the
//! boot. The hardware reason resets itself on the next boot.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::app::ports::ResetCausePort;
use crate::diagnostics::{COLD_RESET, EXTERNAL_RESET, WATCHDOG_RESET};

pub struct EspResetCause {
    raw: u32,
}

impl EspResetCause {
    #[cfg(target_os = "espidf")]
    pub fn read() -> Self {
        // SAFETY: read-only query of a value latched at boot.
        let reason = unsafe { esp_reset_reason() };
        #[allow(non_upper_case_globals)]
        let raw = match reason {
            esp_reset_reason_t_ESP_RST_POWERON => COLD_RESET,
            esp_reset_reason_t_ESP_RST_INT_WDT
            | esp_reset_reason_t_ESP_RST_TASK_WDT
            | esp_reset_reason_t_ESP_RST_WDT => WATCHDOG_RESET,
            esp_reset_reason_t_ESP_RST_EXT => EXTERNAL_RESET,
            _ => 0,
        };
        log::debug!("reset_cause: esp_reset_reason={} -> 0x{:x}", reason, raw);
        Self { raw }
    }

    /// Host boots always look like a power-on.
    #[cfg(not(target_os = "espidf"))]
    pub fn read() -> Self {
        Self { raw: COLD_RESET }
    }

    /// Fixed register value, for host runs and tests.
    pub fn with_raw(raw: u32) -> Self {
        Self { raw }
    }
}

impl ResetCausePort for EspResetCause {
    fn read_raw(&self) -> u32 {
        self.raw
    }

    fn clear(&mut self) {
        self.raw = 0;
    }
}
