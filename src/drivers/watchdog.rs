//! Task Watchdog Timer (TWDT) driver.
//!
//! Wraps the ESP-IDF TWDT API to reset the device if the main loop stops
//! feeding it for longer than the configured timeout. The scheduler feeds
//! it on every periodic timer tick and the pattern engine on every step;
//! after the `x` command nothing does, and the TWDT panics and resets.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

use crate::app::ports::WatchdogPort;
use crate::error::{Error, Result};

pub struct Watchdog {
    timeout_ms: u32,
    subscribed: bool,
}

impl Watchdog {
    /// Create an unarmed watchdog; call [`WatchdogPort::init`] to arm it.
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            timeout_ms,
            subscribed: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.subscribed
    }
}

impl WatchdogPort for Watchdog {
    #[cfg(target_os = "espidf")]
    fn init(&mut self) -> Result<()> {
        if self.subscribed {
            return Ok(());
        }
        // SAFETY: TWDT reconfigure/add are called once from the main task
        // during bring-up; the null handle subscribes the calling task.
        unsafe {
            let cfg = esp_task_wdt_config_t {
                timeout_ms: self.timeout_ms,
                idle_core_mask: 0,
                trigger_panic: true,
            };
            let ret = esp_task_wdt_reconfigure(&cfg);
            if ret != ESP_OK as i32 {
                log::warn!(
                    "TWDT reconfigure returned {} (may already be configured)",
                    ret
                );
            }

            let ret = esp_task_wdt_add(core::ptr::null_mut());
            if ret != ESP_OK as i32 {
                return Err(Error::Watchdog(ret));
            }
        }
        self.subscribed = true;
        info!(
            "Watchdog: subscribed ({}ms timeout, panic on trigger)",
            self.timeout_ms
        );
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn init(&mut self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(Error::Watchdog(-1));
        }
        self.subscribed = true;
        info!("Watchdog(sim): armed ({}ms, no-op)", self.timeout_ms);
        Ok(())
    }

    fn hit(&mut self) {
        #[cfg(target_os = "espidf")]
        {
            if self.subscribed {
                // SAFETY: resets the TWDT counter for the subscribed task.
                unsafe {
                    esp_task_wdt_reset();
                }
            }
        }
    }
}
