//! One-shot GPIO bring-up and raw pin access.
//!
//! Configures pin directions using raw ESP-IDF sys calls. Called once from
//! `main()` (through [`GpioPort`](crate::app::ports::GpioPort)) before the
//! scheduler starts. On host targets every call is a logging stub and pins
//! read HIGH (buttons released).

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::error::GpioError;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed { pin: i32, rc: i32 },
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed { pin, rc } => {
                write!(f, "GPIO{} config failed (rc={})", pin, rc)
            }
        }
    }
}

impl From<HwInitError> for GpioError {
    fn from(e: HwInitError) -> Self {
        match e {
            HwInitError::GpioConfigFailed { pin, rc } => GpioError::ConfigFailed { pin, rc },
        }
    }
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn init_output(pin: i32) -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: gpio_config only touches the pins in pin_bit_mask; called
    // from the single main task during bring-up.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed { pin, rc: ret });
    }
    log::info!("hw_init: GPIO{} output", pin);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_output(pin: i32) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): GPIO{} output", pin);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin.
    // Main-loop only.
    let ret = unsafe { gpio_set_level(pin, u32::from(high)) };
    if ret != ESP_OK as i32 {
        log::warn!("hw_init: GPIO{} write failed (rc={})", pin, ret);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── GPIO Inputs ───────────────────────────────────────────────

/// Configure `pin` as an input with the internal pull-up enabled
/// (buttons short to ground when pressed).
#[cfg(target_os = "espidf")]
pub fn init_input(pin: i32) -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: see init_output.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed { pin, rc: ret });
    }
    log::info!("hw_init: GPIO{} input (pull-up)", pin);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_input(pin: i32) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): GPIO{} input", pin);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    true
}
