//! Periodic hardware timer using ESP-IDF's esp_timer API.
//!
//! Each expiry raises [`TIMER_TICK`](crate::events::TIMER_TICK); the
//! scheduler polls and clears it and feeds the watchdog once per tick.
//! Callbacks run in the ESP timer task context, so raising the atomic flag
//! is all they do.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::error::{Error, Result};

#[cfg(target_os = "espidf")]
static mut TICK_TIMER: esp_timer_handle_t = core::ptr::null_mut();

#[cfg(target_os = "espidf")]
unsafe extern "C" fn tick_cb(_arg: *mut core::ffi::c_void) {
    crate::events::timer_isr();
}

/// Start the periodic tick timer.
#[cfg(target_os = "espidf")]
pub fn start_timer(period_ms: u32) -> Result<()> {
    // SAFETY: TICK_TIMER is written here once at boot from the single main
    // task before the callback can fire. The callback only stores an atomic.
    unsafe {
        let args = esp_timer_create_args_t {
            callback: Some(tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: c"tick".as_ptr(),
            skip_unhandled_events: true,
        };
        let ret = esp_timer_create(&args, &raw mut TICK_TIMER);
        if ret != ESP_OK as i32 {
            log::error!("hw_timer: create failed (rc={})", ret);
            return Err(Error::Init("periodic timer create failed"));
        }
        let ret = esp_timer_start_periodic(TICK_TIMER, u64::from(period_ms) * 1_000);
        if ret != ESP_OK as i32 {
            log::error!("hw_timer: start failed (rc={})", ret);
            return Err(Error::Init("periodic timer start failed"));
        }
    }
    log::info!("hw_timer: tick every {}ms", period_ms);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn start_timer(period_ms: u32) -> Result<()> {
    if period_ms == 0 {
        return Err(Error::Init("periodic timer period must be non-zero"));
    }
    log::info!("hw_timer(sim): tick every {}ms not started (raise TIMER_TICK manually)", period_ms);
    Ok(())
}
