//! Core-pinned helper tasks for the ESP32-S3.
//!
//! The control loop stays on the main task. The only helper is the UART
//! receive task, which blocks on the driver and hands bytes over through
//! [`SERIAL_RX`](crate::events::SERIAL_RX). `esp_pthread_set_cfg()` applies
//! to the *next* `pthread_create()` from the calling thread, so the
//! config/spawn pair must not interleave with other thread creation.

use crate::error::{Error, Result};

/// CPU core identifiers for the ESP32-S3 dual-core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Core {
    /// PRO_CPU, also runs the main task.
    Pro = 0,
    /// APP_CPU.
    App = 1,
}

/// Placement of one helper task.
#[derive(Debug, Clone, Copy)]
pub struct TaskPlacement {
    pub core: Core,
    pub priority: u8,
    pub stack_kb: usize,
    /// Must be NUL-terminated, e.g. `"uart-rx\0"`.
    pub name: &'static str,
}

/// The serial receive task sits just above the main loop's priority so a
/// byte is posted as soon as it lands.
pub const UART_RX_TASK: TaskPlacement = TaskPlacement {
    core: Core::App,
    priority: 6,
    stack_kb: 3,
    name: "uart-rx\0",
};

impl TaskPlacement {
    fn display_name(&self) -> &'static str {
        self.name.trim_end_matches('\0')
    }
}

/// Spawn `f` as a FreeRTOS-backed thread pinned per `task`.
#[cfg(target_os = "espidf")]
pub fn spawn_on_core(
    task: TaskPlacement,
    f: impl FnOnce() + Send + 'static,
) -> Result<std::thread::JoinHandle<()>> {
    // SAFETY: the pthread config is thread-local to the caller and is
    // consumed by the spawn immediately below.
    unsafe {
        let mut cfg = esp_idf_sys::esp_create_default_pthread_config();
        cfg.pin_to_core = task.core as i32;
        cfg.prio = i32::from(task.priority);
        cfg.stack_size = (task.stack_kb * 1024) as i32;
        cfg.thread_name = task.name.as_ptr() as *const _;
        let ret = esp_idf_sys::esp_pthread_set_cfg(&cfg);
        if ret != esp_idf_sys::ESP_OK as i32 {
            log::error!("esp_pthread_set_cfg failed: {}", ret);
            return Err(Error::Init("pthread config rejected"));
        }
    }

    log::info!(
        "Spawning '{}' on {:?} (pri={}, stack={}KB)",
        task.display_name(),
        task.core,
        task.priority,
        task.stack_kb
    );

    std::thread::Builder::new()
        .name(task.display_name().into())
        .spawn(f)
        .map_err(|_| Error::Init("task spawn failed"))
}

/// Host fallback: ignores core affinity and priority.
#[cfg(not(target_os = "espidf"))]
pub fn spawn_on_core(
    task: TaskPlacement,
    f: impl FnOnce() + Send + 'static,
) -> Result<std::thread::JoinHandle<()>> {
    log::info!(
        "Spawning '{}' (sim, no core pinning, stack={}KB)",
        task.display_name(),
        task.stack_kb
    );

    std::thread::Builder::new()
        .name(task.display_name().into())
        .stack_size(task.stack_kb * 1024)
        .spawn(f)
        .map_err(|_| Error::Init("task spawn failed"))
}
