//! LightBouncer firmware library.
//!
//! Four LEDs show a bounce or bar pattern; a serial console and three
//! joystick buttons change speed and mode; a hardware watchdog resets the
//! board if the control loop stops feeding it.
//!
//! Exposes the control-loop modules for integration testing on the host.
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod pins;
pub mod scheduler;

pub mod adapters;
pub mod drivers;
