//! Board drivers, pattern and input engines, and peripheral helpers.

pub mod button;
pub mod delay;
pub mod hw_init;
pub mod hw_timer;
pub mod led_patterns;
pub mod task_pin;
pub mod uart;
pub mod watchdog;
