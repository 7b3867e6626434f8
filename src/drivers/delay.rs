//! Busy-wait delay.
//!
//! Pattern steps and button debounce are expressed in abstract busy-wait
//! units. [`BusyWait`] converts units into nanoseconds with a fixed scale
//! and spins on any [`DelayNs`] provider. On the board that is the ROM
//! `ets_delay_us` loop (`esp_idf_hal::delay::Ets`), which never yields, so
//! nothing else on the main task runs while it blocks.

use embedded_hal::delay::DelayNs;

use crate::app::ports::DelayPort;

pub struct BusyWait<D> {
    delay: D,
    ns_per_unit: u32,
}

impl<D: DelayNs> BusyWait<D> {
    pub fn new(delay: D, ns_per_unit: u32) -> Self {
        Self { delay, ns_per_unit }
    }

    pub fn ns_per_unit(&self) -> u32 {
        self.ns_per_unit
    }
}

impl<D: DelayNs> DelayPort for BusyWait<D> {
    fn busy_wait(&mut self, units: u32) {
        // 2^32 units at 20 ns overflows u32 nanoseconds; spin in chunks.
        let mut remaining = u64::from(units) * u64::from(self.ns_per_unit);
        while remaining > 0 {
            let chunk = remaining.min(u64::from(u32::MAX)) as u32;
            self.delay.delay_ns(chunk);
            remaining -= u64::from(chunk);
        }
    }
}

#[cfg(target_os = "espidf")]
pub type BoardDelay = BusyWait<esp_idf_hal::delay::Ets>;

#[cfg(target_os = "espidf")]
pub fn board_delay(ns_per_unit: u32) -> BoardDelay {
    BusyWait::new(esp_idf_hal::delay::Ets, ns_per_unit)
}
