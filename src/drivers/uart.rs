//! Serial console driver.
//!
//! Owns the console UART: line output for the help text and command
//! acknowledgements, and a receive task that blocks on the driver and posts
//! each byte into [`SERIAL_RX`](crate::events::SERIAL_RX). The control loop
//! never touches the receive side directly.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::error::{Error, Result};

const RX_BUFFER_BYTES: i32 = 256;
const TX_BUFFER_BYTES: i32 = 0;

/// Console serial port.
pub struct Uart {
    port: i32,
    installed: bool,
}

impl Uart {
    pub fn new(port: i32) -> Self {
        Self {
            port,
            installed: false,
        }
    }

    pub fn port(&self) -> i32 {
        self.port
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Install the driver at `baud`, 8N1, no flow control.
    #[cfg(target_os = "espidf")]
    pub fn install(&mut self, baud: u32, tx_pin: i32, rx_pin: i32) -> Result<()> {
        if self.installed {
            return Ok(());
        }
        let cfg = uart_config_t {
            baud_rate: baud as i32,
            data_bits: uart_word_length_t_UART_DATA_8_BITS,
            parity: uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };
        // SAFETY: called once from the main task before the receive task
        // exists; the driver owns its buffers afterwards.
        unsafe {
            let ret = uart_param_config(self.port, &cfg);
            if ret != ESP_OK as i32 {
                return Err(Error::Uart(ret));
            }
            let ret = uart_set_pin(self.port, tx_pin, rx_pin, -1, -1);
            if ret != ESP_OK as i32 {
                return Err(Error::Uart(ret));
            }
            let ret = uart_driver_install(
                self.port,
                RX_BUFFER_BYTES,
                TX_BUFFER_BYTES,
                0,
                core::ptr::null_mut(),
                0,
            );
            if ret != ESP_OK as i32 {
                return Err(Error::Uart(ret));
            }
        }
        self.installed = true;
        log::info!("uart: UART{} @ {} baud (tx={}, rx={})", self.port, baud, tx_pin, rx_pin);
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn install(&mut self, baud: u32, tx_pin: i32, rx_pin: i32) -> Result<()> {
        if baud == 0 {
            return Err(Error::Uart(-1));
        }
        self.installed = true;
        log::info!(
            "uart(sim): UART{} @ {} baud (tx={}, rx={})",
            self.port,
            baud,
            tx_pin,
            rx_pin
        );
        Ok(())
    }

    /// Write `line` followed by CR LF.
    #[cfg(target_os = "espidf")]
    pub fn write_line(&mut self, line: &str) {
        if !self.installed {
            log::info!("{}", line);
            return;
        }
        // SAFETY: uart_write_bytes copies from the borrowed slices before
        // returning (TX buffer size 0 means it blocks until sent).
        unsafe {
            uart_write_bytes(self.port, line.as_ptr().cast(), line.len());
            uart_write_bytes(self.port, b"\r\n".as_ptr().cast(), 2);
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn write_line(&mut self, line: &str) {
        log::info!("uart(sim): {}", line);
    }

    /// Spawn the receive task. Each byte read is posted to `SERIAL_RX`,
    /// overwriting any byte the loop has not consumed yet.
    #[cfg(target_os = "espidf")]
    pub fn spawn_rx_task(&self) -> Result<()> {
        if !self.installed {
            return Err(Error::Init("uart driver not installed"));
        }
        let port = self.port;
        crate::drivers::task_pin::spawn_on_core(crate::drivers::task_pin::UART_RX_TASK, move || {
            let mut byte = 0u8;
            loop {
                // SAFETY: one-byte buffer owned by this task; the driver
                // was installed before the task was spawned.
                let n = unsafe {
                    uart_read_bytes(port, (&raw mut byte).cast(), 1, TickType_t::MAX)
                };
                if n == 1 {
                    crate::events::serial_rx_isr(byte);
                } else if n < 0 {
                    log::warn!("uart: read failed (rc={})", n);
                }
            }
        })?;
        Ok(())
    }

    /// On the host, bytes are injected with
    /// [`serial_rx_isr`](crate::events::serial_rx_isr) directly.
    #[cfg(not(target_os = "espidf"))]
    pub fn spawn_rx_task(&self) -> Result<()> {
        if !self.installed {
            return Err(Error::Init("uart driver not installed"));
        }
        log::info!("uart(sim): no receive task on host");
        Ok(())
    }
}
