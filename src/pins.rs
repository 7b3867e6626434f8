//! GPIO / peripheral pin assignments for the LightBouncer board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers. Assignments are fixed at compile time; there is
//! no runtime remapping.

// ---------------------------------------------------------------------------
// Indicator LEDs (active HIGH, 330 Ω series resistors)
// ---------------------------------------------------------------------------

pub const LED0_GPIO: i32 = 11;
pub const LED1_GPIO: i32 = 12;
pub const LED2_GPIO: i32 = 13;
pub const LED3_GPIO: i32 = 14;

/// LEDs in bounce/bar order (LED0 first).
pub const LED_GPIOS: [i32; 4] = [LED0_GPIO, LED1_GPIO, LED2_GPIO, LED3_GPIO];

// ---------------------------------------------------------------------------
// Joystick buttons (active-low with internal pull-up)
// ---------------------------------------------------------------------------

/// Toggles the pattern mode.
pub const BUTTON_LEFT_GPIO: i32 = 4;
/// Increases the flash speed.
pub const BUTTON_UP_GPIO: i32 = 5;
/// Decreases the flash speed.
pub const BUTTON_DOWN_GPIO: i32 = 6;

pub const BUTTON_GPIOS: [i32; 3] = [BUTTON_LEFT_GPIO, BUTTON_UP_GPIO, BUTTON_DOWN_GPIO];

// ---------------------------------------------------------------------------
// UART console
// ---------------------------------------------------------------------------

pub const UART_PORT: i32 = 0;
pub const UART_TX_GPIO: i32 = 43;
pub const UART_RX_GPIO: i32 = 44;
