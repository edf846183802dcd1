//! Pin masks for the LaunchPad wiring.
//!
//! | Signal      | Port | Pins      | Notes                         |
//! |-------------|------|-----------|-------------------------------|
//! | Status LED  | P1   | 0         | red user LED                  |
//! | RGB LED     | P2   | 0-2       | high drive strength           |
//! | Buttons     | P1   | 1, 4      | negative logic, pull-up       |
//! | LED bar     | P9   | 0-7       | PMOD 8LD, high drive strength |
//! | Switches    | P10  | 0-3       | PMOD SWT, external pulls      |
//!
//! The status LED and the buttons share P1 but never touch each other's bits.

/// Status LED on P1.0.
pub const STATUS_LED_MASK: u8 = 0x01;

/// RGB LED channels on P2.0 (red), P2.1 (green) and P2.2 (blue).
pub const RGB_LED_MASK: u8 = 0x07;

/// Button 1 on P1.1.
pub const BUTTON_1_MASK: u8 = 0x02;

/// Button 2 on P1.4.
pub const BUTTON_2_MASK: u8 = 0x10;

/// Both buttons.
pub const BUTTONS_MASK: u8 = BUTTON_1_MASK | BUTTON_2_MASK;

/// Every pin of P9.
pub const LED_BAR_MASK: u8 = 0xFF;

/// P10.0 to P10.3.
pub const SWITCHES_MASK: u8 = 0x0F;
