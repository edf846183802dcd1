//! Output drivers for the status LED, the RGB LED and the LED bar.
//!
//! Every driver owns a [`PinGroup`] and writes only its own bits. Construction
//! configures the pins and leaves the outputs dark.

use crate::board::{LED_BAR_MASK, RGB_LED_MASK, STATUS_LED_MASK};
use crate::port::{Drive, GpioPort, PinGroup};
use crate::types::LedColor;

/// The red user LED (P1.0).
pub struct StatusLed<P> {
    pins: PinGroup<P>,
}

impl<P: GpioPort> StatusLed<P> {
    pub fn new(port: P) -> Self {
        let mut pins = PinGroup::new(port, STATUS_LED_MASK);
        pins.configure_output(Drive::Regular);
        Self { pins }
    }

    /// Turns the LED on or off.
    #[inline]
    pub fn set(&mut self, on: bool) {
        self.pins.write_output(if on { STATUS_LED_MASK } else { 0 });
    }

    /// Returns true if the LED is currently driven on.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.pins.read_output() != 0
    }
}

/// The tri-color user LED (P2.0 to P2.2), driven at high strength.
pub struct RgbLed<P> {
    pins: PinGroup<P>,
}

impl<P: GpioPort> RgbLed<P> {
    pub fn new(port: P) -> Self {
        let mut pins = PinGroup::new(port, RGB_LED_MASK);
        pins.configure_output(Drive::High);
        Self { pins }
    }

    /// Shows `color`.
    #[inline]
    pub fn set(&mut self, color: LedColor) {
        self.pins.write_output(color.bits());
    }

    /// Flips the channels that are lit in `color`.
    #[inline]
    pub fn toggle(&mut self, color: LedColor) {
        self.pins.toggle_output(color.bits());
    }

    /// Returns the color currently driven.
    #[inline]
    pub fn color(&self) -> LedColor {
        LedColor::from_bits_truncate(self.pins.read_output())
    }
}

/// The PMOD 8LD LED bar (P9), driven at high strength.
pub struct LedBar<P> {
    pins: PinGroup<P>,
}

impl<P: GpioPort> LedBar<P> {
    pub fn new(port: P) -> Self {
        let mut pins = PinGroup::new(port, LED_BAR_MASK);
        pins.configure_output(Drive::High);
        Self { pins }
    }

    /// Shows `mask` (bit `i` lights LED `i`) and returns the latch read back.
    #[inline]
    pub fn set(&mut self, mask: u8) -> u8 {
        self.pins.write_output(mask);
        self.pins.read_output()
    }

    /// Returns the mask currently shown.
    #[inline]
    pub fn value(&self) -> u8 {
        self.pins.read_output()
    }
}

/// All outputs, as handed to the patterns.
pub struct Outputs<L, R, B> {
    pub status: StatusLed<L>,
    pub rgb: RgbLed<R>,
    pub bar: LedBar<B>,
}

impl<L: GpioPort, R: GpioPort, B: GpioPort> Outputs<L, R, B> {
    /// Sets the status LED and the RGB LED together.
    pub fn show_leds(&mut self, status: bool, color: LedColor) {
        self.status.set(status);
        self.rgb.set(color);
    }
}
