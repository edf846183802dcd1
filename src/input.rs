//! Polled input readers for the user buttons and the slide switches.

use crate::board::{BUTTONS_MASK, SWITCHES_MASK};
use crate::port::{GpioPort, PinGroup, Pull};
use crate::types::{ButtonState, SwitchState};

/// The two user buttons (P1.1 and P1.4).
///
/// The buttons short to ground when pressed, so the pins use the internal
/// pull-up and read 0 while held.
pub struct Buttons<P> {
    pins: PinGroup<P>,
}

impl<P: GpioPort> Buttons<P> {
    /// Configures the button pins as pulled-up inputs.
    pub fn new(port: P) -> Self {
        let mut pins = PinGroup::new(port, BUTTONS_MASK);
        pins.configure_input(Pull::Up);
        Self { pins }
    }

    /// Samples the buttons.
    #[inline]
    pub fn read(&self) -> ButtonState {
        ButtonState::from_raw(self.pins.read_input())
    }
}

/// The PMOD SWT slide switches (P10.0 to P10.3).
pub struct Switches<P> {
    pins: PinGroup<P>,
}

impl<P: GpioPort> Switches<P> {
    /// Configures the switch pins as inputs. The module has its own pull resistors.
    pub fn new(port: P) -> Self {
        let mut pins = PinGroup::new(port, SWITCHES_MASK);
        pins.configure_input(Pull::None);
        Self { pins }
    }

    /// Samples the switches.
    #[inline]
    pub fn read(&self) -> SwitchState {
        SwitchState::from_raw(self.pins.read_input())
    }
}
