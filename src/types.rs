//! Input and output value types.

use crate::board::{BUTTON_1_MASK, BUTTON_2_MASK, BUTTONS_MASK, SWITCHES_MASK};

/// Sampled state of the two user buttons.
///
/// Holds the raw port bits masked to the button pins (bit 1 and bit 4).
/// Negative logic: a cleared bit means the button is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState(u8);

impl ButtonState {
    /// Both buttons held down.
    pub const BOTH_PRESSED: Self = ButtonState(0x00);

    /// Button 1 down, button 2 released.
    pub const FIRST_PRESSED: Self = ButtonState(BUTTON_2_MASK);

    /// Button 2 down, button 1 released.
    pub const SECOND_PRESSED: Self = ButtonState(BUTTON_1_MASK);

    /// Both buttons released.
    pub const NONE_PRESSED: Self = ButtonState(BUTTONS_MASK);

    /// Builds a state from a raw port read, ignoring non-button bits.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        ButtonState(raw & BUTTONS_MASK)
    }

    /// Returns the masked port bits.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn first_pressed(self) -> bool {
        self.0 & BUTTON_1_MASK == 0
    }

    #[inline]
    pub const fn second_pressed(self) -> bool {
        self.0 & BUTTON_2_MASK == 0
    }

    /// Returns which buttons are pressed.
    pub const fn combination(self) -> ButtonCombination {
        match (self.first_pressed(), self.second_pressed()) {
            (true, true) => ButtonCombination::Both,
            (true, false) => ButtonCombination::FirstOnly,
            (false, true) => ButtonCombination::SecondOnly,
            (false, false) => ButtonCombination::Neither,
        }
    }
}

/// The four possible button combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonCombination {
    Both,
    FirstOnly,
    SecondOnly,
    Neither,
}

/// Sampled state of the four slide switches.
///
/// Positive logic: a set bit means the switch is on. Only the one-hot values and
/// `NONE` select a dedicated pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchState(u8);

impl SwitchState {
    /// All switches off.
    pub const NONE: Self = SwitchState(0x00);

    /// Only switch 1 on.
    pub const SWITCH_1: Self = SwitchState(0x01);

    /// Only switch 2 on.
    pub const SWITCH_2: Self = SwitchState(0x02);

    /// Only switch 3 on.
    pub const SWITCH_3: Self = SwitchState(0x04);

    /// Only switch 4 on.
    pub const SWITCH_4: Self = SwitchState(0x08);

    /// Builds a state from a raw port read, ignoring non-switch bits.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        SwitchState(raw & SWITCHES_MASK)
    }

    /// Returns the masked port bits.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// Color of the tri-color LED.
///
/// Each bit drives one channel: bit 0 red, bit 1 green, bit 2 blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LedColor {
    Off = 0x00,
    Red = 0x01,
    Green = 0x02,
    Yellow = 0x03,
    Blue = 0x04,
    Pink = 0x05,
    SkyBlue = 0x06,
    White = 0x07,
}

impl LedColor {
    /// Every color, ordered by encoding.
    pub const ALL: [LedColor; 8] = [
        LedColor::Off,
        LedColor::Red,
        LedColor::Green,
        LedColor::Yellow,
        LedColor::Blue,
        LedColor::Pink,
        LedColor::SkyBlue,
        LedColor::White,
    ];

    /// Returns the 3-bit channel encoding.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes the low 3 bits of `bits`, ignoring the rest.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self::ALL[(bits & 0x07) as usize]
    }

    #[inline]
    pub const fn has_red(self) -> bool {
        self.bits() & 0x01 != 0
    }

    #[inline]
    pub const fn has_green(self) -> bool {
        self.bits() & 0x02 != 0
    }

    #[inline]
    pub const fn has_blue(self) -> bool {
        self.bits() & 0x04 != 0
    }
}

impl TryFrom<u8> for LedColor {
    type Error = ColorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 0x07 {
            return Err(ColorError::OutOfRange(value));
        }
        Ok(Self::from_bits_truncate(value))
    }
}

impl From<LedColor> for u8 {
    fn from(color: LedColor) -> Self {
        color.bits()
    }
}

/// Color conversion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Encoding uses bits beyond the three color channels.
    OutOfRange(u8),
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::OutOfRange(value) => {
                write!(f, "color encoding {:#04x} is outside 0x00..=0x07", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}

/// Named LED bar masks. Bit `i` lights LED `i`.
pub mod bar {
    /// Every LED off.
    pub const ALL_OFF: u8 = 0x00;

    /// Every LED on.
    pub const ALL_ON: u8 = 0xFF;

    /// LEDs 0 to 3.
    pub const LOW_HALF: u8 = 0x0F;

    /// LEDs 4 to 7.
    pub const HIGH_HALF: u8 = 0xF0;

    /// LEDs 0, 2, 4 and 6.
    pub const EVEN: u8 = 0x55;

    /// LEDs 1, 3, 5 and 7.
    pub const ODD: u8 = 0xAA;

    /// Only LED `index` on. Indices past 7 light nothing.
    #[inline]
    pub const fn single(index: u8) -> u8 {
        if index < 8 { 1 << index } else { ALL_OFF }
    }
}
