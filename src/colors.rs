//! Conversions between lab colors and `palette` colors.
//!
//! The RGB LED has no brightness control, so every channel is either fully on
//! or off. Converting from `Srgb` thresholds each channel at half intensity.

use crate::types::LedColor;
use palette::{FromColor, Hsv, Srgb};

const CHANNEL_THRESHOLD: f32 = 0.5;

impl LedColor {
    /// Returns the color as an `Srgb` with each channel at 0.0 or 1.0.
    pub fn to_srgb(self) -> Srgb {
        let channel = |on: bool| if on { 1.0 } else { 0.0 };
        Srgb::new(
            channel(self.has_red()),
            channel(self.has_green()),
            channel(self.has_blue()),
        )
    }

    /// Returns the closest displayable color.
    pub fn from_srgb(color: Srgb) -> Self {
        let mut bits = 0;
        if color.red >= CHANNEL_THRESHOLD {
            bits |= LedColor::Red.bits();
        }
        if color.green >= CHANNEL_THRESHOLD {
            bits |= LedColor::Green.bits();
        }
        if color.blue >= CHANNEL_THRESHOLD {
            bits |= LedColor::Blue.bits();
        }
        LedColor::from_bits_truncate(bits)
    }
}

impl From<LedColor> for Srgb {
    fn from(color: LedColor) -> Self {
        color.to_srgb()
    }
}

/// Returns the displayable color closest to a fully saturated hue.
#[inline]
pub fn hue(hue: f32) -> LedColor {
    LedColor::from_srgb(Srgb::from_color(Hsv::new(hue, 1.0, 1.0)))
}
