#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`GpioPort`**: Trait to implement for one 8-bit hardware port
//! - **`PinGroup`**: Owned, masked view of the pins a driver uses on a port
//! - **`Buttons`** / **`Switches`**: Input readers returning `ButtonState` / `SwitchState`
//! - **`StatusLed`**, **`RgbLed`**, **`LedBar`**: Output drivers, grouped as `Outputs`
//! - **`Pattern`**: One of the five lab patterns, run step by step through `PatternRun`
//! - **`Clock`**: Trait to implement for clock setup and busy-wait delays
//! - **`Lab`**: Owns every driver and runs the sample/dispatch/sleep loop
//!
//! Patterns never sleep on their own. Each step reports how long its outputs
//! should be held and whether the switches must be re-sampled afterwards, so the
//! whole engine runs on the host against mock ports and a mock clock.

pub mod board;
pub mod colors;
pub mod dispatcher;
pub mod input;
pub mod lab;
pub mod output;
pub mod pattern;
pub mod port;
pub mod time;
pub mod types;

pub use dispatcher::{RunExit, RunReport};
pub use input::{Buttons, Switches};
pub use lab::{Lab, LabPorts};
pub use output::{LedBar, Outputs, RgbLed, StatusLed};
pub use pattern::{Pattern, PatternRun, StepOutcome};
pub use port::{Drive, GpioPort, PinGroup, Pull, Register};
pub use time::{Clock, Timing};
pub use types::{ButtonCombination, ButtonState, ColorError, LedColor, SwitchState, bar};

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;
