//! The five lab patterns as step functions.
//!
//! A [`PatternRun`] performs one step per call: it writes the outputs and
//! returns a [`StepOutcome`] telling the caller how long to hold them and
//! whether the switches must be re-sampled before the next step. Delays and
//! input polling stay with the caller (see [`crate::dispatcher::run`]), which
//! keeps the patterns free of timing and testable without hardware.

use crate::output::Outputs;
use crate::port::GpioPort;
use crate::time::Timing;
use crate::types::{ButtonCombination, ButtonState, LedColor, SwitchState, bar};

/// Number of LEDs on the bar, and steps of the walking LED.
const BAR_LEDS: u16 = 8;

/// Number of values shown by the binary counters.
const COUNTER_VALUES: u16 = 256;

/// A pattern and the input it was selected with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    /// All switches off: outputs mirror the buttons.
    ///
    /// | Buttons     | Status LED    | RGB LED          | LED bar       |
    /// |-------------|---------------|------------------|---------------|
    /// | both        | on 1s, off 1s | green 1s, off 1s | off           |
    /// | button 1    | on            | off              | LEDs 0,2,4,6  |
    /// | button 2    | off           | pink             | LEDs 1,3,5,7  |
    /// | none        | off           | off              | all on        |
    Buttons(ButtonState),

    /// Switch 1: status on, RGB red, bar counts 0 to 255.
    CountUp,

    /// Switch 2: status off, RGB blue, bar counts 255 down to 0.
    CountDown,

    /// Switch 3: everything blinks together, blue on the RGB LED. Never completes.
    Blink,

    /// Switch 4: status and RGB off, one LED walks from bit 0 to bit 7.
    Walk,
}

impl Pattern {
    /// Returns the switch state that keeps this pattern running, if it checks one.
    pub const fn activation(&self) -> Option<SwitchState> {
        match self {
            Pattern::Buttons(_) => None,
            Pattern::CountUp => Some(SwitchState::SWITCH_1),
            Pattern::CountDown => Some(SwitchState::SWITCH_2),
            Pattern::Blink => Some(SwitchState::SWITCH_3),
            Pattern::Walk => Some(SwitchState::SWITCH_4),
        }
    }

    /// Starts a fresh run at the first step.
    pub const fn start(self) -> PatternRun {
        PatternRun {
            pattern: self,
            position: 0,
        }
    }
}

/// What the caller must do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// Hold the outputs for this many milliseconds, then step again.
    Hold(u32),

    /// Hold for this many milliseconds, re-sample the switches and stop unless
    /// they still equal [`Pattern::activation`].
    HoldThenCheck(u32),

    /// The pattern is over. The outputs keep their last values.
    Done,
}

/// Execution state of one pattern invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRun {
    pattern: Pattern,
    position: u16,
}

impl PatternRun {
    /// Number of steps taken so far.
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Performs the next step.
    pub fn step<L, R, B>(&mut self, outputs: &mut Outputs<L, R, B>, timing: &Timing) -> StepOutcome
    where
        L: GpioPort,
        R: GpioPort,
        B: GpioPort,
    {
        let position = self.position;
        self.position = self.position.wrapping_add(1);

        match self.pattern {
            Pattern::Buttons(buttons) => buttons_step(buttons, position, outputs, timing),
            Pattern::CountUp => {
                if position >= COUNTER_VALUES {
                    return StepOutcome::Done;
                }
                if position == 0 {
                    outputs.show_leds(true, LedColor::Red);
                }
                outputs.bar.set(position as u8);
                StepOutcome::HoldThenCheck(timing.count_step_ms)
            }
            Pattern::CountDown => {
                if position >= COUNTER_VALUES {
                    return StepOutcome::Done;
                }
                if position == 0 {
                    outputs.show_leds(false, LedColor::Blue);
                }
                outputs.bar.set(u8::MAX - position as u8);
                StepOutcome::HoldThenCheck(timing.count_step_ms)
            }
            Pattern::Blink => {
                if position % 2 == 0 {
                    outputs.bar.set(bar::ALL_ON);
                    outputs.show_leds(true, LedColor::Blue);
                    StepOutcome::Hold(timing.blink_half_period_ms)
                } else {
                    outputs.bar.set(bar::ALL_OFF);
                    outputs.show_leds(false, LedColor::Off);
                    StepOutcome::HoldThenCheck(timing.blink_half_period_ms)
                }
            }
            Pattern::Walk => {
                if position >= BAR_LEDS {
                    return StepOutcome::Done;
                }
                if position == 0 {
                    outputs.show_leds(false, LedColor::Off);
                }
                outputs.bar.set(bar::single(position as u8));
                StepOutcome::HoldThenCheck(timing.walk_step_ms)
            }
        }
    }
}

fn buttons_step<L, R, B>(
    buttons: ButtonState,
    position: u16,
    outputs: &mut Outputs<L, R, B>,
    timing: &Timing,
) -> StepOutcome
where
    L: GpioPort,
    R: GpioPort,
    B: GpioPort,
{
    match (buttons.combination(), position) {
        (ButtonCombination::Both, 0) => {
            outputs.bar.set(bar::ALL_OFF);
            outputs.show_leds(true, LedColor::Green);
            StepOutcome::Hold(timing.blink_half_period_ms)
        }
        (ButtonCombination::Both, 1) => {
            outputs.show_leds(false, LedColor::Off);
            StepOutcome::Hold(timing.blink_half_period_ms)
        }
        (ButtonCombination::FirstOnly, 0) => {
            outputs.show_leds(true, LedColor::Off);
            outputs.bar.set(bar::EVEN);
            StepOutcome::Done
        }
        (ButtonCombination::SecondOnly, 0) => {
            outputs.show_leds(false, LedColor::Pink);
            outputs.bar.set(bar::ODD);
            StepOutcome::Done
        }
        (ButtonCombination::Neither, 0) => {
            outputs.show_leds(false, LedColor::Off);
            outputs.bar.set(bar::ALL_ON);
            StepOutcome::Done
        }
        _ => StepOutcome::Done,
    }
}
