//! Pattern selection and the blocking pattern driver.

use crate::input::Switches;
use crate::output::Outputs;
use crate::pattern::{Pattern, StepOutcome};
use crate::port::GpioPort;
use crate::time::{Clock, Timing};
use crate::types::{ButtonState, SwitchState};

/// Why a pattern run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunExit {
    /// The pattern ran to its last step.
    Completed,

    /// The switches moved away from the pattern's activation value.
    SwitchChanged(SwitchState),
}

/// Summary of one pattern run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunReport {
    pub pattern: Pattern,

    /// Timed holds the run went through.
    pub holds: u16,

    pub exit: RunExit,
}

/// Picks the pattern for the current inputs.
///
/// Only the exact values `NONE` and `SWITCH_1..SWITCH_4` select a pattern of
/// their own. Any other combination, such as two switches on at once, falls
/// back to [`Pattern::Buttons`].
pub const fn select(buttons: ButtonState, switches: SwitchState) -> Pattern {
    match switches {
        SwitchState::NONE => Pattern::Buttons(buttons),
        SwitchState::SWITCH_1 => Pattern::CountUp,
        SwitchState::SWITCH_2 => Pattern::CountDown,
        SwitchState::SWITCH_3 => Pattern::Blink,
        SwitchState::SWITCH_4 => Pattern::Walk,
        _ => Pattern::Buttons(buttons),
    }
}

/// Runs `pattern` from its first step until it completes or its switch moves.
///
/// Blocks for the whole run: every hold is a busy-wait on `clock`. `Blink`
/// only returns once the switches change.
pub fn run<L, R, B, S, C>(
    pattern: Pattern,
    outputs: &mut Outputs<L, R, B>,
    switches: &Switches<S>,
    clock: &mut C,
    timing: &Timing,
) -> RunReport
where
    L: GpioPort,
    R: GpioPort,
    B: GpioPort,
    S: GpioPort,
    C: Clock,
{
    let mut run = pattern.start();
    let mut holds: u16 = 0;

    loop {
        match run.step(outputs, timing) {
            StepOutcome::Hold(ms) => {
                holds = holds.saturating_add(1);
                clock.delay_ms(ms);
            }
            StepOutcome::HoldThenCheck(ms) => {
                holds = holds.saturating_add(1);
                clock.delay_ms(ms);

                let current = switches.read();
                if let Some(expected) = pattern.activation() {
                    if current != expected {
                        return RunReport {
                            pattern,
                            holds,
                            exit: RunExit::SwitchChanged(current),
                        };
                    }
                }
            }
            StepOutcome::Done => {
                return RunReport {
                    pattern,
                    holds,
                    exit: RunExit::Completed,
                };
            }
        }
    }
}
