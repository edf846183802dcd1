//! The main loop: initialize once, then sample, dispatch and sleep forever.

use crate::dispatcher::{self, RunReport};
use crate::input::{Buttons, Switches};
use crate::output::{LedBar, Outputs, RgbLed, StatusLed};
use crate::port::GpioPort;
use crate::time::{Clock, Timing};
use crate::types::{ButtonState, SwitchState};

/// Unconfigured ports for every driver.
///
/// `status_led` and `buttons` may be two handles to the same physical port;
/// the drivers own disjoint pins.
pub struct LabPorts<L, R, K, B, S> {
    pub status_led: L,
    pub rgb_led: R,
    pub buttons: K,
    pub led_bar: B,
    pub switches: S,
}

/// Owns every driver, the clock and the cadences.
///
/// # Type Parameters
/// * `L` - Status LED port
/// * `R` - RGB LED port
/// * `K` - Button port
/// * `B` - LED bar port
/// * `S` - Switch port
/// * `C` - Clock implementation
pub struct Lab<L, R, K, B, S, C> {
    outputs: Outputs<L, R, B>,
    buttons: Buttons<K>,
    switches: Switches<S>,
    clock: C,
    timing: Timing,
}

impl<L, R, K, B, S, C> Lab<L, R, K, B, S, C>
where
    L: GpioPort,
    R: GpioPort,
    K: GpioPort,
    B: GpioPort,
    S: GpioPort,
    C: Clock,
{
    /// Configures the clock and then every port, in wiring order: status LED,
    /// RGB LED, buttons, LED bar, switches.
    pub fn new(ports: LabPorts<L, R, K, B, S>, mut clock: C, timing: Timing) -> Self {
        clock.configure();

        let status = StatusLed::new(ports.status_led);
        let rgb = RgbLed::new(ports.rgb_led);
        let buttons = Buttons::new(ports.buttons);
        let bar = LedBar::new(ports.led_bar);
        let switches = Switches::new(ports.switches);

        Self {
            outputs: Outputs { status, rgb, bar },
            buttons,
            switches,
            clock,
            timing,
        }
    }

    /// Runs one loop iteration: sample both inputs, run the selected pattern,
    /// then sleep for the poll interval.
    pub fn tick(&mut self) -> RunReport {
        let buttons = self.buttons.read();
        let switches = self.switches.read();

        let report = self.select_and_run(buttons, switches);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "buttons={=u8:#x} switches={=u8:#x} -> {}",
            buttons.raw(),
            switches.raw(),
            report
        );

        self.clock.delay_ms(self.timing.poll_interval_ms);
        report
    }

    /// Selects the pattern for the given inputs and runs it to its end.
    pub fn select_and_run(&mut self, buttons: ButtonState, switches: SwitchState) -> RunReport {
        let pattern = dispatcher::select(buttons, switches);
        dispatcher::run(
            pattern,
            &mut self.outputs,
            &self.switches,
            &mut self.clock,
            &self.timing,
        )
    }

    /// Runs the main loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Returns the output drivers.
    pub fn outputs(&self) -> &Outputs<L, R, B> {
        &self.outputs
    }

    /// Returns the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the active cadences.
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Samples the buttons without running anything.
    pub fn read_buttons(&self) -> ButtonState {
        self.buttons.read()
    }

    /// Samples the switches without running anything.
    pub fn read_switches(&self) -> SwitchState {
        self.switches.read()
    }
}
