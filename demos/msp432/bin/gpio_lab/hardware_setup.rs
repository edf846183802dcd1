use cortex_m::singleton;
use msp432p401r as pac;
use rtt_target::rprintln;

use gpio_lab::{Lab, Timing};
use msp432_demos::clock::LaunchpadClock;
use msp432_demos::dio::{LabPorts, Port};

/// Type alias for the lab running on LaunchPad ports
pub type LaunchpadLab = Lab<
    Port<'static>,
    Port<'static>,
    Port<'static>,
    Port<'static>,
    Port<'static>,
    LaunchpadClock,
>;

/// Initialize the clock and every lab peripheral
///
/// Order matters only for the clock, which must run at 48 MHz before the
/// delays are calibrated. The ports are then configured as:
/// - P1.0 status LED output
/// - P2.0-P2.2 RGB LED outputs, high drive
/// - P1.1, P1.4 button inputs with pull-ups
/// - P9 LED bar outputs, high drive
/// - P10.0-P10.3 switch inputs
///
/// # Returns
/// A `LaunchpadLab` ready to run
pub fn init_hardware() -> LaunchpadLab {
    let dp = pac::Peripherals::take().unwrap();

    // Every port handle borrows the one DIO block for the rest of the program
    let dio: &'static pac::DIO = singleton!(: pac::DIO = dp.DIO).unwrap();

    let clock = LaunchpadClock::new(dp.WDT_A, dp.PCM, dp.FLCTL, dp.CS);
    let lab: LaunchpadLab = Lab::new(LabPorts::new(dio).into(), clock, Timing::default());

    rprintln!("System clock configured: {} Hz", lab.clock().core_clock_hz());
    rprintln!("Status LED on P1.0, RGB LED on P2.0-P2.2");
    rprintln!("Buttons on P1.1 and P1.4, LED bar on P9, switches on P10.0-P10.3");

    lab
}
