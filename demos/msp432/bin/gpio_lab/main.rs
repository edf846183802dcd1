#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};

use gpio_lab::RunExit;

mod hardware_setup;

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== GPIO Lab ===");
    rprintln!("Starting initialization...");

    let mut lab = hardware_setup::init_hardware();

    rprintln!("=== System Ready ===");
    rprintln!("Slide switches select the pattern:");
    rprintln!("  none: LEDs follow the buttons");
    rprintln!("  SW1:  count up on the LED bar");
    rprintln!("  SW2:  count down on the LED bar");
    rprintln!("  SW3:  blink everything");
    rprintln!("  SW4:  walk one LED across the bar");

    let mut last_pattern = None;
    loop {
        let report = lab.tick();

        // Pattern 1 repeats every 100ms; only log when the selection changes
        if last_pattern != Some(report.pattern) {
            rprintln!("Pattern: {:?}", report.pattern);
            last_pattern = Some(report.pattern);
        }
        if let RunExit::SwitchChanged(switches) = report.exit {
            rprintln!(
                "{:?} aborted after {} holds, switches {:#04x}",
                report.pattern,
                report.holds,
                switches.raw()
            );
        }
    }
}
