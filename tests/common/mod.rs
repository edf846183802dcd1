//! Shared test infrastructure for gpio-lab integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use core::sync::atomic::{AtomicU64, Ordering};
use gpio_lab::{Clock, GpioPort, LabPorts, Outputs, Register, Switches};
use gpio_lab::{LedBar, RgbLed, StatusLed};

// ============================================================================
// Write Stamps
// ============================================================================

/// Monotonic counter shared by every simulated port and clock
///
/// Tests run on several threads, so stamps from one test are not contiguous,
/// but within a test they still order events the way they happened.
static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

fn next_stamp() -> u64 {
    NEXT_STAMP.fetch_add(1, Ordering::Relaxed)
}

/// One register write as seen by a simulated port
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegisterWrite {
    pub stamp: u64,
    pub register: Register,
    pub old: u8,
    pub new: u8,
}

// ============================================================================
// Simulated Port
// ============================================================================

/// Register file of one simulated port
///
/// Shared through `&SimPort`, so two drivers can own disjoint pins of the same
/// port just like on hardware. Every write to the output latch is recorded,
/// and the first writes to any register are kept in a stamped journal.
pub struct SimPort {
    registers: Cell<[u8; 7]>,
    output_log: RefCell<heapless::Vec<u8, 1024>>,
    journal: RefCell<heapless::Vec<RegisterWrite, 64>>,
}

impl SimPort {
    pub fn new() -> Self {
        Self {
            registers: Cell::new([0; 7]),
            output_log: RefCell::new(heapless::Vec::new()),
            journal: RefCell::new(heapless::Vec::new()),
        }
    }

    /// Stamp of the first register write of any kind
    pub fn first_write(&self) -> Option<u64> {
        self.journal.borrow().first().map(|write| write.stamp)
    }

    /// Stamp of the first write to `register` that changed a bit in `mask`
    pub fn first_change(&self, register: Register, mask: u8) -> Option<u64> {
        self.journal
            .borrow()
            .iter()
            .find(|write| write.register == register && (write.old ^ write.new) & mask != 0)
            .map(|write| write.stamp)
    }

    /// Drive the pin levels seen through the input register
    pub fn set_input(&self, value: u8) {
        let mut registers = self.registers.get();
        registers[Register::Input.index()] = value;
        self.registers.set(registers);
    }

    pub fn register(&self, register: Register) -> u8 {
        self.registers.get()[register.index()]
    }

    /// Every value written to the output latch, oldest first
    pub fn output_log(&self) -> heapless::Vec<u8, 1024> {
        self.output_log.borrow().clone()
    }

    /// Forget recorded writes (typically the ones made during configuration)
    pub fn clear_log(&self) {
        self.output_log.borrow_mut().clear();
    }
}

impl GpioPort for &SimPort {
    fn read(&self, register: Register) -> u8 {
        self.registers.get()[register.index()]
    }

    fn write(&mut self, register: Register, value: u8) {
        let mut registers = self.registers.get();
        let old = registers[register.index()];
        registers[register.index()] = value;
        self.registers.set(registers);

        // Full once the port is configured and running; later writes are not needed
        let _ = self.journal.borrow_mut().push(RegisterWrite {
            stamp: next_stamp(),
            register,
            old,
            new: value,
        });

        if register == Register::Output {
            let _ = self.output_log.borrow_mut().push(value);
        }
    }
}

// ============================================================================
// Simulated Board
// ============================================================================

/// The four LaunchPad ports used by the lab
pub struct SimBoard {
    pub p1: SimPort,
    pub p2: SimPort,
    pub p9: SimPort,
    pub p10: SimPort,
}

pub type SimOutputs<'a> = Outputs<&'a SimPort, &'a SimPort, &'a SimPort>;

impl SimBoard {
    /// Ports with both buttons released and every switch off
    pub fn new() -> Self {
        let board = Self {
            p1: SimPort::new(),
            p2: SimPort::new(),
            p9: SimPort::new(),
            p10: SimPort::new(),
        };
        board.p1.set_input(0x12);
        board
    }

    pub fn lab_ports(&self) -> LabPorts<&SimPort, &SimPort, &SimPort, &SimPort, &SimPort> {
        LabPorts {
            status_led: &self.p1,
            rgb_led: &self.p2,
            buttons: &self.p1,
            led_bar: &self.p9,
            switches: &self.p10,
        }
    }

    /// Configured output drivers, with configuration writes dropped from the logs
    pub fn outputs(&self) -> SimOutputs<'_> {
        let outputs = Outputs {
            status: StatusLed::new(&self.p1),
            rgb: RgbLed::new(&self.p2),
            bar: LedBar::new(&self.p9),
        };
        self.clear_logs();
        outputs
    }

    pub fn switches(&self) -> Switches<&SimPort> {
        Switches::new(&self.p10)
    }

    pub fn clear_logs(&self) {
        self.p1.clear_log();
        self.p2.clear_log();
        self.p9.clear_log();
        self.p10.clear_log();
    }

    pub fn set_buttons(&self, raw: u8) {
        self.p1.set_input(raw);
    }

    pub fn set_switches(&self, raw: u8) {
        self.p10.set_input(raw);
    }

    pub fn status_led_on(&self) -> bool {
        self.p1.register(Register::Output) & 0x01 != 0
    }

    pub fn rgb_bits(&self) -> u8 {
        self.p2.register(Register::Output) & 0x07
    }

    pub fn bar(&self) -> u8 {
        self.p9.register(Register::Output)
    }
}

// ============================================================================
// Simulated Clock
// ============================================================================

/// Clock that returns immediately from delays while tracking simulated time
///
/// Input changes can be scheduled at a given time; they are applied once
/// simulated time reaches that point.
pub struct SimClock<'a> {
    configured_at: Option<u64>,
    elapsed_ms: u64,
    delays: heapless::Vec<u32, 1024>,
    events: heapless::Vec<(u64, &'a SimPort, u8), 8>,
}

impl<'a> SimClock<'a> {
    pub fn new() -> Self {
        Self {
            configured_at: None,
            elapsed_ms: 0,
            delays: heapless::Vec::new(),
            events: heapless::Vec::new(),
        }
    }

    /// Set `port`'s input to `value` once `at_ms` of simulated time has passed
    pub fn schedule(mut self, at_ms: u64, port: &'a SimPort, value: u8) -> Self {
        self.events
            .push((at_ms, port, value))
            .unwrap_or_else(|_| panic!("too many scheduled events"));
        self
    }

    pub fn configured(&self) -> bool {
        self.configured_at.is_some()
    }

    /// Write stamp taken when `configure` ran
    pub fn configured_at(&self) -> Option<u64> {
        self.configured_at
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Every delay requested, oldest first
    pub fn delays(&self) -> &[u32] {
        &self.delays
    }
}

impl Clock for SimClock<'_> {
    fn configure(&mut self) {
        self.configured_at = Some(next_stamp());
    }

    fn delay_ms(&mut self, ms: u32) {
        let _ = self.delays.push(ms);
        self.elapsed_ms += u64::from(ms);

        let now = self.elapsed_ms;
        self.events.retain(|(at_ms, port, value)| {
            if *at_ms <= now {
                port.set_input(*value);
                false
            } else {
                true
            }
        });
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Bar values `start, start+1, ...` up to and including `end`
pub fn ascending(start: u8, end: u8) -> heapless::Vec<u8, 1024> {
    (start..=end).collect()
}

/// Bar values `start, start-1, ...` down to and including `end`
pub fn descending(start: u8, end: u8) -> heapless::Vec<u8, 1024> {
    (end..=start).rev().collect()
}
