//! Register-level port abstraction and masked pin groups.
//!
//! A [`GpioPort`] exposes the byte-wide registers of one hardware port. Drivers
//! never use it directly: each owns a [`PinGroup`], which confines every read
//! and write to the pins in its mask. Two groups on the same physical port
//! (status LED and buttons share P1) therefore cannot clobber each other.

/// Byte-wide registers of a GPIO port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Pin levels (read-only on hardware).
    Input,
    /// Output latch. Also selects pull direction for inputs with pulls enabled.
    Output,
    /// 1 = output, 0 = input.
    Direction,
    /// Internal pull resistor enable.
    PullEnable,
    /// 1 = high drive strength.
    DriveStrength,
    /// Function select, low bit.
    Select0,
    /// Function select, high bit.
    Select1,
}

impl Register {
    /// Dense index, handy for register files backed by an array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Trait for abstracting one 8-bit GPIO port.
///
/// Implement this for your hardware (memory-mapped registers, an I/O expander,
/// a simulation). Accesses cannot fail.
pub trait GpioPort {
    /// Reads a register.
    fn read(&self, register: Register) -> u8;

    /// Writes a register.
    fn write(&mut self, register: Register, value: u8);

    /// Read-modify-write of a register.
    fn modify<F>(&mut self, register: Register, f: F)
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read(register);
        self.write(register, f(value));
    }
}

/// Pull resistor configuration for inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No internal resistor; the board provides one.
    None,
    Up,
}

/// Output drive strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Drive {
    /// Leaves the drive strength register as it is (regular after reset).
    Regular,
    High,
}

/// A set of pins on one port, owned by a single driver.
#[derive(Debug)]
pub struct PinGroup<P> {
    port: P,
    mask: u8,
}

impl<P: GpioPort> PinGroup<P> {
    /// Wraps `port`, restricting access to the pins in `mask`.
    ///
    /// Does not touch the hardware; call one of the `configure_*` methods.
    pub fn new(port: P, mask: u8) -> Self {
        Self { port, mask }
    }

    /// Returns the pins owned by this group.
    #[inline]
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Configures the pins as GPIO outputs, driven low.
    pub fn configure_output(&mut self, drive: Drive) {
        let mask = self.mask;
        self.select_gpio();
        if drive == Drive::High {
            self.port.modify(Register::DriveStrength, |ds| ds | mask);
        }
        self.port.modify(Register::Direction, |dir| dir | mask);
        self.port.modify(Register::Output, |out| out & !mask);
    }

    /// Configures the pins as GPIO inputs.
    pub fn configure_input(&mut self, pull: Pull) {
        let mask = self.mask;
        self.select_gpio();
        self.port.modify(Register::Direction, |dir| dir & !mask);
        match pull {
            Pull::None => self.port.modify(Register::PullEnable, |ren| ren & !mask),
            Pull::Up => {
                self.port.modify(Register::PullEnable, |ren| ren | mask);
                self.port.modify(Register::Output, |out| out | mask);
            }
        }
    }

    /// Reads the owned pin levels. Other bits read as 0.
    #[inline]
    pub fn read_input(&self) -> u8 {
        self.port.read(Register::Input) & self.mask
    }

    /// Reads the owned bits of the output latch. Other bits read as 0.
    #[inline]
    pub fn read_output(&self) -> u8 {
        self.port.read(Register::Output) & self.mask
    }

    /// Writes the owned bits of the output latch, leaving the rest untouched.
    pub fn write_output(&mut self, value: u8) {
        let mask = self.mask;
        if mask == u8::MAX {
            self.port.write(Register::Output, value);
        } else {
            self.port
                .modify(Register::Output, |out| (out & !mask) | (value & mask));
        }
    }

    /// Flips the owned bits set in `bits`.
    pub fn toggle_output(&mut self, bits: u8) {
        let flip = bits & self.mask;
        self.port.modify(Register::Output, |out| out ^ flip);
    }

    fn select_gpio(&mut self) {
        let mask = self.mask;
        self.port.modify(Register::Select0, |sel| sel & !mask);
        self.port.modify(Register::Select1, |sel| sel & !mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Register file with every bit of Select0/Select1/Input preset high
    struct FakePort {
        registers: [u8; 7],
    }

    impl FakePort {
        fn new() -> Self {
            let mut registers = [0; 7];
            registers[Register::Select0.index()] = 0xFF;
            registers[Register::Select1.index()] = 0xFF;
            registers[Register::Input.index()] = 0xFF;
            Self { registers }
        }

        fn get(&self, register: Register) -> u8 {
            self.registers[register.index()]
        }
    }

    impl GpioPort for &mut FakePort {
        fn read(&self, register: Register) -> u8 {
            self.registers[register.index()]
        }

        fn write(&mut self, register: Register, value: u8) {
            self.registers[register.index()] = value;
        }
    }

    #[test]
    fn output_configuration_touches_only_owned_bits() {
        let mut port = FakePort::new();
        port.registers[Register::Output.index()] = 0xF0;

        let mut group = PinGroup::new(&mut port, 0x07);
        group.configure_output(Drive::High);
        drop(group);

        assert_eq!(port.get(Register::Select0), 0xF8);
        assert_eq!(port.get(Register::Select1), 0xF8);
        assert_eq!(port.get(Register::DriveStrength), 0x07);
        assert_eq!(port.get(Register::Direction), 0x07);
        assert_eq!(port.get(Register::Output), 0xF0);
    }

    #[test]
    fn regular_drive_leaves_drive_strength_alone() {
        let mut port = FakePort::new();
        port.registers[Register::DriveStrength.index()] = 0x81;

        let mut group = PinGroup::new(&mut port, 0x01);
        group.configure_output(Drive::Regular);
        drop(group);

        assert_eq!(port.get(Register::DriveStrength), 0x81);
        assert_eq!(port.get(Register::Direction), 0x01);
    }

    #[test]
    fn pull_up_input_sets_output_latch() {
        let mut port = FakePort::new();
        port.registers[Register::Direction.index()] = 0xFF;

        let mut group = PinGroup::new(&mut port, 0x12);
        group.configure_input(Pull::Up);
        drop(group);

        assert_eq!(port.get(Register::Direction), 0xED);
        assert_eq!(port.get(Register::PullEnable), 0x12);
        assert_eq!(port.get(Register::Output), 0x12);
    }

    #[test]
    fn masked_write_and_toggle_preserve_other_bits() {
        let mut port = FakePort::new();
        port.registers[Register::Output.index()] = 0xA8;

        let mut group = PinGroup::new(&mut port, 0x07);
        group.write_output(0xFF);
        assert_eq!(group.read_output(), 0x07);
        group.toggle_output(0x05);
        assert_eq!(group.read_output(), 0x02);
        assert_eq!(group.read_input(), 0x07);
        drop(group);

        assert_eq!(port.get(Register::Output), 0xAA);
    }
}
