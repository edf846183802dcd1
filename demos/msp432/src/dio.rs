use gpio_lab::{GpioPort, Register};
use msp432p401r as pac;

/// 16-bit DIO bank holding two 8-bit ports
///
/// Odd-numbered ports sit in the low byte of their bank, even ones in the
/// high byte, so P1 and P2 share bank A, P9 and P10 bank E.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    A,
    B,
    C,
    D,
    E,
}

/// 8-bit DIO ports of the MSP432P401R
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortId {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
    P9,
    P10,
}

impl PortId {
    fn bank(self) -> Bank {
        match self {
            PortId::P1 | PortId::P2 => Bank::A,
            PortId::P3 | PortId::P4 => Bank::B,
            PortId::P5 | PortId::P6 => Bank::C,
            PortId::P7 | PortId::P8 => Bank::D,
            PortId::P9 | PortId::P10 => Bank::E,
        }
    }

    /// Bit position of the port's byte inside its bank register
    fn shift(self) -> u16 {
        (self as u16 % 2) * 8
    }
}

/// Evaluates `$body` with `$reg` bound to the bank's register for `$register`.
///
/// `IN` is read-only, so it has no arm here; `$input` is evaluated instead.
macro_rules! bank_register {
    ($dio:expr, $bank:expr, $register:expr, $input:expr, |$reg:ident| $body:expr) => {
        bank_register!(@banks $dio, $bank, $register, $input, $reg, $body;
            A: paout padir paren pads pasel0 pasel1,
            B: pbout pbdir pbren pbds pbsel0 pbsel1,
            C: pcout pcdir pcren pcds pcsel0 pcsel1,
            D: pdout pddir pdren pdds pdsel0 pdsel1,
            E: peout pedir peren peds pesel0 pesel1
        )
    };
    (@banks $dio:expr, $bank:expr, $register:expr, $input:expr, $reg:ident, $body:expr;
        $($b:ident: $out:ident $dir:ident $ren:ident $ds:ident $sel0:ident $sel1:ident),*) => {
        match ($bank, $register) {
            (_, Register::Input) => $input,
            $(
                (Bank::$b, Register::Output) => { let $reg = &$dio.$out; $body }
                (Bank::$b, Register::Direction) => { let $reg = &$dio.$dir; $body }
                (Bank::$b, Register::PullEnable) => { let $reg = &$dio.$ren; $body }
                (Bank::$b, Register::DriveStrength) => { let $reg = &$dio.$ds; $body }
                (Bank::$b, Register::Select0) => { let $reg = &$dio.$sel0; $body }
                (Bank::$b, Register::Select1) => { let $reg = &$dio.$sel1; $body }
            )*
        }
    };
}

/// Handle to one 8-bit port inside the shared DIO register block
///
/// Writes are read-modify-writes of the 16-bit bank register that only change
/// this port's byte, so the neighbouring port in the bank is left alone.
pub struct Port<'a> {
    dio: &'a pac::DIO,
    id: PortId,
}

impl<'a> Port<'a> {
    pub fn new(dio: &'a pac::DIO, id: PortId) -> Self {
        Self { dio, id }
    }

    fn read_input_bank(&self) -> u16 {
        match self.id.bank() {
            Bank::A => self.dio.pain.read().bits(),
            Bank::B => self.dio.pbin.read().bits(),
            Bank::C => self.dio.pcin.read().bits(),
            Bank::D => self.dio.pdin.read().bits(),
            Bank::E => self.dio.pein.read().bits(),
        }
    }
}

impl GpioPort for Port<'_> {
    fn read(&self, register: Register) -> u8 {
        let word = bank_register!(
            self.dio,
            self.id.bank(),
            register,
            self.read_input_bank(),
            |reg| reg.read().bits()
        );
        (word >> self.id.shift()) as u8
    }

    fn write(&mut self, register: Register, value: u8) {
        let shift = self.id.shift();
        let byte_mask = 0x00FF_u16 << shift;
        let byte = u16::from(value) << shift;
        bank_register!(self.dio, self.id.bank(), register, (), |reg| {
            reg.modify(|r, w| unsafe { w.bits((r.bits() & !byte_mask) | byte) })
        });
    }
}

/// Port handles for the lab wiring
///
/// P1 is handed out twice: once for the status LED (P1.0), once for the
/// buttons (P1.1, P1.4).
pub struct LabPorts<'a> {
    pub status_led: Port<'a>,
    pub rgb_led: Port<'a>,
    pub buttons: Port<'a>,
    pub led_bar: Port<'a>,
    pub switches: Port<'a>,
}

impl<'a> LabPorts<'a> {
    pub fn new(dio: &'a pac::DIO) -> Self {
        Self {
            status_led: Port::new(dio, PortId::P1),
            rgb_led: Port::new(dio, PortId::P2),
            buttons: Port::new(dio, PortId::P1),
            led_bar: Port::new(dio, PortId::P9),
            switches: Port::new(dio, PortId::P10),
        }
    }
}

impl<'a> From<LabPorts<'a>>
    for gpio_lab::LabPorts<Port<'a>, Port<'a>, Port<'a>, Port<'a>, Port<'a>>
{
    fn from(ports: LabPorts<'a>) -> Self {
        gpio_lab::LabPorts {
            status_led: ports.status_led,
            rgb_led: ports.rgb_led,
            buttons: ports.buttons,
            led_bar: ports.led_bar,
            switches: ports.switches,
        }
    }
}
