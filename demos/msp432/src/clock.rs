use gpio_lab::Clock;
use msp432p401r as pac;

/// Password field of the watchdog control register
const WDT_PASSWORD: u8 = 0x5A;

/// Key unlocking the power control and clock system registers
const PCM_KEY: u16 = 0x695A;
const CS_KEY: u16 = 0x695A;

/// Active mode request: LDO, core voltage level 1
const PCM_AM_LDO_VCORE1: u8 = 0x01;

/// DCO range select for a 48 MHz center frequency
const DCORSEL_48MHZ: u8 = 5;

/// Clock source selects
const SEL_DCO: u8 = 3;
const SEL_REFO: u8 = 2;

/// DCO frequency out of reset
pub const RESET_CLOCK_HZ: u32 = 3_000_000;

/// MCLK after [`LaunchpadClock::configure`]
pub const CORE_CLOCK_HZ: u32 = 48_000_000;

/// Core clock setup and cycle-counted busy-wait delays
///
/// Owns the peripherals it reconfigures: watchdog, power control, flash
/// control and clock system.
pub struct LaunchpadClock {
    wdt: pac::WDT_A,
    pcm: pac::PCM,
    flctl: pac::FLCTL,
    cs: pac::CS,
    cycles_per_ms: u32,
}

impl LaunchpadClock {
    pub fn new(wdt: pac::WDT_A, pcm: pac::PCM, flctl: pac::FLCTL, cs: pac::CS) -> Self {
        Self {
            wdt,
            pcm,
            flctl,
            cs,
            cycles_per_ms: RESET_CLOCK_HZ / 1_000,
        }
    }

    pub fn core_clock_hz(&self) -> u32 {
        self.cycles_per_ms * 1_000
    }
}

impl Clock for LaunchpadClock {
    /// Stops the watchdog and runs MCLK and SMCLK from the DCO at 48 MHz.
    fn configure(&mut self) {
        self.wdt
            .wdtctl
            .write(|w| unsafe { w.wdtpw().bits(WDT_PASSWORD).wdthold().set_bit() });

        // 48 MHz needs core voltage level 1
        self.pcm
            .pcmctl0
            .write(|w| unsafe { w.pcmkey().bits(PCM_KEY).amr().bits(PCM_AM_LDO_VCORE1) });
        while self.pcm.pcmctl1.read().pmr_busy().bit_is_set() {}

        // and one flash wait state per bank
        self.flctl
            .flctl_bank0_rdctl
            .modify(|_, w| unsafe { w.wait().bits(1) });
        self.flctl
            .flctl_bank1_rdctl
            .modify(|_, w| unsafe { w.wait().bits(1) });

        self.cs.cskey.write(|w| unsafe { w.cskey().bits(CS_KEY) });
        self.cs
            .csctl0
            .write(|w| unsafe { w.dcorsel().bits(DCORSEL_48MHZ) });
        self.cs.csctl1.write(|w| unsafe {
            w.selm().bits(SEL_DCO).sels().bits(SEL_DCO).sela().bits(SEL_REFO)
        });
        self.cs.cskey.write(|w| unsafe { w.cskey().bits(0) });

        self.cycles_per_ms = CORE_CLOCK_HZ / 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            cortex_m::asm::delay(self.cycles_per_ms);
        }
    }
}
