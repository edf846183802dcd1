//! Clock abstraction and pattern cadences.

/// Trait for abstracting the core clock and its busy-wait delay.
pub trait Clock {
    /// Configures the core clock. Called once, before any port is touched.
    fn configure(&mut self);

    /// Spins for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Cadences used by the main loop and the patterns, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Sleep between two main loop iterations.
    pub poll_interval_ms: u32,

    /// Hold time of one counter value (up and down counters).
    pub count_step_ms: u32,

    /// Hold time of one position of the walking LED.
    pub walk_step_ms: u32,

    /// Half period of the blink patterns.
    pub blink_half_period_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            count_step_ms: 100,
            walk_step_ms: 500,
            blink_half_period_ms: 1000,
        }
    }
}
