//! Manually driven clock
//!
//! A [`Clock`] implementation advanced explicitly by the harness, so
//! timed steps can be tested cycle-by-cycle with exact timing.

use core::cell::Cell;

use cadence_core::traits::Clock;

/// A clock that only moves when told to.
///
/// Interior mutability lets one clock be shared by reference across
/// every timed step in a routine while the harness keeps a handle to
/// advance it.
pub struct ManualClock {
    now_us: Cell<u64>,
}

impl ManualClock {
    /// Create a clock reading zero.
    pub fn new() -> Self {
        Self { now_us: Cell::new(0) }
    }

    /// Advance by the given number of microseconds.
    pub fn advance_us(&self, us: u64) {
        self.now_us.set(self.now_us.get() + us);
    }

    /// Advance by the given number of milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms * 1_000);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::timer::Timer;

    #[test]
    fn test_advances_on_demand_only() {
        let clock = ManualClock::new();
        assert_eq!(clock.now_us(), 0);
        assert_eq!(clock.now_us(), 0);

        clock.advance_ms(25);
        assert_eq!(clock.now_us(), 25_000);
    }

    #[test]
    fn test_drives_a_timer() {
        let clock = ManualClock::new();
        let mut timer = Timer::new(&clock, 0.5);
        timer.start();

        clock.advance_ms(499);
        assert!(!timer.is_done());
        clock.advance_ms(1);
        assert!(timer.is_done());
    }
}
