//! Duration gate over a caller-supplied clock
//!
//! A [`Timer`] answers one question: has the configured number of seconds
//! elapsed since [`start`](Timer::start) was called? Timed steps start
//! their timer on first activation so that the countdown begins in
//! lock-step with the scheduler's cadence.

use crate::traits::Clock;

/// A stateless-until-started duration gate.
///
/// Construction records the duration only; the reference instant is taken
/// when [`start`](Timer::start) is called. Calling `start` again resets
/// the reference point.
///
/// `elapsed`, `remaining`, and `is_done` are only meaningful after
/// `start` has been called once. Before that they measure from the
/// clock's epoch, which typically reads as already elapsed; callers must
/// not rely on the pre-start values.
pub struct Timer<C: Clock> {
    clock: C,
    duration_s: f32,
    started_at_us: u64,
}

impl<C: Clock> Timer<C> {
    /// Create a timer for the given duration in seconds.
    ///
    /// Creation time is not start time.
    pub fn new(clock: C, duration_s: f32) -> Self {
        Self {
            clock,
            duration_s,
            started_at_us: 0,
        }
    }

    /// Record the current instant as the reference point.
    pub fn start(&mut self) {
        self.started_at_us = self.clock.now_us();
    }

    /// Seconds elapsed since the timer was last started.
    pub fn elapsed(&self) -> f32 {
        let elapsed_us = self.clock.now_us().saturating_sub(self.started_at_us);
        elapsed_us as f32 / 1_000_000.0
    }

    /// Seconds remaining until the configured duration has elapsed.
    ///
    /// Negative once the duration has been exceeded.
    pub fn remaining(&self) -> f32 {
        self.duration_s - self.elapsed()
    }

    /// Check whether the configured duration has elapsed.
    pub fn is_done(&self) -> bool {
        self.remaining() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct TestClock {
        now_us: Cell<u64>,
    }

    impl TestClock {
        fn new() -> Self {
            Self { now_us: Cell::new(0) }
        }

        fn advance_us(&self, us: u64) {
            self.now_us.set(self.now_us.get() + us);
        }
    }

    impl Clock for TestClock {
        fn now_us(&self) -> u64 {
            self.now_us.get()
        }
    }

    #[test]
    fn test_not_done_before_duration() {
        let clock = TestClock::new();
        let mut timer = Timer::new(&clock, 2.0);
        timer.start();

        for _ in 0..19 {
            clock.advance_us(100_000);
            assert!(!timer.is_done());
        }

        // 20th tick reaches exactly 2.0s
        clock.advance_us(100_000);
        assert!(timer.is_done());
    }

    #[test]
    fn test_remaining_decreases() {
        let clock = TestClock::new();
        let mut timer = Timer::new(&clock, 1.0);
        timer.start();

        let mut last = timer.remaining();
        for _ in 0..15 {
            clock.advance_us(100_000);
            let now = timer.remaining();
            assert!(now < last);
            last = now;
        }

        // Past the duration, remaining goes negative
        assert!(timer.remaining() < 0.0);
    }

    #[test]
    fn test_restart_resets_reference() {
        let clock = TestClock::new();
        let mut timer = Timer::new(&clock, 1.0);
        timer.start();

        clock.advance_us(1_500_000);
        assert!(timer.is_done());

        timer.start();
        assert!(!timer.is_done());
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn test_zero_duration_done_at_start() {
        let clock = TestClock::new();
        let mut timer = Timer::new(&clock, 0.0);
        timer.start();
        assert!(timer.is_done());
    }
}
