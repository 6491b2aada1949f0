//! Cycle-counted delay

use crate::scheduler::{Step, TickCount};

/// Idles for a fixed number of scheduler cycles.
///
/// A cooperative replacement for "pause for a while" steps: real-time
/// sleeps are forbidden inside `advance`, so the delay is expressed in
/// cycles of the external harness instead.
pub struct DelayStep {
    remaining: u32,
    ticks: TickCount,
}

impl DelayStep {
    /// Create a delay lasting `cycles` advances.
    ///
    /// A zero-cycle delay reports done on its first advance.
    pub fn new(cycles: u32) -> Self {
        Self {
            remaining: cycles,
            ticks: TickCount::new(),
        }
    }
}

impl Step for DelayStep {
    fn advance(&mut self) -> bool {
        self.ticks.advance();
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_after_exact_cycle_count() {
        let mut step = DelayStep::new(3);
        assert!(!step.advance());
        assert!(!step.advance());
        assert!(step.advance());
    }

    #[test]
    fn test_zero_cycles_done_immediately() {
        let mut step = DelayStep::new(0);
        assert!(step.advance());
    }

    #[test]
    fn test_stays_done() {
        let mut step = DelayStep::new(1);
        assert!(step.advance());
        for _ in 0..4 {
            assert!(step.advance());
        }
    }
}
