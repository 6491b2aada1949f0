//! The atomic unit of cooperative work

/// The atomic unit of cooperative work.
///
/// An external harness delivers one [`advance`](Step::advance) call per
/// cycle. Each call performs at most one unit of work and must return
/// quickly; blocking or sleeping inside `advance` breaks the cooperative
/// contract for every other step in the tree.
///
/// # Terminal idempotence
///
/// Once `advance` has returned true it must return true on every
/// subsequent call, and must not re-trigger one-time side effects.
/// Reasserting the already-applied terminal actuator state (re-issuing
/// power 0, for example) is acceptable; re-resetting an encoder is not.
/// Concurrent groups re-advance finished children every cycle, so this
/// is a first-class requirement of the trait, not an edge case.
///
/// # Errors
///
/// `advance` is infallible: a step either succeeds or runs forever.
/// Hardware failures surface as a step that never reports done, which
/// the surrounding harness must monitor and time out externally.
pub trait Step {
    /// Run the next time-slice of this step; true when it is complete.
    fn advance(&mut self) -> bool;
}

/// Per-step cycle counter with first-activation detection.
///
/// Step implementations embed one of these and call
/// [`advance`](TickCount::advance) exactly once at the top of their own
/// `advance`, using the returned flag to perform one-time setup (starting
/// a timer, issuing an initial actuator command) in lock-step with the
/// scheduler's cadence rather than at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickCount {
    count: u32,
}

impl TickCount {
    /// Create a counter that has not yet been advanced.
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Count one cycle; true exactly on the first call.
    pub fn advance(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        self.count == 1
    }

    /// Number of cycles delivered so far.
    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_activation_once() {
        let mut ticks = TickCount::new();
        assert_eq!(ticks.count(), 0);

        assert!(ticks.advance());
        for _ in 0..10 {
            assert!(!ticks.advance());
        }
        assert_eq!(ticks.count(), 11);
    }
}
