//! Run one actuator at a fixed power for a fixed duration

use crate::scheduler::{Step, TickCount};
use crate::timer::Timer;
use crate::traits::{Actuator, Clock};

/// Runs an actuator at a given power for a given number of seconds.
///
/// On first activation the timer is started and the power command is
/// issued once; the step then reports not-done each cycle until the
/// duration elapses. On completion the actuator is optionally commanded
/// to power 0 (`stop_on_done`), and that terminal command is the only
/// side effect re-issued if the step is advanced again.
pub struct TimedActuatorStep<A: Actuator, C: Clock> {
    actuator: A,
    power: f32,
    timer: Timer<C>,
    stop_on_done: bool,
    ticks: TickCount,
}

impl<A: Actuator, C: Clock> TimedActuatorStep<A, C> {
    /// Create a step driving `actuator` at `power` for `duration_s` seconds.
    ///
    /// Power must be in `[-1.0, 1.0]` and the duration non-negative.
    pub fn new(actuator: A, clock: C, power: f32, duration_s: f32, stop_on_done: bool) -> Self {
        Self {
            actuator,
            power,
            timer: Timer::new(clock, duration_s),
            stop_on_done,
            ticks: TickCount::new(),
        }
    }
}

impl<A: Actuator, C: Clock> Step for TimedActuatorStep<A, C> {
    fn advance(&mut self) -> bool {
        // Start the timer and the actuator in lock-step with the
        // scheduler, not at construction time.
        if self.ticks.advance() {
            self.timer.start();
            self.actuator.set_power(self.power);
        }

        let done = self.timer.is_done();
        if done && self.stop_on_done {
            self.actuator.set_power(0.0);
        }
        done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};

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

    #[derive(Default)]
    struct TestMotor {
        power: f32,
        set_power_calls: u32,
    }

    impl Actuator for TestMotor {
        fn set_power(&mut self, power: f32) {
            self.power = power;
            self.set_power_calls += 1;
        }

        fn get_power(&self) -> f32 {
            self.power
        }
    }

    #[test]
    fn test_power_issued_once_on_activation() {
        let clock = TestClock::new();
        let motor = RefCell::new(TestMotor::default());
        let mut step = TimedActuatorStep::new(&motor, &clock, 0.75, 1.0, false);

        assert!(!step.advance());
        assert_eq!(motor.borrow().power, 0.75);
        assert_eq!(motor.borrow().set_power_calls, 1);

        // Subsequent cycles before the deadline re-issue nothing
        for _ in 0..5 {
            clock.advance_us(100_000);
            assert!(!step.advance());
        }
        assert_eq!(motor.borrow().set_power_calls, 1);
    }

    #[test]
    fn test_stop_on_done() {
        let clock = TestClock::new();
        let motor = RefCell::new(TestMotor::default());
        let mut step = TimedActuatorStep::new(&motor, &clock, 1.0, 0.5, true);

        assert!(!step.advance());
        clock.advance_us(500_000);
        assert!(step.advance());
        assert_eq!(motor.borrow().power, 0.0);
    }

    #[test]
    fn test_no_stop_leaves_power_applied() {
        let clock = TestClock::new();
        let motor = RefCell::new(TestMotor::default());
        let mut step = TimedActuatorStep::new(&motor, &clock, 0.5, 0.5, false);

        step.advance();
        clock.advance_us(600_000);
        assert!(step.advance());
        assert_eq!(motor.borrow().power, 0.5);
    }

    #[test]
    fn test_terminal_idempotence() {
        let clock = TestClock::new();
        let motor = RefCell::new(TestMotor::default());
        let mut step = TimedActuatorStep::new(&motor, &clock, 1.0, 0.2, true);

        step.advance();
        clock.advance_us(300_000);
        assert!(step.advance());
        let calls_at_completion = motor.borrow().set_power_calls;

        // Re-advancing only reasserts the terminal power-0 command
        for _ in 0..4 {
            assert!(step.advance());
        }
        assert_eq!(motor.borrow().power, 0.0);
        assert_eq!(
            motor.borrow().set_power_calls,
            calls_at_completion + 4
        );
    }
}
