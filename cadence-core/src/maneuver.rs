//! Maneuver builders for four-actuator drive bases
//!
//! Convenience factories that compose a concurrent group of four timed or
//! encoder-targeted steps so a whole drive base moves as one compound
//! action. These add no scheduling behavior of their own; they only wire
//! up the steps from [`crate::steps`] inside a [`Routine`].

use crate::scheduler::{Routine, SequenceKind, StepId};
use crate::steps::{EncoderActuatorStep, TimedActuatorStep};
use crate::traits::{Actuator, Clock, EncoderActuator};

/// The four drive actuators of a skid-steer base.
///
/// Callers are responsible for configuring directions (left side
/// typically reversed) before handing the set to a builder.
pub struct DriveSet<A> {
    pub front_right: A,
    pub back_right: A,
    pub front_left: A,
    pub back_left: A,
}

impl<A> DriveSet<A> {
    pub fn new(front_right: A, back_right: A, front_left: A, back_left: A) -> Self {
        Self {
            front_right,
            back_right,
            front_left,
            back_left,
        }
    }
}

/// Drive straight at `power` for `duration_s` seconds.
///
/// Returns the id of the concurrent group, ready to attach.
pub fn move_by_time<'a, A, C>(
    routine: &mut Routine<'a>,
    drive: DriveSet<A>,
    clock: C,
    power: f32,
    duration_s: f32,
    stop_on_done: bool,
) -> StepId
where
    A: Actuator + 'a,
    C: Clock + Clone + 'a,
{
    turn_by_time(routine, drive, clock, power, power, duration_s, stop_on_done)
}

/// Turn by applying separate right and left powers for `duration_s` seconds.
pub fn turn_by_time<'a, A, C>(
    routine: &mut Routine<'a>,
    drive: DriveSet<A>,
    clock: C,
    right_power: f32,
    left_power: f32,
    duration_s: f32,
    stop_on_done: bool,
) -> StepId
where
    A: Actuator + 'a,
    C: Clock + Clone + 'a,
{
    let group = routine.sequence(SequenceKind::Concurrent);
    let sides = [
        (drive.front_right, right_power),
        (drive.back_right, right_power),
        (drive.front_left, left_power),
        (drive.back_left, left_power),
    ];
    for (actuator, power) in sides {
        let step = routine.action(TimedActuatorStep::new(
            actuator,
            clock.clone(),
            power,
            duration_s,
            stop_on_done,
        ));
        routine.attach(&group, step);
    }
    group
}

/// Drive straight at `power` until every wheel has accumulated `counts`
/// encoder counts.
pub fn move_by_encoder<'a, A>(
    routine: &mut Routine<'a>,
    drive: DriveSet<A>,
    power: f32,
    counts: u32,
    stop_on_done: bool,
) -> StepId
where
    A: EncoderActuator + 'a,
{
    turn_by_encoder(routine, drive, power, power, counts, counts, stop_on_done)
}

/// Turn by applying separate right and left powers to separate right and
/// left encoder targets.
pub fn turn_by_encoder<'a, A>(
    routine: &mut Routine<'a>,
    drive: DriveSet<A>,
    right_power: f32,
    left_power: f32,
    right_counts: u32,
    left_counts: u32,
    stop_on_done: bool,
) -> StepId
where
    A: EncoderActuator + 'a,
{
    let group = routine.sequence(SequenceKind::Concurrent);
    let sides = [
        (drive.front_right, right_power, right_counts),
        (drive.back_right, right_power, right_counts),
        (drive.front_left, left_power, left_counts),
        (drive.back_left, left_power, left_counts),
    ];
    for (actuator, power, counts) in sides {
        let step = routine.action(EncoderActuatorStep::new(
            actuator,
            power,
            counts,
            stop_on_done,
        ));
        routine.attach(&group, step);
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};

    struct TestClock {
        now_us: Cell<u64>,
    }

    impl Clock for TestClock {
        fn now_us(&self) -> u64 {
            self.now_us.get()
        }
    }

    #[derive(Default)]
    struct TestMotor {
        power: f32,
    }

    impl Actuator for TestMotor {
        fn set_power(&mut self, power: f32) {
            self.power = power;
        }

        fn get_power(&self) -> f32 {
            self.power
        }
    }

    fn motors() -> [RefCell<TestMotor>; 4] {
        [
            RefCell::new(TestMotor::default()),
            RefCell::new(TestMotor::default()),
            RefCell::new(TestMotor::default()),
            RefCell::new(TestMotor::default()),
        ]
    }

    #[test]
    fn test_move_by_time_drives_all_wheels() {
        let clock = TestClock { now_us: Cell::new(0) };
        let [fr, br, fl, bl] = motors();

        let mut routine = Routine::linear();
        let group = move_by_time(
            &mut routine,
            DriveSet::new(&fr, &br, &fl, &bl),
            &clock,
            0.8,
            1.0,
            true,
        );
        routine.push(group);

        assert!(!routine.advance());
        for motor in [&fr, &br, &fl, &bl] {
            assert_eq!(motor.borrow().power, 0.8);
        }

        clock.now_us.set(1_000_000);
        assert!(routine.advance());
        for motor in [&fr, &br, &fl, &bl] {
            assert_eq!(motor.borrow().power, 0.0);
        }
    }

    #[test]
    fn test_turn_by_time_splits_sides() {
        let clock = TestClock { now_us: Cell::new(0) };
        let [fr, br, fl, bl] = motors();

        let mut routine = Routine::linear();
        let group = turn_by_time(
            &mut routine,
            DriveSet::new(&fr, &br, &fl, &bl),
            &clock,
            1.0,
            -1.0,
            2.0,
            false,
        );
        routine.push(group);

        routine.advance();
        assert_eq!(fr.borrow().power, 1.0);
        assert_eq!(br.borrow().power, 1.0);
        assert_eq!(fl.borrow().power, -1.0);
        assert_eq!(bl.borrow().power, -1.0);
    }
}
