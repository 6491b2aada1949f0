//! Run one actuator to an absolute encoder target

use crate::scheduler::{Step, TickCount};
use crate::traits::EncoderActuator;

/// Phase of the encoder reset-and-run protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncoderPhase {
    /// Encoder reset not yet commanded.
    Reset,
    /// Reset commanded, waiting for the actuator to confirm it.
    AwaitingReset,
    /// Running under encoder regulation toward the target.
    Running,
}

/// Runs an actuator at a given power until its absolute encoder distance
/// reaches a target count.
///
/// Encoders need a multi-phase protocol before they can be trusted:
///
/// 1. [`Reset`](EncoderPhase::Reset): command an encoder reset on the
///    first cycle.
/// 2. [`AwaitingReset`](EncoderPhase::AwaitingReset): poll the actuator's
///    confirmation each cycle. On confirmation, command encoder-regulated
///    run mode and the configured power.
/// 3. [`Running`](EncoderPhase::Running): compare the absolute distance
///    against the target each cycle; done once it is reached, optionally
///    stopping the actuator.
///
/// There is no timeout between reset and confirmation. An actuator that
/// never confirms leaves the step reporting not-done forever; the harness
/// is responsible for monitoring stalled routines.
pub struct EncoderActuatorStep<A: EncoderActuator> {
    actuator: A,
    power: f32,
    target: u32,
    phase: EncoderPhase,
    stop_on_done: bool,
    ticks: TickCount,
}

impl<A: EncoderActuator> EncoderActuatorStep<A> {
    /// Create a step driving `actuator` at `power` until `target` counts
    /// have accumulated.
    pub fn new(actuator: A, power: f32, target: u32, stop_on_done: bool) -> Self {
        Self {
            actuator,
            power,
            target,
            phase: EncoderPhase::Reset,
            stop_on_done,
            ticks: TickCount::new(),
        }
    }

    /// Current phase of the reset-and-run protocol.
    pub fn phase(&self) -> EncoderPhase {
        self.phase
    }
}

impl<A: EncoderActuator> Step for EncoderActuatorStep<A> {
    fn advance(&mut self) -> bool {
        self.ticks.advance();

        match self.phase {
            EncoderPhase::Reset => {
                // Reset is commanded exactly once per step instance.
                self.actuator.reset_encoder();
                self.phase = EncoderPhase::AwaitingReset;
                false
            }
            EncoderPhase::AwaitingReset => {
                if self.actuator.has_encoder_reset() {
                    self.actuator.run_with_encoder();
                    self.actuator.set_power(self.power);
                    self.phase = EncoderPhase::Running;
                }
                false
            }
            EncoderPhase::Running => {
                let done = self.actuator.current_encoder_distance() >= self.target;
                if done && self.stop_on_done {
                    self.actuator.set_power(0.0);
                }
                done
            }
        }
    }
}
