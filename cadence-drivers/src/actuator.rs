//! Simulated encoder motor
//!
//! A software model of a DC motor with an incremental encoder, built for
//! harness tests and dry runs. The harness calls
//! [`update`](SimActuator::update) once per cycle to step the model:
//! commanded power accrues encoder counts, and a commanded reset
//! confirms after a configurable latency (or never, to reproduce a
//! failing encoder).

use cadence_core::traits::{Actuator, EncoderActuator};

/// Simulated motor configuration.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimActuatorConfig {
    /// Encoder counts accrued per update at full power.
    pub counts_per_cycle: u32,
    /// Updates between a reset command and its confirmation.
    pub reset_latency_cycles: u8,
    /// Whether a commanded reset ever confirms. False models a stuck
    /// encoder that leaves callers waiting forever.
    pub confirm_reset: bool,
}

impl Default for SimActuatorConfig {
    fn default() -> Self {
        Self {
            counts_per_cycle: 100,
            reset_latency_cycles: 1,
            confirm_reset: true,
        }
    }
}

/// Run mode of the simulated motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SimMode {
    /// Power applied open-loop; encoder counts still accrue.
    OpenLoop,
    /// Encoder reset in progress (or stuck, if confirmation is disabled).
    Resetting,
    /// Encoder-regulated run mode.
    Encoder,
}

/// Simulated encoder motor.
pub struct SimActuator {
    config: SimActuatorConfig,
    power: f32,
    /// Signed position; the reported distance is its magnitude.
    position_counts: i32,
    reset_cycles_left: u8,
    mode: SimMode,
    set_power_calls: u32,
    reset_commands: u32,
}

impl SimActuator {
    /// Create a stopped motor in open-loop mode.
    pub fn new(config: SimActuatorConfig) -> Self {
        Self {
            config,
            power: 0.0,
            position_counts: 0,
            reset_cycles_left: 0,
            mode: SimMode::OpenLoop,
            set_power_calls: 0,
            reset_commands: 0,
        }
    }

    /// Step the model one harness cycle.
    ///
    /// While resetting, the motor holds still and counts down the reset
    /// latency; otherwise the commanded power accrues signed position.
    pub fn update(&mut self) {
        match self.mode {
            SimMode::Resetting => {
                if self.config.confirm_reset && self.reset_cycles_left > 0 {
                    self.reset_cycles_left -= 1;
                    if self.reset_cycles_left == 0 {
                        self.position_counts = 0;
                    }
                }
            }
            SimMode::OpenLoop | SimMode::Encoder => {
                let delta = self.power * self.config.counts_per_cycle as f32;
                self.position_counts += delta as i32;
            }
        }
    }

    /// Current run mode.
    pub fn mode(&self) -> SimMode {
        self.mode
    }

    /// Signed position in counts.
    pub fn position_counts(&self) -> i32 {
        self.position_counts
    }

    /// Number of `set_power` commands received.
    pub fn set_power_calls(&self) -> u32 {
        self.set_power_calls
    }

    /// Number of encoder reset commands received.
    pub fn reset_commands(&self) -> u32 {
        self.reset_commands
    }
}

impl Actuator for SimActuator {
    fn set_power(&mut self, power: f32) {
        self.power = power.clamp(-1.0, 1.0);
        self.set_power_calls += 1;
    }

    fn get_power(&self) -> f32 {
        self.power
    }
}

impl EncoderActuator for SimActuator {
    fn reset_encoder(&mut self) {
        self.mode = SimMode::Resetting;
        self.reset_cycles_left = self.config.reset_latency_cycles;
        self.reset_commands += 1;
        if self.config.confirm_reset && self.reset_cycles_left == 0 {
            self.position_counts = 0;
        }
    }

    fn has_encoder_reset(&self) -> bool {
        self.mode == SimMode::Resetting
            && self.config.confirm_reset
            && self.reset_cycles_left == 0
    }

    fn run_with_encoder(&mut self) {
        self.mode = SimMode::Encoder;
    }

    fn current_encoder_distance(&self) -> u32 {
        self.position_counts.unsigned_abs()
    }
}
