//! Concrete step implementations
//!
//! - [`TimedActuatorStep`]: run one actuator at a power for a duration
//! - [`EncoderActuatorStep`]: run one actuator to an encoder target
//! - [`DelayStep`]: cycle-counted delay
//! - [`LogCountStep`] / [`LogTimeStep`]: diagnostic output steps

pub mod delay;
pub mod encoder;
pub mod log;
pub mod timed;

pub use delay::DelayStep;
pub use encoder::{EncoderActuatorStep, EncoderPhase};
pub use log::{LogCountStep, LogTimeStep};
pub use timed::TimedActuatorStep;
