//! Hardware abstraction traits
//!
//! These traits define the interface between the sequencing logic and
//! the caller-supplied collaborators: actuators, a time source, and an
//! optional diagnostic sink.

pub mod actuator;
pub mod clock;
pub mod telemetry;

pub use actuator::{Actuator, EncoderActuator};
pub use clock::Clock;
pub use telemetry::Telemetry;
