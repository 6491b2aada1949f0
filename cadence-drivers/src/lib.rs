//! Trait implementations for Cadence harnesses and tests
//!
//! This crate provides concrete implementations of the traits defined
//! in cadence-core for hosts that are not real robots:
//!
//! - A simulated encoder motor with reset latency and a simple motion model
//! - A manually driven clock
//! - A buffered telemetry sink
//!
//! Real hardware back-ends live with their platforms; these are the
//! pieces a scripted harness or a test bench needs.

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod clock;
pub mod telemetry;

pub use actuator::{SimActuator, SimActuatorConfig, SimMode};
pub use clock::ManualClock;
pub use telemetry::{Record, TelemetryLog};
