//! Hardware-agnostic sequencing core for Cadence robot control
//!
//! This crate contains the cooperative scheduler and everything it needs,
//! with no dependency on a specific runtime or board:
//!
//! - Hardware abstraction traits (actuator, clock, telemetry sink)
//! - The step/sequence composite scheduler
//! - Concrete steps (timed power, encoder target, delay, logging)
//! - Maneuver builders for multi-actuator drive bases
//! - Teleop input shaping helpers
//!
//! The entire tree is advanced by one external caller invoking
//! [`scheduler::Routine::advance`] once per cycle until it returns true.
//! Nothing in this crate blocks, sleeps, or spawns threads.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod maneuver;
pub mod scheduler;
pub mod steps;
pub mod teleop;
pub mod timer;
pub mod traits;
