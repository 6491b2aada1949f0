//! Step/sequence composite scheduler
//!
//! Discrete actions implement [`Step`] and are composed into sequential
//! or concurrent groups inside a [`Routine`], which an external harness
//! advances once per cycle until it reports completion.

pub mod routine;
pub mod step;

pub use routine::{Routine, SequenceKind, StepId};
pub use step::{Step, TickCount};
