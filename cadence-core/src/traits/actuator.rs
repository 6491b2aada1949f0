//! Actuator traits
//!
//! An actuator is a caller-supplied controllable device. The core only
//! commands it; discovery, naming, and configuration happen outside.
//!
//! Steps take an actuator by value, but the intent is that the value is
//! a cheap *handle* to hardware the caller still owns. The blanket
//! implementations below make `&mut A` and `&RefCell<A>` usable wherever
//! an actuator is expected, so several steps can share one device within
//! the single-threaded cooperative cycle.

use core::cell::RefCell;

/// A controllable device with signed power output.
///
/// Power is a fraction of full output in `[-1.0, 1.0]`; the sign selects
/// direction. Values outside that range are a caller error.
pub trait Actuator {
    /// Command the output power.
    fn set_power(&mut self, power: f32);

    /// Get the most recently commanded power.
    fn get_power(&self) -> f32;
}

/// An actuator with positional feedback from an incremental encoder.
///
/// The encoder must be reset before closed-loop use, and reset completion
/// is asynchronous: command [`reset_encoder`](Self::reset_encoder), then
/// poll [`has_encoder_reset`](Self::has_encoder_reset) until it confirms.
pub trait EncoderActuator: Actuator {
    /// Command an encoder counter reset.
    fn reset_encoder(&mut self);

    /// Check whether a commanded reset has completed.
    fn has_encoder_reset(&self) -> bool;

    /// Switch the actuator into its encoder-regulated run mode.
    ///
    /// Must only be commanded after a reset has been confirmed.
    fn run_with_encoder(&mut self);

    /// Get the absolute accumulated encoder distance.
    ///
    /// Direction-agnostic: driving backwards accrues distance too.
    fn current_encoder_distance(&self) -> u32;
}

impl<A: Actuator + ?Sized> Actuator for &mut A {
    fn set_power(&mut self, power: f32) {
        (**self).set_power(power);
    }

    fn get_power(&self) -> f32 {
        (**self).get_power()
    }
}

impl<A: EncoderActuator + ?Sized> EncoderActuator for &mut A {
    fn reset_encoder(&mut self) {
        (**self).reset_encoder();
    }

    fn has_encoder_reset(&self) -> bool {
        (**self).has_encoder_reset()
    }

    fn run_with_encoder(&mut self) {
        (**self).run_with_encoder();
    }

    fn current_encoder_distance(&self) -> u32 {
        (**self).current_encoder_distance()
    }
}

impl<A: Actuator> Actuator for &RefCell<A> {
    fn set_power(&mut self, power: f32) {
        self.borrow_mut().set_power(power);
    }

    fn get_power(&self) -> f32 {
        self.borrow().get_power()
    }
}

impl<A: EncoderActuator> EncoderActuator for &RefCell<A> {
    fn reset_encoder(&mut self) {
        self.borrow_mut().reset_encoder();
    }

    fn has_encoder_reset(&self) -> bool {
        self.borrow().has_encoder_reset()
    }

    fn run_with_encoder(&mut self) {
        self.borrow_mut().run_with_encoder();
    }

    fn current_encoder_distance(&self) -> u32 {
        self.borrow().current_encoder_distance()
    }
}
