//! Monotonic time source trait
//!
//! The core never reads a global clock; timed steps are constructed with
//! a caller-supplied clock handle so that tests and simulations can drive
//! time by hand.

/// A monotonic time source.
pub trait Clock {
    /// Current time in microseconds since an arbitrary fixed epoch.
    ///
    /// Must never go backwards.
    fn now_us(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
