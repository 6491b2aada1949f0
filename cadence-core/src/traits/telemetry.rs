//! Diagnostic sink trait
//!
//! A fire-and-forget key/value output for logging steps. Implementations
//! must not block; a sink that pauses real time would break the
//! cooperative contract of the scheduler.

use core::cell::RefCell;

/// A fire-and-forget diagnostic output.
pub trait Telemetry {
    /// Record a key/value pair.
    ///
    /// Never blocks and never fails observably; a full or disconnected
    /// sink simply drops the record.
    fn record(&mut self, key: &str, value: &str);
}

impl<T: Telemetry + ?Sized> Telemetry for &mut T {
    fn record(&mut self, key: &str, value: &str) {
        (**self).record(key, value);
    }
}

impl<T: Telemetry> Telemetry for &RefCell<T> {
    fn record(&mut self, key: &str, value: &str) {
        self.borrow_mut().record(key, value);
    }
}
