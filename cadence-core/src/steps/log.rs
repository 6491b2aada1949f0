//! Diagnostic output steps
//!
//! Debug steps that write progress to a [`Telemetry`] sink while they
//! run. They hold the cooperative line: the count variant idles in
//! scheduler cycles rather than pausing real time.

use core::fmt::Write;

use heapless::String;

use crate::scheduler::{Step, TickCount};
use crate::timer::Timer;
use crate::traits::{Clock, Telemetry};

/// Formatted value buffer for one telemetry record.
type Value = String<32>;

/// Records a countdown to the sink for a given number of cycles.
pub struct LogCountStep<T: Telemetry> {
    sink: T,
    label: &'static str,
    remaining: u32,
    ticks: TickCount,
}

impl<T: Telemetry> LogCountStep<T> {
    /// Create a step that logs under `label` for `cycles` advances.
    pub fn new(sink: T, label: &'static str, cycles: u32) -> Self {
        Self {
            sink,
            label,
            remaining: cycles,
            ticks: TickCount::new(),
        }
    }
}

impl<T: Telemetry> Step for LogCountStep<T> {
    fn advance(&mut self) -> bool {
        self.ticks.advance();

        if self.remaining > 0 {
            let mut value = Value::new();
            let _ = write!(value, "count = {}", self.remaining);
            self.sink.record(self.label, &value);
            self.remaining -= 1;
        } else {
            self.sink.record(self.label, "done");
        }

        self.remaining == 0
    }
}

/// How often [`LogTimeStep`] emits a record while its timer runs.
const LOG_TIME_EVERY_CYCLES: u32 = 100;

/// Records remaining time to the sink until a timer expires.
///
/// Emits only every [`LOG_TIME_EVERY_CYCLES`]th cycle so a fast harness
/// does not flood the sink.
pub struct LogTimeStep<T: Telemetry, C: Clock> {
    sink: T,
    label: &'static str,
    timer: Timer<C>,
    ticks: TickCount,
}

impl<T: Telemetry, C: Clock> LogTimeStep<T, C> {
    /// Create a step that logs under `label` for `duration_s` seconds.
    pub fn new(sink: T, label: &'static str, clock: C, duration_s: f32) -> Self {
        Self {
            sink,
            label,
            timer: Timer::new(clock, duration_s),
            ticks: TickCount::new(),
        }
    }
}

impl<T: Telemetry, C: Clock> Step for LogTimeStep<T, C> {
    fn advance(&mut self) -> bool {
        if self.ticks.advance() {
            self.timer.start();
        }

        let done = self.timer.is_done();
        if !done && self.ticks.count() % LOG_TIME_EVERY_CYCLES == 0 {
            let mut value = Value::new();
            let _ = write!(value, "time = {}", self.timer.remaining());
            self.sink.record(self.label, &value);
        }
        if done {
            self.sink.record(self.label, "done");
        }

        done
    }
}
