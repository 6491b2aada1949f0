//! Buffered telemetry sink
//!
//! A [`Telemetry`] implementation that keeps records in a fixed-capacity
//! buffer for later inspection. Used by test benches and dry-run
//! harnesses in place of a live driver-station link.

use heapless::{String, Vec};

use cadence_core::traits::Telemetry;

/// Maximum records held before new ones are dropped.
pub const MAX_RECORDS: usize = 32;

const MAX_KEY_LEN: usize = 16;
const MAX_VALUE_LEN: usize = 32;

/// One recorded key/value pair, truncated to fixed capacities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String<MAX_KEY_LEN>,
    pub value: String<MAX_VALUE_LEN>,
}

/// Fixed-capacity telemetry buffer.
///
/// Recording never fails: once full, further records are counted and
/// dropped, preserving the fire-and-forget contract.
#[derive(Debug, Default)]
pub struct TelemetryLog {
    records: Vec<Record, MAX_RECORDS>,
    dropped: u32,
}

impl TelemetryLog {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records captured so far, oldest first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records dropped because the buffer was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Discard all captured records.
    pub fn clear(&mut self) {
        self.records.clear();
        self.dropped = 0;
    }
}

fn truncated<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl Telemetry for TelemetryLog {
    fn record(&mut self, key: &str, value: &str) {
        let record = Record {
            key: truncated(key),
            value: truncated(value),
        };
        if self.records.push(record).is_err() {
            self.dropped += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    use cadence_core::scheduler::Step;
    use cadence_core::steps::LogCountStep;

    #[test]
    fn test_records_in_order() {
        let mut log = TelemetryLog::new();
        log.record("left pwr", "0.50");
        log.record("right pwr", "-0.25");

        assert_eq!(log.records().len(), 2);
        assert_eq!(log.records()[0].key.as_str(), "left pwr");
        assert_eq!(log.records()[1].value.as_str(), "-0.25");
    }

    #[test]
    fn test_overflow_drops_silently() {
        let mut log = TelemetryLog::new();
        for i in 0..(MAX_RECORDS as u32 + 5) {
            log.record("k", if i % 2 == 0 { "a" } else { "b" });
        }

        assert_eq!(log.records().len(), MAX_RECORDS);
        assert_eq!(log.dropped(), 5);
    }

    #[test]
    fn test_long_values_truncate() {
        let mut log = TelemetryLog::new();
        log.record("a-key-well-beyond-capacity", "v");

        assert_eq!(log.records()[0].key.as_str(), "a-key-well-beyon");
    }

    #[test]
    fn test_captures_log_step_output() {
        let log = RefCell::new(TelemetryLog::new());
        let mut step = LogCountStep::new(&log, "probe", 2);

        assert!(!step.advance());
        assert!(step.advance());

        let log = log.borrow();
        assert_eq!(log.records()[0].value.as_str(), "count = 2");
        assert_eq!(log.records()[1].value.as_str(), "count = 1");
    }
}
