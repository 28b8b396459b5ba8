use crate::procedures;

use std::time::Duration;

use metrics::{counter, histogram};

/// Metrics for RPC calls. Emits through the `metrics` facade; nothing is
/// recorded until the embedding binary installs a recorder.
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "hr_rpc" }
    }

    pub fn call_received(&self, procedure: &str) {
        counter!(format!("{}.calls.total", self.prefix)).increment(1);
        counter!(self.call_counter_name(procedure)).increment(1);
    }

    /// Per-procedure counter name; unknown paths map to `<prefix>.calls.unknown`
    pub fn call_counter_name(&self, procedure: &str) -> String {
        format!("{}.calls.{}", self.prefix, procedures::metric_label(procedure))
    }

    pub fn error_occurred(&self, code: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, code)).increment(1);
    }

    pub fn auth_rejected(&self, reason: &str) {
        counter!(format!("{}.auth.rejected.{}", self.prefix, reason)).increment(1);
    }

    pub fn call_latency(&self, duration: Duration) {
        histogram!(format!("{}.calls.latency_ms", self.prefix)).record(duration.as_millis() as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
