//! Prometheus metrics for the console watch loop.
//!
//! All metrics are aggregated in the [`Metrics`] struct for easy tracking
//! and management.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Aggregated metrics for the console.
///
/// Metric descriptions are registered with the global registry on creation.
#[derive(Debug, Clone)]
pub struct Metrics {
    _private: (),
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics instance and register all metric descriptions.
    pub fn new() -> Self {
        Self::register_descriptions();
        Self { _private: () }
    }

    fn register_descriptions() {
        describe_counter!(
            "console_reloads_total",
            "Total number of token info reloads attempted"
        );
        describe_counter!(
            "console_reload_failures_total",
            "Total number of reloads that left an error in view state"
        );
        describe_histogram!(
            "console_reload_duration_seconds",
            "Duration of each token info reload in seconds"
        );
        describe_counter!(
            "console_transactions_total",
            "Total write transactions submitted, labeled by function"
        );
        describe_counter!(
            "console_transaction_failures_total",
            "Total write transactions that failed, labeled by function"
        );
    }

    /// Record a completed reload and whether it surfaced an error.
    pub fn record_reload(&self, duration: Duration, failed: bool) {
        counter!("console_reloads_total").increment(1);
        if failed {
            counter!("console_reload_failures_total").increment(1);
        }
        histogram!("console_reload_duration_seconds").record(duration.as_secs_f64());
    }

    /// Record a submitted write transaction.
    pub fn record_transaction(&self, function: &'static str, succeeded: bool) {
        counter!("console_transactions_total", "function" => function).increment(1);
        if !succeeded {
            counter!("console_transaction_failures_total", "function" => function).increment(1);
        }
    }
}
