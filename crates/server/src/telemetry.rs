//! Prometheus metrics for the analysis service.
//!
//! The recorder is process-global, so it is installed once from
//! [`crate::start_server`]. Without it the `metrics` macros are no-ops, which
//! keeps router tests free of global state.

use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const DOCUMENTS_ANALYZED: &str = "docsim_documents_analyzed_total";
pub const COMPARE_REQUESTS: &str = "docsim_compare_requests_total";
pub const COMPARE_DURATION: &str = "docsim_compare_duration_seconds";
pub const INDEX_RECORDS: &str = "docsim_index_records";

/// Install the global Prometheus recorder and return a render handle.
pub fn install_prometheus() -> anyhow::Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|err| anyhow::anyhow!("failed to install Prometheus recorder: {err}"))
}

pub fn record_analyzed(index_records: usize) {
    metrics::counter!(DOCUMENTS_ANALYZED).increment(1);
    metrics::gauge!(INDEX_RECORDS).set(index_records as f64);
}

pub fn record_compare(outcome: &'static str, elapsed: Duration) {
    metrics::counter!(COMPARE_REQUESTS, "outcome" => outcome).increment(1);
    metrics::histogram!(COMPARE_DURATION).record(elapsed.as_secs_f64());
}
