//! Metrics collection and exposition.
//!
//! # Metrics
//! - `custom_logo_requests_total` (counter): requests by status code
//! - `custom_logo_request_duration_seconds` (histogram): handler latency
//!
//! Without an installed exporter the macros are no-ops.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

pub const REQUESTS_TOTAL: &str = "custom_logo_requests_total";
pub const REQUEST_DURATION: &str = "custom_logo_request_duration_seconds";

/// Start the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            ::metrics::describe_counter!(REQUESTS_TOTAL, "Custom logo requests by status code");
            ::metrics::describe_histogram!(
                REQUEST_DURATION,
                "Custom logo handler latency in seconds"
            );
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(status: u16, start_time: Instant) {
    ::metrics::counter!(REQUESTS_TOTAL, "status" => status.to_string()).increment(1);
    ::metrics::histogram!(REQUEST_DURATION).record(start_time.elapsed().as_secs_f64());
}
