use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "company_site_requests_total",
        "Total HTTP requests handled, by route and method",
        &["route", "method"]
    )
    .expect("register requests_total")
});

pub static ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "company_site_errors_total",
        "Total HTTP responses with a 4xx/5xx status, by route and status",
        &["route", "status"]
    )
    .expect("register errors_total")
});

pub fn record_request(route: &str, method: &str, status: StatusCode) {
    REQUESTS_TOTAL.with_label_values(&[route, method]).inc();
    if status.is_client_error() || status.is_server_error() {
        ERRORS_TOTAL.with_label_values(&[route, status.as_str()]).inc();
    }
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
