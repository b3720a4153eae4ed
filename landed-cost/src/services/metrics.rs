//! Prometheus metrics for landed-cost.

use once_cell::sync::Lazy;
use prometheus::{register_counter_vec, register_int_counter, CounterVec, IntCounter, TextEncoder};

/// Batch allocations by requested and applied freight policy.
pub static ALLOCATIONS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "landed_cost_allocations_total",
        "Total number of batch cost allocations",
        &["requested", "applied"]
    )
    .expect("Failed to register allocations_total")
});

/// Line items costed.
pub static ITEMS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("landed_cost_items_total", "Total number of line items costed")
        .expect("Failed to register items_total")
});

/// Breakdowns whose raw cost went negative and was floored at zero.
pub static CLAMPED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "landed_cost_clamped_total",
        "Total number of unit costs floored at zero"
    )
    .expect("Failed to register clamped_total")
});

/// Purchase-order limit checks by outcome.
pub static LIMIT_CHECKS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "landed_cost_limit_checks_total",
        "Total number of purchase-order limit checks by outcome",
        &["outcome"] // allowed, per_transaction, monthly_total
    )
    .expect("Failed to register limit_checks_total")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&ALLOCATIONS_TOTAL);
    Lazy::force(&ITEMS_TOTAL);
    Lazy::force(&CLAMPED_TOTAL);
    Lazy::force(&LIMIT_CHECKS_TOTAL);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
