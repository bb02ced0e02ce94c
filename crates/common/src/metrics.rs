//! Process-wide Prometheus registry for content counters.

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Page/API content reads, labelled `outcome` = `loaded` | `fallback`.
pub static CONTENT_LOADS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_counter_vec("content_loads_total", "Content store reads by outcome")
});

/// Content saves, labelled `outcome` = `ok` | `error` | `conflict` | `unauthorized`.
pub static CONTENT_SAVES: Lazy<IntCounterVec> = Lazy::new(|| {
    register_counter_vec("content_saves_total", "Content store writes by outcome")
});

fn register_counter_vec(name: &str, help: &str) -> IntCounterVec {
    let vec = IntCounterVec::new(Opts::new(name, help), &["outcome"])
        .expect("static metric opts are valid");
    if let Err(e) = REGISTRY.register(Box::new(vec.clone())) {
        tracing::warn!(metric = name, error = %e, "metric registration failed");
    }
    vec
}

pub fn record_load(outcome: &str) {
    CONTENT_LOADS.with_label_values(&[outcome]).inc();
}

pub fn record_save(outcome: &str) {
    CONTENT_SAVES.with_label_values(&[outcome]).inc();
}

/// Render all registered metrics in the Prometheus text format.
pub fn gather_text() -> Result<String, prometheus::Error> {
    // touch the lazies so series show up even before the first request
    Lazy::force(&CONTENT_LOADS);
    Lazy::force(&CONTENT_SAVES);
    let mut buf = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
