use std::sync::Arc;

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use tokio::sync::OnceCell;
use tracing::info;

use crate::error::{RadeError, Result};

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE.get_or_init(|| async {
        info!("Initializing Metrics ...");
        Metrics::new()}
    ).await
}

/// Render every registered metric in the prometheus text format.
pub async fn encode_metrics() -> Result<String> {
    let metrics = get_metrics().await;
    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&metrics.registry.gather(), &mut buffer)
        .map_err(|e| RadeError::protocol("metrics", e))?;
    String::from_utf8(buffer).map_err(|e| RadeError::protocol("metrics", e))
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Gateway calls
    pub requests: IntCounterVec,
    pub request_duration: HistogramVec,
    pub auth_retries: IntCounterVec,

    // Token endpoint
    pub token_fetches: IntCounterVec,
    pub token_fetch_failures: IntCounterVec,
    pub token_expiry_unix: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("rade".into()), None).expect("metrics registry");

        let metrics: Arc<Metrics> = Arc::new(Self {
            requests: counter_vec("requests_total", "Gateway calls by service and outcome", &["service", "outcome"]),
            request_duration: HistogramVec::new(HistogramOpts::new("request_duration_seconds", "Gateway call duration seconds").buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),&["service"],).expect("metric definition"),
            auth_retries: counter_vec("auth_retries_total", "Calls retried after a 401", &["service"]),

            token_fetches: counter_vec("token_fetch_total", "Token endpoint calls by reason", &["reason"]),
            token_fetch_failures: counter_vec("token_fetch_failures_total", "Token endpoint failures by kind", &["kind"]),
            token_expiry_unix: IntGauge::new("cached_token_expiry_unix", "Expiry of the last issued token").expect("metric definition"),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.requests.clone())).expect("register metric");
        reg.register(Box::new(metrics.request_duration.clone())).expect("register metric");
        reg.register(Box::new(metrics.auth_retries.clone())).expect("register metric");
        reg.register(Box::new(metrics.token_fetches.clone())).expect("register metric");
        reg.register(Box::new(metrics.token_fetch_failures.clone())).expect("register metric");
        reg.register(Box::new(metrics.token_expiry_unix.clone())).expect("register metric");

        metrics
    }
}

fn counter_vec(name: &str, help: &str, labels: &[&str]) -> IntCounterVec {
    IntCounterVec::new(Opts::new(name, help), labels).expect("metric definition")
}
