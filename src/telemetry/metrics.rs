//! Prometheus metrics

use crate::engine::EventReport;
use crate::signal::Classification;
use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::Ipv4Addr;

/// Install the Prometheus exporter on the given port
pub fn install_exporter(port: u16) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener((Ipv4Addr::UNSPECIFIED, port))
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics exporter: {}", e))
}

fn classification_label(classification: Classification) -> &'static str {
    match classification {
        Classification::Balanced => "balanced",
        Classification::Actionable => "actionable",
        Classification::SuspectedTrap => "suspected_trap",
        Classification::Conflict => "conflict",
    }
}

/// Record a completed event analysis and its signals
pub fn record_event_analyzed(report: &EventReport) {
    counter!("sharpline_events_analyzed_total").increment(1);
    for signal in &report.signals {
        counter!(
            "sharpline_signals_total",
            "classification" => classification_label(signal.classification),
        )
        .increment(1);
    }
    for _ in &report.skipped_markets {
        counter!("sharpline_markets_skipped_total").increment(1);
    }
}

/// Record an event skipped before analysis
pub fn record_event_skipped() {
    counter!("sharpline_events_skipped_total").increment(1);
}

/// Record the size of the slate being analyzed
pub fn record_slate_size(events: usize) {
    gauge!("sharpline_slate_size").set(events as f64);
}
