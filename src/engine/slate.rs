//! Slate analysis
//!
//! Fans the day's events out across tokio tasks. Events are independent
//! and embarrassingly parallel; one event's failure never halts the rest.
//! The only ordering in the output is the final deterministic sort for
//! presentation.

use super::{AnalysisError, Engine, EventContext, EventReport};
use crate::market::LineStore;
use crate::signal::Signal;
use crate::telemetry;
use futures_util::future::join_all;
use std::sync::Arc;

/// Outcome of analyzing a full slate
#[derive(Debug, Clone)]
pub struct SlateReport {
    /// Per-event reports, in ranked-signal order of their best signal
    pub reports: Vec<EventReport>,
    /// Events skipped entirely, with the reason
    pub skipped_events: Vec<(String, AnalysisError)>,
}

impl SlateReport {
    /// All signals across the slate, sorted for presentation:
    /// confidence descending, spread before total, then event id
    pub fn ranked_signals(&self) -> Vec<Signal> {
        let mut signals: Vec<Signal> = self
            .reports
            .iter()
            .flat_map(|report| report.signals.iter().cloned())
            .collect();
        signals.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then(a.market.order().cmp(&b.market.order()))
                .then(a.event_id.cmp(&b.event_id))
        });
        signals
    }
}

/// Analyze every event on the slate in parallel
pub async fn analyze_slate(
    engine: Arc<Engine>,
    store: Arc<dyn LineStore>,
    events: Vec<EventContext>,
) -> SlateReport {
    let handles = events.into_iter().map(|ctx| {
        let engine = Arc::clone(&engine);
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            let event_id = ctx.line.event_id.clone();
            (event_id, engine.analyze_event(&ctx, store.as_ref()))
        })
    });

    let mut reports = Vec::new();
    let mut skipped_events = Vec::new();
    for joined in join_all(handles).await {
        let Ok((event_id, result)) = joined else {
            // A panicked task loses only its own event
            tracing::error!("event analysis task panicked");
            continue;
        };
        match result {
            Ok(report) => {
                telemetry::record_event_analyzed(&report);
                reports.push(report);
            }
            Err(err) => {
                tracing::warn!(event_id = %event_id, "skipping event: {err}");
                telemetry::record_event_skipped();
                skipped_events.push((event_id, err));
            }
        }
    }

    // Deterministic order regardless of task completion interleaving
    reports.sort_by(|a, b| {
        let best = |r: &EventReport| r.signals.iter().map(|s| s.confidence).max().unwrap_or(0);
        best(b).cmp(&best(a)).then(a.event_id.cmp(&b.event_id))
    });
    skipped_events.sort_by(|a, b| a.0.cmp(&b.0));

    SlateReport {
        reports,
        skipped_events,
    }
}
