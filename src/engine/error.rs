//! Engine error taxonomy
//!
//! Per-event and per-market failures are local: the event or market is
//! skipped, logged, and excluded from output while the rest of the slate
//! proceeds. Configuration problems are fatal before any event is
//! processed and live in `config::ConfigError`.

use crate::signal::MarketKind;
use thiserror::Error;

/// Non-fatal analysis errors
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    /// Efficiency profile absent: the whole event is skipped
    #[error("missing efficiency profile for {team}")]
    MissingProfile { team: String },

    /// Required line fields absent: only that market is skipped
    #[error("market line for {event_id} is missing {market} fields")]
    MalformedLine {
        event_id: String,
        market: MarketKind,
    },
}
