//! First-observed-line store
//!
//! Externally-owned keyed store of the first line seen per event and
//! market, used only to compute drift for display. The engine never owns
//! this state; losing it simply makes the next observed line the new
//! baseline.

use crate::signal::MarketKind;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::RwLock;

/// Keyed read/write collaborator for opening lines
pub trait LineStore: Send + Sync {
    /// First line observed for this event/market, if any
    fn opening_line(&self, event_id: &str, market: MarketKind) -> Option<Decimal>;

    /// Record `point` as the opening line unless one exists; returns the
    /// baseline in effect after the call
    fn record(&self, event_id: &str, market: MarketKind, point: Decimal) -> Decimal;
}

/// Process-local line store
#[derive(Debug, Default)]
pub struct InMemoryLineStore {
    lines: RwLock<HashMap<(String, MarketKind), Decimal>>,
}

impl InMemoryLineStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineStore for InMemoryLineStore {
    fn opening_line(&self, event_id: &str, market: MarketKind) -> Option<Decimal> {
        self.lines
            .read()
            .expect("line store lock poisoned")
            .get(&(event_id.to_string(), market))
            .copied()
    }

    fn record(&self, event_id: &str, market: MarketKind, point: Decimal) -> Decimal {
        let mut lines = self.lines.write().expect("line store lock poisoned");
        *lines
            .entry((event_id.to_string(), market))
            .or_insert(point)
    }
}
