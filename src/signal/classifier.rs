//! Trap/risk classifier
//!
//! Three-band state machine over the absolute edge. A small edge carries
//! nothing to exploit; a moderate edge is the detection target; an edge
//! beyond the trap limit more likely reflects information the model lacks
//! than a genuine mispricing, so it is a red flag rather than an
//! opportunity.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Per-market edge thresholds
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeBands {
    /// Minimum edge worth acting on
    pub min_actionable_edge: Decimal,
    /// Edge above this is treated as a bait line
    pub trap_limit: Decimal,
}

/// Terminal band for a classified edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeBand {
    /// `edge < min_actionable_edge`
    Balanced,
    /// `min_actionable_edge <= edge <= trap_limit` (both boundaries inclusive)
    Actionable,
    /// `edge > trap_limit`
    SuspectedTrap,
}

impl EdgeBands {
    /// Assign an edge to exactly one band
    pub fn classify(&self, edge: Decimal) -> EdgeBand {
        if edge < self.min_actionable_edge {
            EdgeBand::Balanced
        } else if edge <= self.trap_limit {
            EdgeBand::Actionable
        } else {
            EdgeBand::SuspectedTrap
        }
    }
}
