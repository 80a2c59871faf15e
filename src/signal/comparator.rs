//! Market comparator
//!
//! Pure fair-vs-market arithmetic. Classification of what an edge *means*
//! belongs to the classifier; this module only measures distance and sign.

use super::{MarketKind, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fair value vs quoted line for a single market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketEdge {
    /// Model's fair point for the market
    pub fair: Decimal,
    /// Quoted market point
    pub market: Decimal,
    /// Signed difference, fair minus market
    pub diff: Decimal,
    /// Absolute edge
    pub edge: Decimal,
}

impl MarketEdge {
    /// Compare a fair value against a quoted line
    pub fn new(fair: Decimal, market: Decimal) -> Self {
        let diff = fair - market;
        Self {
            fair,
            market,
            diff,
            edge: diff.abs(),
        }
    }

    /// Which side the model favors, from the sign of the difference
    ///
    /// Spread points are home-relative and signed (negative favors home),
    /// so a fair spread below the market spread means the model rates the
    /// home team stronger than the market does. A zero difference favors
    /// no side.
    pub fn favored_side(&self, kind: MarketKind) -> Option<Side> {
        if self.diff.is_zero() {
            return None;
        }
        let side = match kind {
            MarketKind::Spread => {
                if self.diff < Decimal::ZERO {
                    Side::Home
                } else {
                    Side::Away
                }
            }
            MarketKind::Total => {
                if self.diff > Decimal::ZERO {
                    Side::Over
                } else {
                    Side::Under
                }
            }
        };
        Some(side)
    }
}

/// Edge assessment for both markets of one event
///
/// Either market may be absent when its quote was malformed; the other is
/// still assessed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeAssessment {
    pub spread: Option<MarketEdge>,
    pub total: Option<MarketEdge>,
}
