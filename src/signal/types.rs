//! Signal types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which market a signal refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKind {
    /// Point spread market
    Spread,
    /// Combined score (over/under) market
    Total,
}

impl MarketKind {
    /// Display ordering: spread decisions come before total decisions
    pub fn order(&self) -> u8 {
        match self {
            MarketKind::Spread => 0,
            MarketKind::Total => 1,
        }
    }
}

impl std::fmt::Display for MarketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketKind::Spread => write!(f, "spread"),
            MarketKind::Total => write!(f, "total"),
        }
    }
}

/// Recommendable side of a market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Back the home team against the spread
    Home,
    /// Back the away team against the spread
    Away,
    /// Back the over on the total
    Over,
    /// Back the under on the total
    Under,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
            Side::Over => write!(f, "over"),
            Side::Under => write!(f, "under"),
        }
    }
}

/// Terminal classification of a market's edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Edge below the actionable floor: nothing to exploit, watch only
    Balanced,
    /// Edge inside the actionable band: proceed with a recommendation
    Actionable,
    /// Edge beyond the trap limit: the line is too generous to trust
    SuspectedTrap,
    /// Spread recommendation contradicts the raw score projection
    Conflict,
}

/// A classified trading signal for one market of one event
///
/// Signals carry no identifiers or timestamps generated at analysis time:
/// running the engine twice on identical inputs must produce byte-identical
/// output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Event this signal belongs to
    pub event_id: String,
    /// Which market was evaluated
    pub market: MarketKind,
    /// Terminal classification
    pub classification: Classification,
    /// Confidence score, 0 to 100
    pub confidence: u8,
    /// Recommended side, or None for watch / no-bet
    pub recommended_side: Option<Side>,
    /// Human-readable justification for the outcome
    pub rationale: String,
    /// Model's fair value for this market
    pub fair_point: Decimal,
    /// Quoted market point
    pub market_point: Decimal,
    /// Absolute distance between fair and market
    pub edge: Decimal,
}

impl Signal {
    /// True when the signal carries a side worth betting
    pub fn is_bet(&self) -> bool {
        self.classification == Classification::Actionable && self.recommended_side.is_some()
    }
}
