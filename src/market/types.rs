//! Market line input types

use crate::signal::Side;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One market's quoted point and price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Quoted point (spread is home-relative and signed, negative favors home)
    pub point: Decimal,
    /// Quoted price in American odds
    pub price: Decimal,
}

/// Side the public is leaning on, supplied by an upstream collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicBias {
    Home,
    Away,
}

/// Current market line for one event, supplied fresh per run
///
/// Either quote may be missing when the upstream payload was malformed;
/// the engine then skips that market and still evaluates the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketLine {
    /// Event identifier
    pub event_id: String,
    /// Home team identifier
    pub home: String,
    /// Away team identifier
    pub away: String,
    /// Spread quote, if present in the payload
    pub spread: Option<Quote>,
    /// Total quote, if present in the payload
    pub total: Option<Quote>,
    /// When the line was observed by the collaborator
    pub observed_at: DateTime<Utc>,
}

impl MarketLine {
    /// The market's laying side implied by the spread sign
    ///
    /// Negative home-relative spread means the home team lays points.
    /// Pick'em lines have no favorite.
    pub fn market_favorite(&self) -> Option<Side> {
        let quote = self.spread?;
        if quote.point < Decimal::ZERO {
            Some(Side::Home)
        } else if quote.point > Decimal::ZERO {
            Some(Side::Away)
        } else {
            None
        }
    }
}

/// Raw per-game record as supplied by the odds collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub event_id: String,
    pub home: String,
    pub away: String,
    pub spread_point: Option<Decimal>,
    #[serde(default)]
    pub spread_price: Option<Decimal>,
    pub total_point: Option<Decimal>,
    #[serde(default)]
    pub total_price: Option<Decimal>,
    pub observed_at: DateTime<Utc>,
    /// Opening spread, when the collaborator knows it
    #[serde(default)]
    pub open_spread: Option<Decimal>,
    /// Opening total, when the collaborator knows it
    #[serde(default)]
    pub open_total: Option<Decimal>,
    /// Where the public money is leaning, when known
    #[serde(default)]
    pub public_bias: Option<PublicBias>,
}

impl GameRecord {
    /// Standard vig when the payload omits a price
    fn default_price() -> Decimal {
        Decimal::new(-110, 0)
    }

    /// Assemble the market line; absent points leave that market unquoted
    pub fn line(&self) -> MarketLine {
        let spread = self.spread_point.map(|point| Quote {
            point,
            price: self.spread_price.unwrap_or_else(Self::default_price),
        });
        let total = self.total_point.map(|point| Quote {
            point,
            price: self.total_price.unwrap_or_else(Self::default_price),
        });
        MarketLine {
            event_id: self.event_id.clone(),
            home: self.home.clone(),
            away: self.away.clone(),
            spread,
            total,
            observed_at: self.observed_at,
        }
    }
}
