//! Fair value model module
//!
//! Projects a game's score line from two opposing team efficiency profiles.

mod ratings;

pub use ratings::RatingsModel;

use crate::signal::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Efficiency profile for one team, immutable per analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamProfile {
    /// Team identifier
    pub id: String,
    /// Points scored per 100 possessions
    pub offensive_rating: Decimal,
    /// Points allowed per 100 possessions
    pub defensive_rating: Decimal,
    /// Possessions per 48 minutes
    pub pace: Decimal,
    /// Offensive minus defensive rating
    pub net_rating: Decimal,
    /// Second night of a back-to-back
    #[serde(default)]
    pub back_to_back: bool,
}

/// Projected score line for one event, computed once and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairValueProjection {
    /// Projected home score
    pub home_score: Decimal,
    /// Projected away score
    pub away_score: Decimal,
    /// Projected spread, away minus home (negative favors home)
    pub spread: Decimal,
    /// Projected combined score
    pub total: Decimal,
    /// Expected pace used for the projection
    pub pace: Decimal,
}

impl FairValueProjection {
    /// The side with the higher projected score, None on a dead tie
    pub fn projected_winner(&self) -> Option<Side> {
        if self.home_score > self.away_score {
            Some(Side::Home)
        } else if self.away_score > self.home_score {
            Some(Side::Away)
        } else {
            None
        }
    }
}

/// Trait for fair value model implementations
pub trait FairValueModel: Send + Sync {
    /// Project the score line for home vs away
    fn project(&self, home: &TeamProfile, away: &TeamProfile) -> FairValueProjection;
}
