//! Efficiency-ratings fair value model
//!
//! Score projection from offensive/defensive ratings:
//! home = ((adjHomeOff + awayDef)/2 + homeAdvantage) * pace/paceNorm
//! away = ((adjAwayOff + homeDef)/2) * pace/paceNorm
//! where pace is the pairwise average and offensive ratings are docked the
//! fatigue penalty on the second night of a back-to-back.

use super::{FairValueModel, FairValueProjection, TeamProfile};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Ratings-based fair value model
#[derive(Debug, Clone, Deserialize)]
pub struct RatingsModel {
    /// Points added to the home side's expected score
    pub home_advantage: Decimal,
    /// Offensive rating penalty on a back-to-back
    pub fatigue_penalty: Decimal,
    /// Pace at which ratings are quoted (possessions per 48)
    pub pace_norm: Decimal,
}

impl Default for RatingsModel {
    fn default() -> Self {
        Self {
            home_advantage: dec!(2.8),
            fatigue_penalty: dec!(1.5),
            pace_norm: dec!(100),
        }
    }
}

impl RatingsModel {
    fn adjusted_offense(&self, profile: &TeamProfile) -> Decimal {
        if profile.back_to_back {
            profile.offensive_rating - self.fatigue_penalty
        } else {
            profile.offensive_rating
        }
    }
}

impl FairValueModel for RatingsModel {
    fn project(&self, home: &TeamProfile, away: &TeamProfile) -> FairValueProjection {
        let pace = (home.pace + away.pace) / dec!(2);
        let tempo = pace / self.pace_norm;

        let home_off = self.adjusted_offense(home);
        let away_off = self.adjusted_offense(away);

        let home_score =
            ((home_off + away.defensive_rating) / dec!(2) + self.home_advantage) * tempo;
        let away_score = (away_off + home.defensive_rating) / dec!(2) * tempo;

        FairValueProjection {
            home_score,
            away_score,
            spread: away_score - home_score,
            total: home_score + away_score,
            pace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, off: Decimal, def: Decimal, pace: Decimal) -> TeamProfile {
        TeamProfile {
            id: id.to_string(),
            offensive_rating: off,
            defensive_rating: def,
            pace,
            net_rating: off - def,
            back_to_back: false,
        }
    }

    #[test]
    fn test_projection_has_consistent_derivations() {
        let model = RatingsModel::default();
        let home = profile("gsw", dec!(115), dec!(108), dec!(100));
        let away = profile("lal", dec!(112), dec!(110), dec!(98));

        let fv = model.project(&home, &away);
        assert_eq!(fv.spread, fv.away_score - fv.home_score);
        assert_eq!(fv.total, fv.home_score + fv.away_score);
        assert_eq!(fv.pace, dec!(99));
    }

    #[test]
    fn test_worked_projection() {
        // home: ((115 + 110)/2 + 2.8) * 0.99 = 114.147
        // away: ((112 + 108)/2) * 0.99 = 108.9
        let model = RatingsModel::default();
        let home = profile("gsw", dec!(115), dec!(108), dec!(100));
        let away = profile("lal", dec!(112), dec!(110), dec!(98));

        let fv = model.project(&home, &away);
        assert_eq!(fv.home_score, dec!(114.147));
        assert_eq!(fv.away_score, dec!(108.9));
        assert_eq!(fv.spread, dec!(-5.247));
        assert_eq!(fv.projected_winner(), Some(crate::signal::Side::Home));
    }

    #[test]
    fn test_fatigue_penalty_applies_to_flagged_team_only() {
        let model = RatingsModel::default();
        let home = profile("gsw", dec!(115), dec!(108), dec!(100));
        let mut tired_away = profile("lal", dec!(112), dec!(110), dec!(98));
        tired_away.back_to_back = true;

        let rested = model.project(&home, &profile("lal", dec!(112), dec!(110), dec!(98)));
        let tired = model.project(&home, &tired_away);

        assert_eq!(tired.home_score, rested.home_score);
        assert!(tired.away_score < rested.away_score);
        // 1.5 rating points halved and scaled by tempo 0.99
        assert_eq!(rested.away_score - tired.away_score, dec!(0.7425));
    }

    #[test]
    fn test_home_advantage_breaks_even_matchup() {
        let model = RatingsModel::default();
        let a = profile("a", dec!(112), dec!(110), dec!(100));
        let b = profile("b", dec!(112), dec!(110), dec!(100));

        let fv = model.project(&a, &b);
        assert_eq!(fv.home_score - fv.away_score, dec!(2.8));
        assert!(fv.spread < Decimal::ZERO);
    }
}
