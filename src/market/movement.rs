//! Line movement analysis
//!
//! Drift from the first observed line, classified as steady, defensive, or
//! reverse line movement when a public-bias hint is available. Movement is
//! display-side context for a signal and never gates the engine's
//! classification.

use super::PublicBias;
use crate::signal::MarketKind;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// How the line has moved since it opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementTag {
    /// Little or no movement
    Steady,
    /// Large move with the money: the book defending a side
    Defensive,
    /// Line moved against the side holding the public money
    ReverseLineMovement,
}

/// Movement context for one market of one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineMovement {
    pub market: MarketKind,
    /// First observed point
    pub opening: Decimal,
    /// Current point
    pub current: Decimal,
    /// Current minus opening
    pub drift: Decimal,
    pub tag: MovementTag,
    /// Spread resting on a key victory margin (3, 7 or 10)
    pub key_number: bool,
}

/// Spread margins where games disproportionately land
const KEY_NUMBERS: [Decimal; 3] = [dec!(3), dec!(7), dec!(10)];

/// Classify the drift between the opening and current points
///
/// Reverse line movement needs a public-bias hint: the line drifting toward
/// the away side (`drift > 0`) while the public is on home, or the reverse.
/// Without a hint a large move is read as the book defending.
pub fn assess(
    market: MarketKind,
    opening: Decimal,
    current: Decimal,
    public_bias: Option<PublicBias>,
    defensive_move: Decimal,
) -> LineMovement {
    let drift = current - opening;

    let reverse = match (market, public_bias) {
        (MarketKind::Spread, Some(PublicBias::Home)) => drift > Decimal::ZERO,
        (MarketKind::Spread, Some(PublicBias::Away)) => drift < Decimal::ZERO,
        _ => false,
    };

    let tag = if reverse {
        MovementTag::ReverseLineMovement
    } else if drift.abs() >= defensive_move {
        MovementTag::Defensive
    } else {
        MovementTag::Steady
    };

    let key_number =
        market == MarketKind::Spread && KEY_NUMBERS.contains(&current.abs().normalize());

    LineMovement {
        market,
        opening,
        current,
        drift,
        tag,
        key_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_line_movement_against_home_money() {
        // Public on home, line drifting toward away
        let movement = assess(
            MarketKind::Spread,
            dec!(-4.5),
            dec!(-3.0),
            Some(PublicBias::Home),
            dec!(2.0),
        );
        assert_eq!(movement.tag, MovementTag::ReverseLineMovement);
        assert_eq!(movement.drift, dec!(1.5));
        assert!(movement.key_number);
    }

    #[test]
    fn test_reverse_line_movement_against_away_money() {
        let movement = assess(
            MarketKind::Spread,
            dec!(2.5),
            dec!(1.5),
            Some(PublicBias::Away),
            dec!(2.0),
        );
        assert_eq!(movement.tag, MovementTag::ReverseLineMovement);
    }

    #[test]
    fn test_large_move_with_money_is_defensive() {
        // Public on home and the line moving further onto home
        let movement = assess(
            MarketKind::Spread,
            dec!(-8.0),
            dec!(-10.0),
            Some(PublicBias::Home),
            dec!(2.0),
        );
        assert_eq!(movement.tag, MovementTag::Defensive);
        assert!(movement.key_number);
    }

    #[test]
    fn test_small_move_is_steady() {
        let movement = assess(MarketKind::Spread, dec!(-3.0), dec!(-3.5), None, dec!(2.0));
        assert_eq!(movement.tag, MovementTag::Steady);
        assert!(!movement.key_number);
    }

    #[test]
    fn test_totals_never_flag_key_numbers_or_rlm() {
        let movement = assess(
            MarketKind::Total,
            dec!(220),
            dec!(227),
            Some(PublicBias::Home),
            dec!(2.0),
        );
        assert_eq!(movement.tag, MovementTag::Defensive);
        assert!(!movement.key_number);
    }
}
