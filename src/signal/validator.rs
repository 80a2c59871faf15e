//! Cross-market consistency validator
//!
//! Cross-checks the spread recommendation against the favorite implied by
//! the raw score projection. Backing the market's laying side asserts the
//! favorite wins by more than the handicap, which requires winning at all;
//! if the score projection has that team losing outright, the two
//! independently derived views cannot both be right and the recommendation
//! is vetoed. Backing the receiving side never conflicts: an underdog can
//! lose the game and still cover.

use super::Side;
use serde::{Deserialize, Serialize};

/// Reason code attached to a detected conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictReason {
    /// Spread backs the favorite to cover while the score projection has
    /// the favorite losing outright
    FavoriteProjectedToLose,
}

/// Outcome of the consistency check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    pub conflict: bool,
    pub reason: Option<ConflictReason>,
}

impl ConsistencyResult {
    pub fn clean() -> Self {
        Self {
            conflict: false,
            reason: None,
        }
    }

    fn conflicted(reason: ConflictReason) -> Self {
        Self {
            conflict: true,
            reason: Some(reason),
        }
    }
}

/// Validate a spread recommendation against the raw score projection
///
/// `market_favorite` is the laying side implied by the spread sign (None on
/// a pick'em line), `projected_winner` the side with the higher projected
/// score (None when the projection ties).
pub fn check(
    recommended: Side,
    market_favorite: Option<Side>,
    projected_winner: Option<Side>,
) -> ConsistencyResult {
    let laying_side = match market_favorite {
        // Pick'em: nobody lays points, nothing to veto
        None => return ConsistencyResult::clean(),
        Some(side) => side,
    };

    if recommended != laying_side {
        // Underdog recommendations are never vetoed by a losing projection
        return ConsistencyResult::clean();
    }

    match projected_winner {
        Some(winner) if winner != recommended => {
            ConsistencyResult::conflicted(ConflictReason::FavoriteProjectedToLose)
        }
        // Projected win or dead-even projection: consistent
        _ => ConsistencyResult::clean(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_projected_to_lose_conflicts() {
        let result = check(Side::Home, Some(Side::Home), Some(Side::Away));
        assert!(result.conflict);
        assert_eq!(result.reason, Some(ConflictReason::FavoriteProjectedToLose));
    }

    #[test]
    fn test_favorite_projected_to_win_is_clean() {
        let result = check(Side::Home, Some(Side::Home), Some(Side::Home));
        assert!(!result.conflict);
        assert!(result.reason.is_none());
    }

    #[test]
    fn test_underdog_recommendation_never_conflicts() {
        // Backing the dog to cover is fine even when the dog is projected
        // to lose the game
        let result = check(Side::Away, Some(Side::Home), Some(Side::Home));
        assert!(!result.conflict);
    }

    #[test]
    fn test_pickem_has_no_laying_side() {
        let result = check(Side::Home, None, Some(Side::Away));
        assert!(!result.conflict);
    }

    #[test]
    fn test_tied_projection_is_clean() {
        let result = check(Side::Home, Some(Side::Home), None);
        assert!(!result.conflict);
    }
}
