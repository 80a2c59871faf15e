//! Recommendation synthesizer
//!
//! Composes classifier, validator and scorer outcomes into the final
//! per-market Signal. Markets are synthesized in isolation: a total
//! recommendation is never gated by the spread market's conflict state, and
//! vice versa.

use super::classifier::{EdgeBand, EdgeBands};
use super::scorer::ConfidenceScorer;
use super::validator::ConsistencyResult;
use super::{Classification, MarketEdge, MarketKind, Signal};
use rust_decimal::Decimal;

/// Synthesize the final signal for a single market of one event
///
/// `consistency` is the spread-side veto and is None for the total market.
#[allow(clippy::too_many_arguments)]
pub fn synthesize(
    event_id: &str,
    kind: MarketKind,
    edge: &MarketEdge,
    bands: &EdgeBands,
    scorer: &dyn ConfidenceScorer,
    consistency: Option<&ConsistencyResult>,
    balanced_floor: u8,
    pace: Decimal,
) -> Signal {
    let base = |classification, confidence, side, rationale| Signal {
        event_id: event_id.to_string(),
        market: kind,
        classification,
        confidence,
        recommended_side: side,
        rationale,
        fair_point: edge.fair,
        market_point: edge.market,
        edge: edge.edge,
    };

    match bands.classify(edge.edge) {
        EdgeBand::Balanced => base(
            Classification::Balanced,
            balanced_floor,
            None,
            format!(
                "edge {} below actionable floor {}; market and model agree, watch only",
                edge.edge, bands.min_actionable_edge
            ),
        ),
        EdgeBand::SuspectedTrap => base(
            Classification::SuspectedTrap,
            0,
            None,
            format!(
                "edge {} beyond trap limit {}; a line this generous usually prices \
                 information the model lacks, no bet",
                edge.edge, bands.trap_limit
            ),
        ),
        EdgeBand::Actionable => {
            // Conflict veto overrides the actionable band
            if let Some(result) = consistency {
                if result.conflict {
                    return base(
                        Classification::Conflict,
                        0,
                        None,
                        "spread backs the favorite to cover but the score projection \
                         has them losing outright; no bet"
                            .to_string(),
                    );
                }
            }

            let side = edge.favored_side(kind);
            let scored = scorer.score(kind, edge, pace);
            if !scored.decisive || side.is_none() {
                // Statistically insignificant even though the point edge
                // cleared the floor
                let note = match scored.cover_probability {
                    Some(p) => format!(
                        "edge {} is inside the actionable band but cover probability {} \
                         does not clear the threshold; watch only",
                        edge.edge, p
                    ),
                    None => format!(
                        "edge {} is inside the actionable band but no side is favored; \
                         watch only",
                        edge.edge
                    ),
                };
                return base(Classification::Balanced, balanced_floor, None, note);
            }

            let side_name = side.map(|s| s.to_string()).unwrap_or_default();
            let rationale = match scored.cover_probability {
                Some(p) => format!(
                    "fair {} vs market {}: {} points of value on {} with cover probability {}",
                    edge.fair, edge.market, edge.edge, side_name, p
                ),
                None => format!(
                    "fair {} vs market {}: {} points of value on {}",
                    edge.fair, edge.market, edge.edge, side_name
                ),
            };
            base(Classification::Actionable, scored.confidence, side, rationale)
        }
    }
}
