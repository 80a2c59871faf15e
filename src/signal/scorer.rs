//! Confidence scorers
//!
//! Two interchangeable strategies: a linear map from edge magnitude, and a
//! cover-probability model that treats the final score margin as normally
//! distributed around the fair spread. The probability strategy refuses to
//! recommend a side whose cover probability does not strictly clear the
//! configured threshold, which suppresses numerically-close but
//! statistically insignificant edges.

use super::{MarketEdge, MarketKind};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Scorer output for one market edge
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEdge {
    /// Confidence, 0 to 100
    pub confidence: u8,
    /// False when the scorer declines to back a side at this edge
    pub decisive: bool,
    /// Modeled probability of covering, when the strategy computes one
    pub cover_probability: Option<Decimal>,
}

/// Strategy interface for mapping an edge into a bounded confidence
pub trait ConfidenceScorer: Send + Sync {
    /// Score one market's edge; `pace` is the projection's expected pace
    fn score(&self, kind: MarketKind, edge: &MarketEdge, pace: Decimal) -> ScoredEdge;
}

/// Parameters for the edge-linear map, tuned per market
#[derive(Debug, Clone, Deserialize)]
pub struct LinearParams {
    /// Confidence at the bottom of the actionable band
    pub base_confidence: Decimal,
    /// Confidence points added per point of edge
    pub confidence_slope: Decimal,
}

/// `confidence = base + slope * edge`, clamped to [0, 100]
#[derive(Debug, Clone)]
pub struct EdgeLinearScorer {
    pub spread: LinearParams,
    pub total: LinearParams,
}

impl ConfidenceScorer for EdgeLinearScorer {
    fn score(&self, kind: MarketKind, edge: &MarketEdge, _pace: Decimal) -> ScoredEdge {
        let params = match kind {
            MarketKind::Spread => &self.spread,
            MarketKind::Total => &self.total,
        };
        let raw = params.base_confidence + params.confidence_slope * edge.edge;
        ScoredEdge {
            confidence: clamp_confidence(raw),
            decisive: true,
            cover_probability: None,
        }
    }
}

/// Normal-approximation cover probability scorer for the spread market
///
/// Margin ~ N(fair_spread, sigma^2) with sigma scaled by expected pace.
/// The total market has no margin model here and falls back to the linear
/// map.
#[derive(Debug, Clone)]
pub struct CoverProbabilityScorer {
    /// Margin standard deviation at pace 100
    pub std_dev: Decimal,
    /// Minimum cover probability required to back a side (strict)
    pub probability_threshold: Decimal,
    /// Linear parameters used for the total market
    pub fallback: EdgeLinearScorer,
}

impl ConfidenceScorer for CoverProbabilityScorer {
    fn score(&self, kind: MarketKind, edge: &MarketEdge, pace: Decimal) -> ScoredEdge {
        if kind == MarketKind::Total {
            return self.fallback.score(kind, edge, pace);
        }

        let sigma_dec = self.std_dev * pace / dec!(100);
        let sigma: f64 = sigma_dec.try_into().unwrap_or(0.0);
        if sigma <= 0.0 {
            return ScoredEdge {
                confidence: 0,
                decisive: false,
                cover_probability: None,
            };
        }

        let distance: f64 = edge.edge.try_into().unwrap_or(0.0);
        // The CDF math runs in f64; the decision compares in Decimal so
        // that exactly-at-threshold is representable and deterministic
        let cover_prob = Decimal::try_from(normal_cdf(distance / sigma))
            .unwrap_or(dec!(0.5))
            .round_dp(4);
        let threshold = self.probability_threshold;

        // Strict inequality: exactly-at-threshold is a watch, not a side
        if cover_prob <= threshold {
            return ScoredEdge {
                confidence: 0,
                decisive: false,
                cover_probability: Some(cover_prob),
            };
        }

        let rescaled = (cover_prob - threshold) / (Decimal::ONE - threshold) * dec!(100);
        ScoredEdge {
            confidence: clamp_confidence(rescaled),
            decisive: true,
            cover_probability: Some(cover_prob),
        }
    }
}

fn clamp_confidence(raw: Decimal) -> u8 {
    raw.round()
        .clamp(Decimal::ZERO, dec!(100))
        .to_u8()
        .unwrap_or(0)
}

/// Standard normal CDF approximation (Abramowitz and Stegun)
fn normal_cdf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs() / std::f64::consts::SQRT_2;

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    0.5 * (1.0 + sign * y)
}
