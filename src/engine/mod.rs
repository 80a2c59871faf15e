//! Market signal decision engine
//!
//! Orchestrates the one-directional pipeline: profiles -> fair value ->
//! edge -> classification/validation -> score -> final signal. The engine
//! holds no mutable state; every event's run is independent and repeatable
//! given the same inputs.

mod error;
mod slate;

pub use error::AnalysisError;
pub use slate::{analyze_slate, SlateReport};

use crate::config::{Config, ConfigError, ScorerMode};
use crate::market::{assess, LineMovement, LineStore, MarketLine, PublicBias, Quote};
use crate::model::{FairValueModel, FairValueProjection, RatingsModel, TeamProfile};
use crate::signal::{
    synthesize, validator, ConfidenceScorer, ConsistencyResult, CoverProbabilityScorer,
    EdgeAssessment, EdgeBands, EdgeLinearScorer, MarketEdge, MarketKind, Signal,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All resolved inputs for one event
#[derive(Debug, Clone)]
pub struct EventContext {
    pub line: MarketLine,
    pub home_profile: Option<TeamProfile>,
    pub away_profile: Option<TeamProfile>,
    pub public_bias: Option<PublicBias>,
    /// Opening lines, when the collaborator knows them; otherwise the
    /// line store's first observation is the baseline
    pub open_spread: Option<Decimal>,
    pub open_total: Option<Decimal>,
}

/// Analysis output for one event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReport {
    pub event_id: String,
    pub home: String,
    pub away: String,
    pub fair_value: FairValueProjection,
    pub edges: EdgeAssessment,
    /// Spread signal first, then total, when both markets were quoted
    pub signals: Vec<Signal>,
    pub movement: Vec<LineMovement>,
    /// Markets skipped for this event, with the reason
    pub skipped_markets: Vec<String>,
}

/// The decision engine, parameterized entirely by configuration
pub struct Engine {
    model: RatingsModel,
    spread_bands: EdgeBands,
    total_bands: EdgeBands,
    scorer: Box<dyn ConfidenceScorer>,
    balanced_floor: u8,
    defensive_move: Decimal,
}

impl Engine {
    /// Build an engine from validated configuration
    ///
    /// Fails fast on meaningless thresholds; no event is ever analyzed
    /// under an invalid configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let linear = EdgeLinearScorer {
            spread: config.signal.spread.linear(),
            total: config.signal.total.linear(),
        };
        let scorer: Box<dyn ConfidenceScorer> = match config.scorer.mode {
            ScorerMode::Linear => Box::new(linear),
            ScorerMode::Probability => Box::new(CoverProbabilityScorer {
                std_dev: config.scorer.std_dev,
                probability_threshold: config.scorer.probability_threshold,
                fallback: linear,
            }),
        };

        Ok(Self {
            model: config.model.clone(),
            spread_bands: config.signal.spread.bands(),
            total_bands: config.signal.total.bands(),
            scorer,
            balanced_floor: config.scorer.balanced_floor,
            defensive_move: config.movement.defensive_move,
        })
    }

    /// Run the full pipeline for one event
    ///
    /// Fails only when a profile is missing; a malformed market skips that
    /// market and the other is still produced.
    pub fn analyze_event(
        &self,
        ctx: &EventContext,
        store: &dyn LineStore,
    ) -> Result<EventReport, AnalysisError> {
        let line = &ctx.line;
        let home = ctx
            .home_profile
            .as_ref()
            .ok_or_else(|| AnalysisError::MissingProfile {
                team: line.home.clone(),
            })?;
        let away = ctx
            .away_profile
            .as_ref()
            .ok_or_else(|| AnalysisError::MissingProfile {
                team: line.away.clone(),
            })?;

        let fair_value = self.model.project(home, away);

        let mut signals = Vec::new();
        let mut movement = Vec::new();
        let mut skipped_markets = Vec::new();
        let mut edges = EdgeAssessment {
            spread: None,
            total: None,
        };

        match line.spread {
            Some(quote) => {
                let edge = MarketEdge::new(fair_value.spread, quote.point);
                let consistency = self.spread_consistency(&edge, line, &fair_value);
                signals.push(synthesize(
                    &line.event_id,
                    MarketKind::Spread,
                    &edge,
                    &self.spread_bands,
                    self.scorer.as_ref(),
                    Some(&consistency),
                    self.balanced_floor,
                    fair_value.pace,
                ));
                movement.push(self.movement(line, MarketKind::Spread, quote, ctx, store));
                edges.spread = Some(edge);
            }
            None => {
                let err = AnalysisError::MalformedLine {
                    event_id: line.event_id.clone(),
                    market: MarketKind::Spread,
                };
                tracing::warn!(event_id = %line.event_id, "{err}");
                skipped_markets.push(err.to_string());
            }
        }

        match line.total {
            Some(quote) => {
                let edge = MarketEdge::new(fair_value.total, quote.point);
                // Totals are evaluated in isolation; the spread's conflict
                // state never gates them
                signals.push(synthesize(
                    &line.event_id,
                    MarketKind::Total,
                    &edge,
                    &self.total_bands,
                    self.scorer.as_ref(),
                    None,
                    self.balanced_floor,
                    fair_value.pace,
                ));
                movement.push(self.movement(line, MarketKind::Total, quote, ctx, store));
                edges.total = Some(edge);
            }
            None => {
                let err = AnalysisError::MalformedLine {
                    event_id: line.event_id.clone(),
                    market: MarketKind::Total,
                };
                tracing::warn!(event_id = %line.event_id, "{err}");
                skipped_markets.push(err.to_string());
            }
        }

        Ok(EventReport {
            event_id: line.event_id.clone(),
            home: line.home.clone(),
            away: line.away.clone(),
            fair_value,
            edges,
            signals,
            movement,
            skipped_markets,
        })
    }

    fn spread_consistency(
        &self,
        edge: &MarketEdge,
        line: &MarketLine,
        fair_value: &FairValueProjection,
    ) -> ConsistencyResult {
        match edge.favored_side(MarketKind::Spread) {
            Some(recommended) => validator::check(
                recommended,
                line.market_favorite(),
                fair_value.projected_winner(),
            ),
            None => ConsistencyResult::clean(),
        }
    }

    fn movement(
        &self,
        line: &MarketLine,
        market: MarketKind,
        quote: Quote,
        ctx: &EventContext,
        store: &dyn LineStore,
    ) -> LineMovement {
        // A collaborator-supplied opening line seeds the store; otherwise
        // the first observation becomes the baseline
        let known_open = match market {
            MarketKind::Spread => ctx.open_spread,
            MarketKind::Total => ctx.open_total,
        };
        if let Some(open) = known_open {
            store.record(&line.event_id, market, open);
        }
        let opening = store.record(&line.event_id, market, quote.point);
        assess(
            market,
            opening,
            quote.point,
            ctx.public_bias,
            self.defensive_move,
        )
    }
}
