//! Signal decision core
//!
//! Edge measurement, trap/risk classification, cross-market consistency
//! validation, confidence scoring and final recommendation synthesis.

mod classifier;
mod comparator;
mod scorer;
mod synthesizer;
mod types;
pub mod validator;

pub use classifier::{EdgeBand, EdgeBands};
pub use comparator::{EdgeAssessment, MarketEdge};
pub use scorer::{
    ConfidenceScorer, CoverProbabilityScorer, EdgeLinearScorer, LinearParams, ScoredEdge,
};
pub use synthesizer::synthesize;
pub use types::{Classification, MarketKind, Side, Signal};
pub use validator::{ConflictReason, ConsistencyResult};
