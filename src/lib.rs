//! sharpline: market signal decision engine for basketball betting lines
//!
//! This library provides the core components for:
//! - Fair value projection from team efficiency profiles
//! - Edge computation against quoted spread and total lines
//! - Trap/risk classification of edges
//! - Cross-market consistency validation of spread recommendations
//! - Confidence scoring (edge-linear and cover-probability strategies)
//! - Recommendation synthesis with machine-checkable rationale
//! - Line movement context (drift, reverse line movement, key numbers)
//! - Slate-wide parallel analysis with isolate-and-skip error handling

pub mod cli;
pub mod config;
pub mod engine;
pub mod market;
pub mod model;
pub mod providers;
pub mod signal;
pub mod team;
pub mod telemetry;
