//! Configuration types for sharpline

use crate::model::RatingsModel;
use crate::signal::{EdgeBands, LinearParams, MarketKind};
use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: RatingsModel,
    pub signal: SignalConfig,
    #[serde(default)]
    pub scorer: ScorerConfig,
    #[serde(default)]
    pub movement: MovementConfig,
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub teams: TeamsConfig,
}

/// Per-market edge thresholds and linear scoring parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    pub spread: MarketSignalConfig,
    pub total: MarketSignalConfig,
}

/// Thresholds and linear confidence tuning for one market
#[derive(Debug, Clone, Deserialize)]
pub struct MarketSignalConfig {
    /// Minimum edge worth acting on
    pub min_actionable_edge: Decimal,
    /// Edge above this is treated as a bait line
    pub trap_limit: Decimal,
    /// Linear confidence at the bottom of the actionable band
    #[serde(default = "default_base_confidence")]
    pub base_confidence: Decimal,
    /// Linear confidence points per point of edge
    #[serde(default = "default_confidence_slope")]
    pub confidence_slope: Decimal,
}

fn default_base_confidence() -> Decimal {
    dec!(50)
}
fn default_confidence_slope() -> Decimal {
    dec!(8)
}

impl MarketSignalConfig {
    pub fn bands(&self) -> EdgeBands {
        EdgeBands {
            min_actionable_edge: self.min_actionable_edge,
            trap_limit: self.trap_limit,
        }
    }

    pub fn linear(&self) -> LinearParams {
        LinearParams {
            base_confidence: self.base_confidence,
            confidence_slope: self.confidence_slope,
        }
    }
}

/// Confidence scoring strategy selection
#[derive(Debug, Clone, Deserialize)]
pub struct ScorerConfig {
    #[serde(default)]
    pub mode: ScorerMode,

    /// Score-margin standard deviation at pace 100
    #[serde(default = "default_std_dev")]
    pub std_dev: Decimal,

    /// Minimum cover probability to back a side (strict), in (0.5, 1.0)
    #[serde(default = "default_probability_threshold")]
    pub probability_threshold: Decimal,

    /// Confidence assigned to watch-only signals
    #[serde(default = "default_balanced_floor")]
    pub balanced_floor: u8,
}

/// Scoring strategy: edge-linear or cover-probability
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScorerMode {
    #[default]
    Linear,
    Probability,
}

fn default_std_dev() -> Decimal {
    dec!(11.5)
}
fn default_probability_threshold() -> Decimal {
    dec!(0.53)
}
fn default_balanced_floor() -> u8 {
    20
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            mode: ScorerMode::Linear,
            std_dev: dec!(11.5),
            probability_threshold: dec!(0.53),
            balanced_floor: 20,
        }
    }
}

/// Line movement analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MovementConfig {
    /// Absolute drift treated as the book defending a side
    #[serde(default = "default_defensive_move")]
    pub defensive_move: Decimal,
}

fn default_defensive_move() -> Decimal {
    dec!(2.0)
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            defensive_move: dec!(2.0),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Prometheus exporter port, 0 disables the exporter
    pub metrics_port: u16,
    pub log_level: String,
    /// Log output format: pretty or json
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Team display name directory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamsConfig {
    /// Team id to display name
    #[serde(default)]
    pub names: HashMap<String, String>,
}

/// Fatal configuration errors surfaced before any event is processed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{market} thresholds invalid: trap_limit {trap} must exceed min_actionable_edge {min}")]
    ThresholdOrdering {
        market: MarketKind,
        min: Decimal,
        trap: Decimal,
    },
    #[error("probability_threshold {0} must lie strictly between 0.5 and 1.0")]
    ProbabilityThresholdOutOfRange(Decimal),
    #[error("std_dev {0} must be positive")]
    NonPositiveStdDev(Decimal),
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Reject configurations that would produce meaningless thresholds
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (market, section) in [
            (MarketKind::Spread, &self.signal.spread),
            (MarketKind::Total, &self.signal.total),
        ] {
            if section.trap_limit <= section.min_actionable_edge {
                return Err(ConfigError::ThresholdOrdering {
                    market,
                    min: section.min_actionable_edge,
                    trap: section.trap_limit,
                });
            }
        }

        if self.scorer.mode == ScorerMode::Probability {
            let threshold = self.scorer.probability_threshold;
            if threshold <= dec!(0.5) || threshold >= dec!(1.0) {
                return Err(ConfigError::ProbabilityThresholdOutOfRange(threshold));
            }
            if self.scorer.std_dev <= Decimal::ZERO {
                return Err(ConfigError::NonPositiveStdDev(self.scorer.std_dev));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_TOML: &str = r#"
        [model]
        home_advantage = 2.8
        fatigue_penalty = 1.5
        pace_norm = 100

        [signal.spread]
        min_actionable_edge = 1.5
        trap_limit = 6.0
        base_confidence = 50
        confidence_slope = 8

        [signal.total]
        min_actionable_edge = 3.0
        trap_limit = 9.0
        base_confidence = 45
        confidence_slope = 4

        [scorer]
        mode = "linear"
        std_dev = 11.5
        probability_threshold = 0.53
        balanced_floor = 20

        [telemetry]
        metrics_port = 9094
        log_level = "info"
    "#;

    #[test]
    fn test_config_deserialize() {
        let config: Config = toml::from_str(BASE_TOML).unwrap();
        assert_eq!(config.model.home_advantage, dec!(2.8));
        assert_eq!(config.signal.spread.trap_limit, dec!(6.0));
        assert_eq!(config.scorer.mode, ScorerMode::Linear);
        assert_eq!(config.telemetry.metrics_port, 9094);
        config.validate().unwrap();
    }

    #[test]
    fn test_defaults_fill_optional_sections() {
        let toml = r#"
            [signal.spread]
            min_actionable_edge = 1.5
            trap_limit = 6.0

            [signal.total]
            min_actionable_edge = 3.0
            trap_limit = 9.0

            [telemetry]
            metrics_port = 0
            log_level = "debug"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.model.pace_norm, dec!(100));
        assert_eq!(config.scorer.balanced_floor, 20);
        assert_eq!(config.movement.defensive_move, dec!(2.0));
        assert!(config.teams.names.is_empty());
        config.validate().unwrap();
    }

    #[test]
    fn test_trap_below_floor_is_fatal() {
        let mut config: Config = toml::from_str(BASE_TOML).unwrap();
        config.signal.total.trap_limit = dec!(2.0);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ThresholdOrdering {
                market: MarketKind::Total,
                ..
            }
        ));
    }

    #[test]
    fn test_trap_equal_to_floor_is_fatal() {
        let mut config: Config = toml::from_str(BASE_TOML).unwrap();
        config.signal.spread.trap_limit = config.signal.spread.min_actionable_edge;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_probability_threshold_must_be_in_open_interval() {
        let mut config: Config = toml::from_str(BASE_TOML).unwrap();
        config.scorer.mode = ScorerMode::Probability;

        config.scorer.probability_threshold = dec!(0.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilityThresholdOutOfRange(_))
        ));

        config.scorer.probability_threshold = dec!(1.0);
        assert!(config.validate().is_err());

        config.scorer.probability_threshold = dec!(0.53);
        config.validate().unwrap();
    }

    #[test]
    fn test_linear_mode_skips_probability_checks() {
        let mut config: Config = toml::from_str(BASE_TOML).unwrap();
        config.scorer.probability_threshold = dec!(0.4);
        config.validate().unwrap();
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, BASE_TOML).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.signal.spread.min_actionable_edge, dec!(1.5));
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
        config.validate().unwrap();
    }

    #[test]
    fn test_bundled_example_config_is_valid() {
        // main falls back to this file when no config is present; it has
        // to parse and validate or the binary breaks out of the box
        let config: Config =
            toml::from_str(include_str!("../config.toml.example")).unwrap();
        config.validate().unwrap();
        assert_eq!(config.scorer.mode, ScorerMode::Linear);
        assert!(config.signal.spread.trap_limit > config.signal.spread.min_actionable_edge);
        assert!(!config.teams.names.is_empty());
    }

    #[test]
    fn test_log_format_parses_from_toml() {
        let toml = r#"
            [signal.spread]
            min_actionable_edge = 1.5
            trap_limit = 6.0

            [signal.total]
            min_actionable_edge = 3.0
            trap_limit = 9.0

            [telemetry]
            metrics_port = 0
            log_level = "info"
            log_format = "json"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
    }
}
