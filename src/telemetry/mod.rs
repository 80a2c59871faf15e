//! Telemetry module
//!
//! Metrics and logging

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use self::metrics::{record_event_analyzed, record_event_skipped, record_slate_size};

use crate::config::TelemetryConfig;

/// Guard that cleans up telemetry on drop
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format)?;

    if config.metrics_port != 0 {
        self::metrics::install_exporter(config.metrics_port)?;
    }

    Ok(TelemetryGuard { _priv: () })
}
