//! Analyze command implementation

use crate::config::Config;
use crate::engine::{analyze_slate, Engine, EventContext, EventReport, SlateReport};
use crate::market::{InMemoryLineStore, LineStore, MovementTag};
use crate::providers::{FixtureProvider, OddsProvider, StatsProvider};
use crate::team::TeamDirectory;
use crate::telemetry;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the slate fixture JSON
    #[arg(short, long, default_value = "slate.json")]
    pub slate: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Per-game report cards, ranked by confidence
    Table,
    /// Ranked signals as JSON (the machine-readable output contract)
    Json,
}

impl AnalyzeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let engine = Arc::new(Engine::from_config(config)?);
        let provider = FixtureProvider::load(&self.slate)?;
        let directory = TeamDirectory::new(config.teams.names.clone());

        let games = provider.games().await?;
        telemetry::record_slate_size(games.len());
        tracing::info!(games = games.len(), "analyzing slate");

        let mut events = Vec::with_capacity(games.len());
        for record in games {
            let home_profile = provider.team_profile(&record.home).await?;
            let away_profile = provider.team_profile(&record.away).await?;
            events.push(EventContext {
                line: record.line(),
                home_profile,
                away_profile,
                public_bias: record.public_bias,
                open_spread: record.open_spread,
                open_total: record.open_total,
            });
        }

        let store: Arc<dyn LineStore> = Arc::new(InMemoryLineStore::new());
        let report = analyze_slate(engine, store, events).await;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report.ranked_signals())?);
            }
            OutputFormat::Table => print_report(&report, &directory),
        }
        Ok(())
    }
}

fn print_report(report: &SlateReport, directory: &TeamDirectory) {
    for event in &report.reports {
        print_event(event, directory);
    }

    if !report.skipped_events.is_empty() {
        println!("skipped events:");
        for (event_id, err) in &report.skipped_events {
            println!("  {event_id}: {err}");
        }
    }
}

fn print_event(event: &EventReport, directory: &TeamDirectory) {
    println!(
        "=== {} @ {} ({})",
        directory.display(&event.away),
        directory.display(&event.home),
        event.event_id
    );
    println!(
        "    fair: {} {} - {} {} (spread {}, total {})",
        event.home,
        event.fair_value.home_score.round_dp(1),
        event.away,
        event.fair_value.away_score.round_dp(1),
        event.fair_value.spread.round_dp(1),
        event.fair_value.total.round_dp(1),
    );
    for signal in &event.signals {
        let side = signal
            .recommended_side
            .map(|s| s.to_string())
            .unwrap_or_else(|| "no bet".to_string());
        println!(
            "    {}: {:?} {}% [{}] {}",
            signal.market, signal.classification, signal.confidence, side, signal.rationale
        );
    }
    for movement in &event.movement {
        let tag = match movement.tag {
            MovementTag::Steady => "steady",
            MovementTag::Defensive => "defensive move",
            MovementTag::ReverseLineMovement => "reverse line movement",
        };
        let key = if movement.key_number {
            ", resting on a key number"
        } else {
            ""
        };
        println!(
            "    {} line {} -> {} ({}{})",
            movement.market, movement.opening, movement.current, tag, key
        );
    }
    for note in &event.skipped_markets {
        println!("    skipped: {note}");
    }
    println!();
}
