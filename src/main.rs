use clap::Parser;
use sharpline::cli::{Cli, Commands};
use sharpline::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Meaningless thresholds are fatal before any event is analyzed
    config.validate()?;

    // Initialize telemetry
    let _guard = sharpline::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Analyze(args) => {
            tracing::info!(slate = %args.slate.display(), "starting slate analysis");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Model: home_advantage={}, fatigue_penalty={}, pace_norm={}",
                config.model.home_advantage, config.model.fatigue_penalty, config.model.pace_norm
            );
            println!(
                "  Spread: actionable {}..={}",
                config.signal.spread.min_actionable_edge, config.signal.spread.trap_limit
            );
            println!(
                "  Total: actionable {}..={}",
                config.signal.total.min_actionable_edge, config.signal.total.trap_limit
            );
            println!(
                "  Scorer: {:?} (std_dev={}, threshold={})",
                config.scorer.mode, config.scorer.std_dev, config.scorer.probability_threshold
            );
        }
    }

    Ok(())
}
