//! Collaborator interfaces
//!
//! Stats and odds retrieval are external concerns with a narrow data
//! contract. The engine only ever sees resolved profiles and lines; these
//! traits are the seam where real providers (or fixtures, in tests and the
//! CLI) plug in.

mod fixture;

pub use fixture::{FixtureProvider, SlateFixture};

use crate::market::GameRecord;
use crate::model::TeamProfile;
use async_trait::async_trait;

/// Source of team efficiency profiles
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Profile for a team, or None when the provider has no data for it
    async fn team_profile(&self, team_id: &str) -> anyhow::Result<Option<TeamProfile>>;
}

/// Source of the day's market lines
#[async_trait]
pub trait OddsProvider: Send + Sync {
    /// All game records on the slate
    async fn games(&self) -> anyhow::Result<Vec<GameRecord>>;
}
