//! JSON slate fixtures
//!
//! A single document carrying the full collaborator input for one slate:
//! team profiles plus per-game market records. Used by the CLI and tests
//! in place of live providers.

use super::{OddsProvider, StatsProvider};
use crate::market::GameRecord;
use crate::model::TeamProfile;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One slate's worth of collaborator data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlateFixture {
    /// Slate date
    pub date: NaiveDate,
    /// Efficiency profiles for every team the stats provider knows
    pub teams: Vec<TeamProfile>,
    /// The day's market records
    pub games: Vec<GameRecord>,
}

/// Fixture-backed implementation of both provider traits
pub struct FixtureProvider {
    games: Vec<GameRecord>,
    profiles: HashMap<String, TeamProfile>,
}

impl FixtureProvider {
    /// Load a slate fixture from a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let fixture: SlateFixture = serde_json::from_str(&content)?;
        Ok(Self::from_fixture(fixture))
    }

    pub fn from_fixture(fixture: SlateFixture) -> Self {
        let profiles = fixture
            .teams
            .into_iter()
            .map(|profile| (profile.id.clone(), profile))
            .collect();
        Self {
            games: fixture.games,
            profiles,
        }
    }
}

#[async_trait]
impl StatsProvider for FixtureProvider {
    async fn team_profile(&self, team_id: &str) -> anyhow::Result<Option<TeamProfile>> {
        Ok(self.profiles.get(team_id).cloned())
    }
}

#[async_trait]
impl OddsProvider for FixtureProvider {
    async fn games(&self) -> anyhow::Result<Vec<GameRecord>> {
        Ok(self.games.clone())
    }
}
