use serde::{Deserialize, Serialize};

use crate::error::LeagueError;
use crate::models::{Booking, Club, Fixture, Goal, MatchResult, Player};

/// A full season snapshot as exported by the persistence layer. This is the
/// shape the binary reads from disk and the input to `LeagueStore`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LeagueDataset {
    #[serde(default)]
    pub clubs: Vec<Club>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub results: Vec<MatchResult>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl LeagueDataset {
    pub fn from_json(raw: &str) -> Result<Self, LeagueError> {
        Ok(serde_json::from_str(raw)?)
    }
}
