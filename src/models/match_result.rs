// src/models/match_result.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::fixture::Fixture;

/// The recorded outcome of a played fixture, one-to-one with `Fixture`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchResult {
    pub id: Uuid,
    pub fixture_id: Uuid,
    pub home_goals: i32,
    pub away_goals: i32,
    #[serde(default)]
    pub man_of_match: Option<Uuid>,
}

impl MatchResult {
    pub fn is_draw(&self) -> bool {
        self.home_goals == self.away_goals
    }

    /// The winning club, or `None` for a draw.
    pub fn winner(&self, fixture: &Fixture) -> Option<Uuid> {
        if self.home_goals > self.away_goals {
            Some(fixture.home_club)
        } else if self.away_goals > self.home_goals {
            Some(fixture.away_club)
        } else {
            None
        }
    }
}
