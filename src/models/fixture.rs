// src/models/fixture.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled match between two clubs. A fixture without an associated
/// `MatchResult` has not been played yet.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Fixture {
    pub id: Uuid,
    pub home_club: Uuid,
    pub away_club: Uuid,
    pub date: DateTime<Utc>,
    pub venue: String,
}

impl Fixture {
    pub fn involves(&self, club_id: Uuid) -> bool {
        self.home_club == club_id || self.away_club == club_id
    }

    pub fn clubs_involved(&self) -> [Uuid; 2] {
        [self.home_club, self.away_club]
    }
}
