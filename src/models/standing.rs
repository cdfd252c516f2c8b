// src/models/standing.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A club's aggregated season record. Recomputed on demand from match and
/// booking data, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClubStanding {
    pub club_id: Uuid,
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub total_cards: i32,
    /// 1-based rank, assigned after tiebreak resolution. Zero until then.
    pub position: i32,
}

impl ClubStanding {
    pub fn new(club_id: Uuid) -> Self {
        Self {
            club_id,
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            yellow_cards: 0,
            red_cards: 0,
            total_cards: 0,
            position: 0,
        }
    }

    /// Sanity view: points as implied by the win/draw columns.
    pub fn calculate_points(&self) -> i32 {
        self.wins * 3 + self.draws
    }
}
