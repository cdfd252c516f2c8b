// src/models/table.rs
//
// Response DTOs consumed by presentation layers.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::booking::CardKind;
use crate::models::fixture::Fixture;
use crate::models::match_result::MatchResult;
use crate::models::standing::ClubStanding;

/// Per-match averages and win rate, rounded for display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClubStatistics {
    pub avg_goals_per_match: f64,
    pub avg_conceded_per_match: f64,
    pub win_percentage: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TableRow {
    pub standing: ClubStanding,
    pub club_name: String,
    pub recent_form: Vec<char>, // W, D, L, most recent first
    pub stats: ClubStatistics,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LeagueTableResponse {
    pub season_title: String,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TopScorer {
    pub player_id: Uuid,
    pub player_name: String,
    pub club_name: String,
    pub goals: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClubDiscipline {
    pub club_id: Uuid,
    pub club_name: String,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub total_cards: i32,
}

/// League-wide numbers for the statistics and home pages.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LeagueOverview {
    pub total_clubs: i32,
    pub total_matches: i32,
    pub total_goals: i32,
    pub avg_goals_per_match: f64,
    /// Completed results over scheduled fixtures, as a percentage.
    pub season_progress: f64,
    pub top_scorers: Vec<TopScorer>,
    pub most_carded: Vec<ClubDiscipline>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoalLine {
    pub minute: i32,
    pub scorer_name: String,
    pub club_name: String,
    pub assist_name: Option<String>,
    pub own_goal: bool,
    pub penalty: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingLine {
    pub minute: i32,
    pub player_name: String,
    pub club_name: String,
    pub card: CardKind,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerMatchLine {
    pub player_id: Uuid,
    pub player_name: String,
    pub goals: i32,
    pub cards: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamMatchStats {
    pub club_id: Uuid,
    pub club_name: String,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub players: Vec<PlayerMatchLine>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchDetailResponse {
    pub result: MatchResult,
    pub fixture: Fixture,
    pub goals: Vec<GoalLine>,
    pub bookings: Vec<BookingLine>,
    pub home: TeamMatchStats,
    pub away: TeamMatchStats,
}
