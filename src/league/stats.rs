use std::collections::HashMap;

use uuid::Uuid;

use crate::error::LeagueError;
use crate::models::{CardKind, ClubDiscipline, ClubStanding, ClubStatistics, TopScorer};
use crate::store::LeagueStore;

/// Per-match averages and win rate for one standing row. The denominator
/// is clamped to 1 so a club with zero matches reports zeros instead of
/// dividing by zero.
pub fn club_statistics(standing: &ClubStanding) -> ClubStatistics {
    let matches = standing.matches_played.max(1) as f64;
    ClubStatistics {
        avg_goals_per_match: round2(standing.goals_for as f64 / matches),
        avg_conceded_per_match: round2(standing.goals_against as f64 / matches),
        win_percentage: round1(standing.wins as f64 / matches * 100.0),
    }
}

/// Service for the league-wide leaderboards on the statistics page.
pub struct StatsService {
    store: LeagueStore,
}

impl StatsService {
    pub fn new(store: LeagueStore) -> Self {
        Self { store }
    }

    /// Goal counts per scorer, descending, name-ordered within ties.
    pub fn top_scorers(&self, limit: usize) -> Result<Vec<TopScorer>, LeagueError> {
        let mut counts: HashMap<Uuid, i32> = HashMap::new();
        for goal in self.store.goals() {
            *counts.entry(goal.scorer).or_insert(0) += 1;
        }

        let mut scorers = Vec::with_capacity(counts.len());
        for (player_id, goals) in counts {
            let player = self.store.player(player_id)?;
            let club = self.store.club(player.club_id)?;
            scorers.push(TopScorer {
                player_id,
                player_name: player.full_name(),
                club_name: club.name.clone(),
                goals,
            });
        }
        scorers.sort_by(|a, b| {
            b.goals
                .cmp(&a.goals)
                .then_with(|| a.player_name.cmp(&b.player_name))
        });
        scorers.truncate(limit);
        Ok(scorers)
    }

    /// Card counts per club, weighted total descending.
    pub fn most_carded(&self, limit: usize) -> Result<Vec<ClubDiscipline>, LeagueError> {
        let mut by_club: HashMap<Uuid, (i32, i32)> = HashMap::new();
        for card in self.store.club_cards() {
            let entry = by_club.entry(card.club_id).or_insert((0, 0));
            match card.card {
                CardKind::Yellow => entry.0 += 1,
                CardKind::Red => entry.1 += 1,
            }
        }

        let mut rows = Vec::with_capacity(by_club.len());
        for (club_id, (yellow, red)) in by_club {
            let club = self.store.club(club_id)?;
            rows.push(ClubDiscipline {
                club_id,
                club_name: club.name.clone(),
                yellow_cards: yellow,
                red_cards: red,
                total_cards: yellow + red * 3,
            });
        }
        rows.sort_by(|a, b| {
            b.total_cards
                .cmp(&a.total_cards)
                .then_with(|| a.club_name.cmp(&b.club_name))
        });
        rows.truncate(limit);
        Ok(rows)
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
