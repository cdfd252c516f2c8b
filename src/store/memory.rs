use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::LeagueError;
use crate::league::validation::LeagueValidator;
use crate::models::{Booking, CardKind, Club, Fixture, Goal, MatchResult, Player};
use crate::store::dataset::LeagueDataset;

/// A completed result with its fixture's two clubs already resolved.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedResult {
    pub result_id: Uuid,
    pub fixture_id: Uuid,
    pub home_club: Uuid,
    pub away_club: Uuid,
    pub home_goals: i32,
    pub away_goals: i32,
    pub date: DateTime<Utc>,
}

impl ResolvedResult {
    pub fn involves(&self, club_id: Uuid) -> bool {
        self.home_club == club_id || self.away_club == club_id
    }

    /// Goals the given club scored in this match. Zero for non-participants.
    pub fn goals_for(&self, club_id: Uuid) -> i32 {
        if club_id == self.home_club {
            self.home_goals
        } else if club_id == self.away_club {
            self.away_goals
        } else {
            0
        }
    }

    pub fn goals_against(&self, club_id: Uuid) -> i32 {
        if club_id == self.home_club {
            self.away_goals
        } else if club_id == self.away_club {
            self.home_goals
        } else {
            0
        }
    }
}

/// A booking resolved to the booked player's club.
#[derive(Debug, Clone, Copy)]
pub struct ClubCard {
    pub club_id: Uuid,
    pub card: CardKind,
}

/// Validated, read-only, in-memory season snapshot. Stands in for the
/// persistence layer and answers the handful of queries the standings
/// engine needs. Construction checks the referential invariants the
/// engine assumes; every accessor after that is cheap.
#[derive(Debug, Clone)]
pub struct LeagueStore {
    clubs: HashMap<Uuid, Club>,
    players: HashMap<Uuid, Player>,
    fixtures: HashMap<Uuid, Fixture>,
    results: HashMap<Uuid, MatchResult>,
    goals: Vec<Goal>,
    bookings: Vec<Booking>,
    resolved: Vec<ResolvedResult>,
    club_cards: Vec<ClubCard>,
    fixture_count: usize,
}

impl LeagueStore {
    pub fn from_dataset(dataset: LeagueDataset) -> Result<Self, LeagueError> {
        let validator = LeagueValidator::new();

        let mut clubs = HashMap::new();
        for club in dataset.clubs {
            validator.validate_club_name(&club.name)?;
            if clubs.values().any(|c: &Club| c.name == club.name) {
                return Err(LeagueError::DuplicateClubName(club.name));
            }
            clubs.insert(club.id, club);
        }

        let mut players = HashMap::new();
        for player in dataset.players {
            if !clubs.contains_key(&player.club_id) {
                return Err(LeagueError::UnknownClub(player.club_id));
            }
            players.insert(player.id, player);
        }

        let mut fixtures = HashMap::new();
        for fixture in dataset.fixtures {
            validator.validate_fixture(&fixture, &clubs)?;
            fixtures.insert(fixture.id, fixture);
        }

        let mut results = HashMap::new();
        let mut resolved = Vec::with_capacity(dataset.results.len());
        for result in dataset.results {
            let fixture = fixtures
                .get(&result.fixture_id)
                .ok_or(LeagueError::UnknownFixture(result.fixture_id))?;
            if resolved
                .iter()
                .any(|r: &ResolvedResult| r.fixture_id == result.fixture_id)
            {
                return Err(LeagueError::DuplicateResult(result.fixture_id));
            }
            validator.validate_score_line(result.home_goals, result.away_goals)?;
            resolved.push(ResolvedResult {
                result_id: result.id,
                fixture_id: fixture.id,
                home_club: fixture.home_club,
                away_club: fixture.away_club,
                home_goals: result.home_goals,
                away_goals: result.away_goals,
                date: fixture.date,
            });
            results.insert(result.id, result);
        }

        for goal in &dataset.goals {
            if !results.contains_key(&goal.result_id) {
                return Err(LeagueError::UnknownResult(goal.result_id));
            }
            if !players.contains_key(&goal.scorer) {
                return Err(LeagueError::UnknownPlayer(goal.scorer));
            }
            if let Some(assist) = goal.assist {
                if !players.contains_key(&assist) {
                    return Err(LeagueError::UnknownPlayer(assist));
                }
            }
        }

        let mut club_cards = Vec::with_capacity(dataset.bookings.len());
        for booking in &dataset.bookings {
            if !results.contains_key(&booking.result_id) {
                return Err(LeagueError::UnknownResult(booking.result_id));
            }
            let player = players
                .get(&booking.player_id)
                .ok_or(LeagueError::UnknownPlayer(booking.player_id))?;
            club_cards.push(ClubCard {
                club_id: player.club_id,
                card: booking.card,
            });
        }

        let fixture_count = fixtures.len();
        Ok(Self {
            clubs,
            players,
            fixtures,
            results,
            goals: dataset.goals,
            bookings: dataset.bookings,
            resolved,
            club_cards,
            fixture_count,
        })
    }

    /// Every recorded result, both clubs resolved via the fixture.
    pub fn completed_results(&self) -> &[ResolvedResult] {
        &self.resolved
    }

    /// Every booking resolved to the booked player's club.
    pub fn club_cards(&self) -> &[ClubCard] {
        &self.club_cards
    }

    /// A club's completed matches, most recently dated first, capped at
    /// `limit`.
    pub fn results_for_club(&self, club_id: Uuid, limit: usize) -> Vec<ResolvedResult> {
        let mut matches: Vec<ResolvedResult> = self
            .resolved
            .iter()
            .filter(|r| r.involves(club_id))
            .copied()
            .collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches.truncate(limit);
        matches
    }

    /// Results where the two clubs met, in either fixture slot.
    pub fn meetings_between(&self, a: Uuid, b: Uuid) -> Vec<ResolvedResult> {
        self.resolved
            .iter()
            .filter(|r| r.involves(a) && r.involves(b))
            .copied()
            .collect()
    }

    pub fn club(&self, id: Uuid) -> Result<&Club, LeagueError> {
        self.clubs.get(&id).ok_or(LeagueError::UnknownClub(id))
    }

    pub fn player(&self, id: Uuid) -> Result<&Player, LeagueError> {
        self.players.get(&id).ok_or(LeagueError::UnknownPlayer(id))
    }

    pub fn fixture(&self, id: Uuid) -> Result<&Fixture, LeagueError> {
        self.fixtures
            .get(&id)
            .ok_or(LeagueError::UnknownFixture(id))
    }

    pub fn result(&self, id: Uuid) -> Result<&MatchResult, LeagueError> {
        self.results.get(&id).ok_or(LeagueError::UnknownResult(id))
    }

    pub fn clubs(&self) -> impl Iterator<Item = &Club> {
        self.clubs.values()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Goals in one match, ordered by minute.
    pub fn goals_for_result(&self, result_id: Uuid) -> Vec<&Goal> {
        let mut goals: Vec<&Goal> = self
            .goals
            .iter()
            .filter(|g| g.result_id == result_id)
            .collect();
        goals.sort_by_key(|g| g.minute);
        goals
    }

    /// Bookings in one match, ordered by minute.
    pub fn bookings_for_result(&self, result_id: Uuid) -> Vec<&Booking> {
        let mut bookings: Vec<&Booking> = self
            .bookings
            .iter()
            .filter(|b| b.result_id == result_id)
            .collect();
        bookings.sort_by_key(|b| b.minute);
        bookings
    }

    pub fn fixture_count(&self) -> usize {
        self.fixture_count
    }

    pub fn result_count(&self) -> usize {
        self.resolved.len()
    }
}
