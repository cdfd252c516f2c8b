#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use grassroots_league::models::{
    Booking, CardKind, Club, Fixture, Goal, MatchResult, Player, Position,
};
use grassroots_league::store::{LeagueDataset, LeagueStore};

pub fn club(name: &str) -> Club {
    Club::new(name)
}

pub fn player(club: &Club, first_name: &str, last_name: &str) -> Player {
    Player {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        position: Position::Forward,
        club_id: club.id,
    }
}

/// A fixture `day` days after the season opener.
pub fn fixture_on_day(home: &Club, away: &Club, day: i64) -> Fixture {
    Fixture {
        id: Uuid::new_v4(),
        home_club: home.id,
        away_club: away.id,
        date: Utc.with_ymd_and_hms(2025, 3, 1, 14, 0, 0).unwrap() + Duration::days(day),
        venue: "Village Green".to_string(),
    }
}

pub fn result(fixture: &Fixture, home_goals: i32, away_goals: i32) -> MatchResult {
    MatchResult {
        id: Uuid::new_v4(),
        fixture_id: fixture.id,
        home_goals,
        away_goals,
        man_of_match: None,
    }
}

/// Fixture plus result in one step.
pub fn played(home: &Club, away: &Club, day: i64, home_goals: i32, away_goals: i32) -> (Fixture, MatchResult) {
    let fixture = fixture_on_day(home, away, day);
    let result = result(&fixture, home_goals, away_goals);
    (fixture, result)
}

pub fn goal(result: &MatchResult, scorer: &Player, minute: i32) -> Goal {
    Goal {
        id: Uuid::new_v4(),
        result_id: result.id,
        scorer: scorer.id,
        assist: None,
        minute,
        own_goal: false,
        penalty: false,
    }
}

pub fn booking(result: &MatchResult, player: &Player, card: CardKind, minute: i32) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        result_id: result.id,
        player_id: player.id,
        card,
        minute,
    }
}

pub fn store_from(
    clubs: Vec<Club>,
    players: Vec<Player>,
    fixtures: Vec<Fixture>,
    results: Vec<MatchResult>,
    goals: Vec<Goal>,
    bookings: Vec<Booking>,
) -> LeagueStore {
    LeagueStore::from_dataset(LeagueDataset {
        clubs,
        players,
        fixtures,
        results,
        goals,
        bookings,
    })
    .expect("test dataset should be valid")
}
