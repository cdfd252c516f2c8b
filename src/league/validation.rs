use std::collections::HashMap;

use uuid::Uuid;

use crate::error::LeagueError;
use crate::models::{Club, Fixture};

/// Centralized validation for data entering the season snapshot. The
/// standings engine itself assumes these invariants already hold.
pub struct LeagueValidator;

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_club_name(&self, name: &str) -> Result<(), LeagueError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(LeagueError::InvalidClubName(
                name.to_string(),
                "club name cannot be empty".into(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(LeagueError::InvalidClubName(
                name.to_string(),
                "club name too long (maximum 100 characters)".into(),
            ));
        }

        if trimmed.contains('\0') {
            return Err(LeagueError::InvalidClubName(
                name.to_string(),
                "club name contains invalid characters".into(),
            ));
        }

        Ok(())
    }

    pub fn validate_fixture(
        &self,
        fixture: &Fixture,
        clubs: &HashMap<Uuid, Club>,
    ) -> Result<(), LeagueError> {
        if fixture.home_club == fixture.away_club {
            return Err(LeagueError::FixtureAgainstSelf(fixture.id));
        }

        for club_id in fixture.clubs_involved() {
            if !clubs.contains_key(&club_id) {
                return Err(LeagueError::UnknownClub(club_id));
            }
        }

        Ok(())
    }

    pub fn validate_score_line(&self, home: i32, away: i32) -> Result<(), LeagueError> {
        if home < 0 || away < 0 {
            return Err(LeagueError::InvalidScore {
                home,
                away,
                reason: "goals cannot be negative".into(),
            });
        }

        if home > 99 || away > 99 {
            return Err(LeagueError::InvalidScore {
                home,
                away,
                reason: "score is implausibly high".into(),
            });
        }

        Ok(())
    }
}

impl Default for LeagueValidator {
    fn default() -> Self {
        Self::new()
    }
}
