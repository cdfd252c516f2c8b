use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced while assembling the in-memory season snapshot or
/// resolving references inside it. The standings computation itself is
/// infallible over a validated store.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("unknown club: {0}")]
    UnknownClub(Uuid),

    #[error("unknown player: {0}")]
    UnknownPlayer(Uuid),

    #[error("unknown fixture: {0}")]
    UnknownFixture(Uuid),

    #[error("unknown match result: {0}")]
    UnknownResult(Uuid),

    #[error("fixture {0} schedules a club against itself")]
    FixtureAgainstSelf(Uuid),

    #[error("fixture {0} already has a recorded result")]
    DuplicateResult(Uuid),

    #[error("invalid score line {home} - {away}: {reason}")]
    InvalidScore {
        home: i32,
        away: i32,
        reason: String,
    },

    #[error("club name {0:?} is invalid: {1}")]
    InvalidClubName(String, String),

    #[error("duplicate club name: {0}")]
    DuplicateClubName(String),

    #[error("failed to parse season dataset")]
    Dataset(#[from] serde_json::Error),
}
