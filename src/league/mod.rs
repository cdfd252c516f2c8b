pub mod form;
pub mod head_to_head;
pub mod league;
pub mod standings;
pub mod stats;
pub mod tiebreak;
pub mod validation;

pub use form::FormService;
pub use league::LeagueService;
pub use standings::StandingsService;
pub use stats::StatsService;
pub use validation::LeagueValidator;
