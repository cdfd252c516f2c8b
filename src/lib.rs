pub mod config;
pub mod error;
pub mod league;
pub mod models;
pub mod store;
pub mod telemetry;

pub use error::LeagueError;
