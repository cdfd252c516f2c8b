pub mod dataset;
pub mod memory;

pub use dataset::LeagueDataset;
pub use memory::{ClubCard, LeagueStore, ResolvedResult};
