pub mod booking;
pub mod club;
pub mod fixture;
pub mod goal;
pub mod match_result;
pub mod player;
pub mod standing;
pub mod table;

pub use booking::{Booking, CardKind};
pub use club::Club;
pub use fixture::Fixture;
pub use goal::Goal;
pub use match_result::MatchResult;
pub use player::{Player, Position};
pub use standing::ClubStanding;
pub use table::*;
