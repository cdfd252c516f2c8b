// src/models/booking.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Yellow,
    Red,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Yellow => "yellow",
            CardKind::Red => "red",
        }
    }

    /// Weight used for the disciplinary tiebreak total.
    pub fn disciplinary_weight(&self) -> i32 {
        match self {
            CardKind::Yellow => 1,
            CardKind::Red => 3,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Booking {
    pub id: Uuid,
    pub result_id: Uuid,
    pub player_id: Uuid,
    pub card: CardKind,
    pub minute: i32,
}
