// src/models/goal.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Goal {
    pub id: Uuid,
    pub result_id: Uuid,
    pub scorer: Uuid,
    #[serde(default)]
    pub assist: Option<Uuid>,
    pub minute: i32,
    #[serde(default)]
    pub own_goal: bool,
    #[serde(default)]
    pub penalty: bool,
}
