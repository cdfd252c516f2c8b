use std::collections::HashMap;

use uuid::Uuid;

use crate::store::LeagueStore;

/// One club's aggregate record in meetings with a given set of opponents:
/// a win is 3 points, a draw 1; goal difference accumulates signed per
/// meeting regardless of outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadToHeadRecord {
    pub points: i32,
    pub goal_difference: i32,
}

/// Pairwise head-to-head records, precomputed once per table computation
/// so the comparator never touches the store.
pub struct HeadToHeadIndex {
    records: HashMap<Uuid, HeadToHeadRecord>,
}

impl HeadToHeadIndex {
    pub fn build(store: &LeagueStore, club_ids: &[Uuid]) -> Self {
        let mut records: HashMap<Uuid, HeadToHeadRecord> = HashMap::new();
        for &club in club_ids {
            let mut record = HeadToHeadRecord::default();
            for &opponent in club_ids {
                if opponent == club {
                    continue;
                }
                // A meeting contributes from this club's perspective
                // whichever fixture slot it occupied.
                for meeting in store.meetings_between(club, opponent) {
                    let scored = meeting.goals_for(club);
                    let conceded = meeting.goals_against(club);
                    if scored > conceded {
                        record.points += 3;
                    } else if scored == conceded {
                        record.points += 1;
                    }
                    record.goal_difference += scored - conceded;
                }
            }
            records.insert(club, record);
        }
        Self { records }
    }

    /// Zero record for clubs absent from the index.
    pub fn record(&self, club_id: Uuid) -> HeadToHeadRecord {
        self.records.get(&club_id).copied().unwrap_or_default()
    }
}
