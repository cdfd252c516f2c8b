use uuid::Uuid;

use crate::store::LeagueStore;

/// Default number of results making up the form string.
pub const DEFAULT_FORM_WINDOW: usize = 5;

/// Produces the recent-form letters shown next to each table row.
pub struct FormService {
    store: LeagueStore,
}

impl FormService {
    pub fn new(store: LeagueStore) -> Self {
        Self { store }
    }

    /// Outcome letters (`W`/`D`/`L`) for the club's most recently dated
    /// completed matches, most recent first. No padding: a club with
    /// fewer matches than the window gets a shorter run, a club with
    /// none gets an empty one.
    pub fn recent_form(&self, club_id: Uuid, window: usize) -> Vec<char> {
        self.store
            .results_for_club(club_id, window)
            .iter()
            .map(|result| {
                match result
                    .goals_for(club_id)
                    .cmp(&result.goals_against(club_id))
                {
                    std::cmp::Ordering::Greater => 'W',
                    std::cmp::Ordering::Equal => 'D',
                    std::cmp::Ordering::Less => 'L',
                }
            })
            .collect()
    }
}
