use std::collections::HashMap;

use uuid::Uuid;

use crate::league::tiebreak::TableOrdering;
use crate::models::{CardKind, ClubStanding};
use crate::store::LeagueStore;

/// Service responsible for computing league standings.
pub struct StandingsService {
    store: LeagueStore,
}

impl StandingsService {
    pub fn new(store: LeagueStore) -> Self {
        Self { store }
    }

    /// Compute the fully ordered table with 1-based positions. Stateless:
    /// every call folds the current store contents from scratch.
    #[tracing::instrument(name = "Calculate league table", skip(self))]
    pub fn calculate_table(&self) -> Vec<ClubStanding> {
        let accumulators = self.aggregate();

        // A club that never appears in a completed match gets no row,
        // even when disciplinary data exists for it.
        let mut table: Vec<ClubStanding> = accumulators
            .into_values()
            .filter(|s| s.matches_played > 0)
            .collect();

        let ordering = TableOrdering::new(&self.store, &table);
        ordering.sort(&mut table);

        for (index, standing) in table.iter_mut().enumerate() {
            standing.position = (index + 1) as i32;
        }

        tracing::debug!("Computed standings for {} clubs", table.len());
        table
    }

    /// Fold completed results and bookings into per-club accumulators.
    pub fn aggregate(&self) -> HashMap<Uuid, ClubStanding> {
        let mut table: HashMap<Uuid, ClubStanding> = HashMap::new();

        for result in self.store.completed_results() {
            Self::record_result(
                &mut table,
                result.home_club,
                result.home_goals,
                result.away_goals,
            );
            Self::record_result(
                &mut table,
                result.away_club,
                result.away_goals,
                result.home_goals,
            );
        }

        for card in self.store.club_cards() {
            let entry = table
                .entry(card.club_id)
                .or_insert_with(|| ClubStanding::new(card.club_id));
            match card.card {
                CardKind::Yellow => entry.yellow_cards += 1,
                CardKind::Red => entry.red_cards += 1,
            }
            entry.total_cards += card.card.disciplinary_weight();
        }

        table
    }

    fn record_result(
        table: &mut HashMap<Uuid, ClubStanding>,
        club_id: Uuid,
        scored: i32,
        conceded: i32,
    ) {
        let entry = table
            .entry(club_id)
            .or_insert_with(|| ClubStanding::new(club_id));
        entry.matches_played += 1;
        entry.goals_for += scored;
        entry.goals_against += conceded;
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                entry.wins += 1;
                entry.points += 3;
            }
            std::cmp::Ordering::Equal => {
                entry.draws += 1;
                entry.points += 1;
            }
            std::cmp::Ordering::Less => {
                entry.losses += 1;
            }
        }
        // Kept consistent after every fold step, not just at the end.
        entry.goal_difference = entry.goals_for - entry.goals_against;
    }
}
