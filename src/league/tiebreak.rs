use std::cmp::Ordering;
use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::league::head_to_head::HeadToHeadIndex;
use crate::models::ClubStanding;
use crate::store::LeagueStore;

/// Total ordering over aggregated standings. The ladder, in priority
/// order: points, goal difference, goals scored, head-to-head points,
/// head-to-head goal difference (all higher-first), fewer total cards,
/// and finally a deterministic hash-derived key so exact ties still get
/// a stable, reproducible order.
pub struct TableOrdering {
    head_to_head: HeadToHeadIndex,
    name_keys: HashMap<Uuid, u64>,
}

impl TableOrdering {
    pub fn new(store: &LeagueStore, standings: &[ClubStanding]) -> Self {
        let club_ids: Vec<Uuid> = standings.iter().map(|s| s.club_id).collect();
        let head_to_head = HeadToHeadIndex::build(store, &club_ids);
        let name_keys = standings
            .iter()
            .map(|s| {
                let name = store
                    .club(s.club_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                (s.club_id, name_tiebreak_key(&name))
            })
            .collect();
        Self {
            head_to_head,
            name_keys,
        }
    }

    pub fn sort(&self, standings: &mut [ClubStanding]) {
        standings.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &ClubStanding, b: &ClubStanding) -> Ordering {
        let h2h_a = self.head_to_head.record(a.club_id);
        let h2h_b = self.head_to_head.record(b.club_id);
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| h2h_b.points.cmp(&h2h_a.points))
            .then_with(|| h2h_b.goal_difference.cmp(&h2h_a.goal_difference))
            .then_with(|| a.total_cards.cmp(&b.total_cards))
            .then_with(|| self.name_key(a.club_id).cmp(&self.name_key(b.club_id)))
    }

    fn name_key(&self, club_id: Uuid) -> u64 {
        self.name_keys.get(&club_id).copied().unwrap_or(0)
    }
}

/// Final tiebreak key: a pseudo-random draw seeded from the SHA-256 of
/// the club name (first eight digest bytes, little-endian). The hash is
/// environment-independent, so the same name yields the same key on
/// every host and every invocation.
pub fn name_tiebreak_key(name: &str) -> u64 {
    let digest = Sha256::digest(name.as_bytes());
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    StdRng::seed_from_u64(u64::from_le_bytes(seed)).gen()
}
