use std::collections::HashMap;

use uuid::Uuid;

use crate::config::settings::LeagueSettings;
use crate::error::LeagueError;
use crate::league::form::FormService;
use crate::league::standings::StandingsService;
use crate::league::stats::{self, StatsService};
use crate::models::{
    BookingLine, ClubStanding, GoalLine, LeagueOverview, LeagueTableResponse, MatchDetailResponse,
    PlayerMatchLine, TableRow, TeamMatchStats,
};
use crate::store::LeagueStore;

/// Main league service that orchestrates standings, form, and statistics
/// over one season snapshot.
pub struct LeagueService {
    store: LeagueStore,
    standings: StandingsService,
    form: FormService,
    stats: StatsService,
    settings: LeagueSettings,
}

impl LeagueService {
    pub fn new(store: LeagueStore, settings: LeagueSettings) -> Self {
        Self {
            standings: StandingsService::new(store.clone()),
            form: FormService::new(store.clone()),
            stats: StatsService::new(store.clone()),
            store,
            settings,
        }
    }

    /// Ordered standings only, without presentation extras.
    pub fn standings(&self) -> Vec<ClubStanding> {
        self.standings.calculate_table()
    }

    pub fn recent_form(&self, club_id: Uuid) -> Vec<char> {
        self.form.recent_form(club_id, self.settings.form_window)
    }

    /// The table page payload: ordered rows with club names, recent form,
    /// and per-match averages.
    #[tracing::instrument(name = "Assemble league table", skip(self))]
    pub fn table(&self) -> Result<LeagueTableResponse, LeagueError> {
        let standings = self.standings.calculate_table();
        let mut rows = Vec::with_capacity(standings.len());
        for standing in standings {
            let club_name = self.store.club(standing.club_id)?.name.clone();
            let recent_form = self.form.recent_form(standing.club_id, self.settings.form_window);
            let stats = stats::club_statistics(&standing);
            rows.push(TableRow {
                club_name,
                recent_form,
                stats,
                standing,
            });
        }
        Ok(LeagueTableResponse {
            season_title: self.settings.season_title.clone(),
            rows,
        })
    }

    /// The statistics page payload: league totals plus leaderboards.
    #[tracing::instrument(name = "Assemble league overview", skip(self))]
    pub fn overview(&self) -> Result<LeagueOverview, LeagueError> {
        let standings = self.standings.calculate_table();

        let total_matches = self.store.result_count() as i32;
        let total_goals: i32 = self
            .store
            .completed_results()
            .iter()
            .map(|r| r.home_goals + r.away_goals)
            .sum();
        let avg_goals_per_match =
            stats::round2(total_goals as f64 / total_matches.max(1) as f64);

        let fixture_count = self.store.fixture_count() as i32;
        let season_progress = if fixture_count > 0 {
            stats::round1(total_matches as f64 / fixture_count as f64 * 100.0)
        } else {
            0.0
        };

        Ok(LeagueOverview {
            total_clubs: standings.len() as i32,
            total_matches,
            total_goals,
            avg_goals_per_match,
            season_progress,
            top_scorers: self.stats.top_scorers(self.settings.leaderboard_limit)?,
            most_carded: self.stats.most_carded(self.settings.leaderboard_limit)?,
        })
    }

    /// The match page payload: goal and booking timelines plus per-team
    /// lines for one completed match.
    pub fn match_detail(&self, result_id: Uuid) -> Result<MatchDetailResponse, LeagueError> {
        let result = self.store.result(result_id)?.clone();
        let fixture = self.store.fixture(result.fixture_id)?.clone();

        let mut goals = Vec::new();
        for goal in self.store.goals_for_result(result_id) {
            let scorer = self.store.player(goal.scorer)?;
            let club = self.store.club(scorer.club_id)?;
            let assist_name = match goal.assist {
                Some(assist) => Some(self.store.player(assist)?.full_name()),
                None => None,
            };
            goals.push(GoalLine {
                minute: goal.minute,
                scorer_name: scorer.full_name(),
                club_name: club.name.clone(),
                assist_name,
                own_goal: goal.own_goal,
                penalty: goal.penalty,
            });
        }

        let mut bookings = Vec::new();
        for booking in self.store.bookings_for_result(result_id) {
            let player = self.store.player(booking.player_id)?;
            let club = self.store.club(player.club_id)?;
            bookings.push(BookingLine {
                minute: booking.minute,
                player_name: player.full_name(),
                club_name: club.name.clone(),
                card: booking.card,
            });
        }

        let home = self.team_match_stats(
            fixture.home_club,
            result.home_goals,
            result.away_goals,
            result_id,
        )?;
        let away = self.team_match_stats(
            fixture.away_club,
            result.away_goals,
            result.home_goals,
            result_id,
        )?;

        Ok(MatchDetailResponse {
            result,
            fixture,
            goals,
            bookings,
            home,
            away,
        })
    }

    fn team_match_stats(
        &self,
        club_id: Uuid,
        goals_for: i32,
        goals_against: i32,
        result_id: Uuid,
    ) -> Result<TeamMatchStats, LeagueError> {
        let club_name = self.store.club(club_id)?.name.clone();

        // One line per player from this club on the scoresheet.
        let mut lines: HashMap<Uuid, PlayerMatchLine> = HashMap::new();
        for goal in self.store.goals_for_result(result_id) {
            let player = self.store.player(goal.scorer)?;
            if player.club_id != club_id {
                continue;
            }
            lines
                .entry(player.id)
                .or_insert_with(|| PlayerMatchLine {
                    player_id: player.id,
                    player_name: player.full_name(),
                    goals: 0,
                    cards: 0,
                })
                .goals += 1;
        }
        for booking in self.store.bookings_for_result(result_id) {
            let player = self.store.player(booking.player_id)?;
            if player.club_id != club_id {
                continue;
            }
            lines
                .entry(player.id)
                .or_insert_with(|| PlayerMatchLine {
                    player_id: player.id,
                    player_name: player.full_name(),
                    goals: 0,
                    cards: 0,
                })
                .cards += 1;
        }

        let mut players: Vec<PlayerMatchLine> = lines.into_values().collect();
        players.sort_by(|a, b| a.player_name.cmp(&b.player_name));

        Ok(TeamMatchStats {
            club_id,
            club_name,
            goals_for,
            goals_against,
            goal_difference: goals_for - goals_against,
            players,
        })
    }
}
