use grassroots_league::config::settings::LeagueSettings;
use grassroots_league::league::LeagueService;
use grassroots_league::models::CardKind;
use uuid::Uuid;

mod common;
use common::*;

fn settings() -> LeagueSettings {
    LeagueSettings {
        season_title: "Test League".to_string(),
        form_window: 5,
        leaderboard_limit: 10,
    }
}

#[test]
fn table_rows_carry_name_form_and_stats() {
    let a = club("Team A");
    let b = club("Team B");
    let (fixture, result) = played(&a, &b, 0, 2, 0);
    let store = store_from(
        vec![a.clone(), b],
        vec![],
        vec![fixture],
        vec![result],
        vec![],
        vec![],
    );
    let service = LeagueService::new(store, settings());

    let table = service.table().unwrap();
    assert_eq!(table.season_title, "Test League");
    assert_eq!(table.rows.len(), 2);

    let top = &table.rows[0];
    assert_eq!(top.standing.club_id, a.id);
    assert_eq!(top.club_name, "Team A");
    assert_eq!(top.recent_form, vec!['W']);
    assert_eq!(top.stats.avg_goals_per_match, 2.0);
    assert_eq!(top.stats.win_percentage, 100.0);
}

#[test]
fn overview_reports_totals_and_progress() {
    let a = club("Team A");
    let b = club("Team B");
    let (f1, r1) = played(&a, &b, 0, 2, 1);
    let (f2, r2) = played(&b, &a, 7, 0, 0);
    // Two more scheduled fixtures without results.
    let f3 = fixture_on_day(&a, &b, 14);
    let f4 = fixture_on_day(&b, &a, 21);
    let store = store_from(
        vec![a, b],
        vec![],
        vec![f1, f2, f3, f4],
        vec![r1, r2],
        vec![],
        vec![],
    );
    let service = LeagueService::new(store, settings());

    let overview = service.overview().unwrap();
    assert_eq!(overview.total_clubs, 2);
    assert_eq!(overview.total_matches, 2);
    assert_eq!(overview.total_goals, 3);
    assert_eq!(overview.avg_goals_per_match, 1.5);
    assert_eq!(overview.season_progress, 50.0);
}

#[test]
fn match_detail_resolves_timelines_and_team_lines() {
    let a = club("Team A");
    let b = club("Team B");
    let striker = player(&a, "Sam", "Porter");
    let rival = player(&b, "Owen", "Hart");
    let (fixture, result) = played(&a, &b, 0, 2, 1);
    let goals = vec![
        goal(&result, &striker, 55),
        goal(&result, &striker, 12),
        goal(&result, &rival, 78),
    ];
    let card = booking(&result, &rival, CardKind::Yellow, 60);
    let store = store_from(
        vec![a.clone(), b.clone()],
        vec![striker.clone(), rival.clone()],
        vec![fixture],
        vec![result.clone()],
        goals,
        vec![card],
    );
    let service = LeagueService::new(store, settings());

    let detail = service.match_detail(result.id).unwrap();
    let minutes: Vec<i32> = detail.goals.iter().map(|g| g.minute).collect();
    assert_eq!(minutes, vec![12, 55, 78]);
    assert_eq!(detail.bookings.len(), 1);
    assert_eq!(detail.bookings[0].player_name, "Owen Hart");

    assert_eq!(detail.home.club_id, a.id);
    assert_eq!(detail.home.goals_for, 2);
    assert_eq!(detail.home.goal_difference, 1);
    assert_eq!(detail.home.players.len(), 1);
    assert_eq!(detail.home.players[0].goals, 2);

    assert_eq!(detail.away.goals_for, 1);
    assert_eq!(detail.away.players[0].goals, 1);
    assert_eq!(detail.away.players[0].cards, 1);
}

#[test]
fn match_detail_for_unknown_result_fails() {
    let a = club("Team A");
    let b = club("Team B");
    let (fixture, result) = played(&a, &b, 0, 1, 0);
    let store = store_from(vec![a, b], vec![], vec![fixture], vec![result], vec![], vec![]);
    let service = LeagueService::new(store, settings());

    assert!(service.match_detail(Uuid::new_v4()).is_err());
}
