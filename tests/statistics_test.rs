use grassroots_league::league::stats::club_statistics;
use grassroots_league::league::StatsService;
use grassroots_league::models::{CardKind, ClubStanding};

mod common;
use common::*;

#[test]
fn averages_are_rounded_to_two_decimals() {
    let mut standing = ClubStanding::new(uuid::Uuid::new_v4());
    standing.matches_played = 3;
    standing.wins = 1;
    standing.goals_for = 5;
    standing.goals_against = 2;

    let stats = club_statistics(&standing);
    assert_eq!(stats.avg_goals_per_match, 1.67);
    assert_eq!(stats.avg_conceded_per_match, 0.67);
    assert_eq!(stats.win_percentage, 33.3);
}

#[test]
fn zero_matches_reports_zeros_instead_of_erroring() {
    let standing = ClubStanding::new(uuid::Uuid::new_v4());
    let stats = club_statistics(&standing);
    assert_eq!(stats.avg_goals_per_match, 0.0);
    assert_eq!(stats.avg_conceded_per_match, 0.0);
    assert_eq!(stats.win_percentage, 0.0);
}

#[test]
fn top_scorers_are_counted_ordered_and_limited() {
    let a = club("Team A");
    let b = club("Team B");
    let striker = player(&a, "Sam", "Porter");
    let midfielder = player(&a, "Lee", "Griggs");
    let rival = player(&b, "Owen", "Hart");
    let (fixture, result) = played(&a, &b, 0, 3, 3);
    let goals = vec![
        goal(&result, &striker, 5),
        goal(&result, &striker, 30),
        goal(&result, &midfielder, 60),
        goal(&result, &rival, 70),
        goal(&result, &rival, 80),
        goal(&result, &rival, 88),
    ];
    let store = store_from(
        vec![a, b],
        vec![striker.clone(), midfielder, rival.clone()],
        vec![fixture],
        vec![result],
        goals,
        vec![],
    );
    let service = StatsService::new(store);

    let scorers = service.top_scorers(10).unwrap();
    assert_eq!(scorers[0].player_id, rival.id);
    assert_eq!(scorers[0].goals, 3);
    assert_eq!(scorers[1].player_id, striker.id);
    assert_eq!(scorers[1].goals, 2);
    assert_eq!(scorers.len(), 3);

    let capped = service.top_scorers(2).unwrap();
    assert_eq!(capped.len(), 2);
}

#[test]
fn most_carded_weights_red_cards() {
    let a = club("Team A");
    let b = club("Team B");
    let rough = player(&a, "Vic", "Sharp");
    let tidy_one = player(&b, "Noah", "Bell");
    let tidy_two = player(&b, "Max", "Dunn");
    let (fixture, result) = played(&a, &b, 0, 1, 1);
    let bookings = vec![
        booking(&result, &rough, CardKind::Red, 40),
        booking(&result, &tidy_one, CardKind::Yellow, 50),
        booking(&result, &tidy_two, CardKind::Yellow, 89),
    ];
    let store = store_from(
        vec![a.clone(), b.clone()],
        vec![rough, tidy_one, tidy_two],
        vec![fixture],
        vec![result],
        vec![],
        bookings,
    );

    let rows = StatsService::new(store).most_carded(10).unwrap();
    // One red (weight 3) outranks two yellows (weight 2).
    assert_eq!(rows[0].club_id, a.id);
    assert_eq!(rows[0].red_cards, 1);
    assert_eq!(rows[0].total_cards, 3);
    assert_eq!(rows[1].club_id, b.id);
    assert_eq!(rows[1].yellow_cards, 2);
    assert_eq!(rows[1].total_cards, 2);
}
