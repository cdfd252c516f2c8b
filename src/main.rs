use grassroots_league::config::settings::get_config;
use grassroots_league::league::LeagueService;
use grassroots_league::store::{LeagueDataset, LeagueStore};
use grassroots_league::telemetry::{get_subscriber, init_subscriber};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "grassroots-league".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/season.json".to_string());
    tracing::info!("Loading season dataset from {}", path);

    let raw = std::fs::read_to_string(&path)?;
    let dataset = LeagueDataset::from_json(&raw)?;
    let store = LeagueStore::from_dataset(dataset)?;
    let service = LeagueService::new(store, config.league.clone());

    let table = service.table()?;
    println!("{}", table.season_title);
    println!(
        "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  {}",
        "Pos", "Club", "P", "W", "D", "L", "GF", "GA", "GD", "Pts", "Form"
    );
    for row in &table.rows {
        let form: String = row.recent_form.iter().collect();
        let s = &row.standing;
        println!(
            "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}  {}",
            s.position,
            row.club_name,
            s.matches_played,
            s.wins,
            s.draws,
            s.losses,
            s.goals_for,
            s.goals_against,
            s.goal_difference,
            s.points,
            form
        );
    }

    let overview = service.overview()?;
    println!();
    println!(
        "Clubs: {}  Matches: {}  Goals: {}  Avg goals/match: {:.2}  Season progress: {:.1}%",
        overview.total_clubs,
        overview.total_matches,
        overview.total_goals,
        overview.avg_goals_per_match,
        overview.season_progress
    );
    if !overview.top_scorers.is_empty() {
        println!("Top scorers:");
        for scorer in &overview.top_scorers {
            println!(
                "  {} ({}) - {}",
                scorer.player_name, scorer.club_name, scorer.goals
            );
        }
    }

    Ok(())
}
