use colored::*;
use league_ladder::api::models::Summoner;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "#")]
    rank: String,
    puuid: String,
    level: String,
}

pub fn display_info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

pub fn display_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn display_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg.red());
}

pub fn display_top_players(players: &[Summoner]) {
    println!("\n{}", "🏆 Challenger ladder".bold().cyan());

    let rows: Vec<PlayerRow> = players
        .iter()
        .enumerate()
        .map(|(idx, p)| PlayerRow {
            rank: format!("#{}", idx + 1),
            puuid: format!("{}…", &p.puuid[..p.puuid.len().min(12)]),
            level: p.summoner_level.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}
