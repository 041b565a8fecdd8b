mod display;

use anyhow::Context;
use clap::Parser;
use display::{display_error, display_info, display_success, display_top_players};
use indicatif::ProgressBar;
use league_ladder::pipeline::combine_matches;
use league_ladder::{Config, RiotApiClient};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "league_ladder")]
#[command(about = "Fetch challenger-ladder match data for reporting", long_about = None)]
struct Args {
    /// Region (default: na1)
    #[arg(short, long)]
    region: Option<String>,

    /// Number of top players to fetch
    #[arg(short, long)]
    top: Option<usize>,

    /// Matches to fetch per player
    #[arg(short, long)]
    matches: Option<usize>,

    /// Write the unique-match JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }
    if let Some(top) = args.top {
        config.top_players = top;
    }
    if let Some(matches) = args.matches {
        config.matches_per_summoner = matches;
    }

    display_info(&format!(
        "Fetching top {} challenger players in {} ({} matches each)",
        config.top_players, config.region, config.matches_per_summoner
    ));

    let client = RiotApiClient::new(&config)?;

    let pb = spinner("Fetching challenger ladder");
    let players = client.get_top_players(config.top_players).await?;
    pb.finish_and_clear();
    display_success(&format!("Resolved {} players", players.len()));
    display_top_players(&players);

    let pb = spinner("Fetching match histories");
    let matches = client
        .get_matches_for_summoners(&players, config.matches_per_summoner)
        .await?;
    pb.finish_and_clear();

    let unique = combine_matches(matches);
    display_success(&format!("{} unique matches", unique.len()));

    let json = serde_json::to_string_pretty(&unique)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            display_success(&format!("Wrote {}", path.display()));
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
