use crate::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_REGION: &str = "na1";
pub const DEFAULT_ROUTING: &str = "americas";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TOP_PLAYERS: usize = 10;
pub const DEFAULT_MATCHES_PER_SUMMONER: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
    pub routing: String,
    pub timeout: Duration,
    pub top_players: usize,
    pub matches_per_summoner: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::Config("RIOT_API_KEY not found in environment or .env file".to_string())
        })?;

        let region = env::var("RIOT_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let routing = env::var("RIOT_ROUTING").unwrap_or_else(|_| DEFAULT_ROUTING.to_string());

        let timeout_secs = parse_var("RIOT_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let top_players = parse_var("RIOT_TOP_PLAYERS", DEFAULT_TOP_PLAYERS)?;
        let matches_per_summoner =
            parse_var("RIOT_MATCHES_PER_SUMMONER", DEFAULT_MATCHES_PER_SUMMONER)?;

        Ok(Config {
            api_key,
            region,
            routing,
            timeout: Duration::from_secs(timeout_secs),
            top_players,
            matches_per_summoner,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("{} is not a valid number: {}", name, raw))),
        Err(_) => Ok(default),
    }
}
