use crate::api::models::*;
use crate::api::transport::Transport;
use crate::config::Config;
use crate::error::AppError;
use futures::future::try_join_all;
use std::collections::HashSet;

pub const RANKED_SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

/// Domain client over [`Transport`]. League and summoner lookups go to the
/// platform host ("na1"-style), match lookups to the regional routing host
/// ("americas"-style).
pub struct RiotApiClient {
    transport: Transport,
    platform_base: String,
    regional_base: String,
}

impl RiotApiClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let transport = Transport::new(&config.api_key, config.timeout)?;
        Ok(Self::with_base_urls(
            transport,
            format!("https://{}.api.riotgames.com", config.region),
            format!("https://{}.api.riotgames.com", config.routing),
        ))
    }

    pub fn with_base_urls(
        transport: Transport,
        platform_base: String,
        regional_base: String,
    ) -> Self {
        RiotApiClient {
            transport,
            platform_base,
            regional_base,
        }
    }

    pub async fn get_challenger_league(&self, queue: &str) -> Result<Vec<LeagueEntry>, AppError> {
        let url = format!(
            "{}/lol/league/v4/challengerleagues/by-queue/{}",
            self.platform_base, queue
        );
        let league: ChallengerLeague = self.transport.get(&url, &[]).await?;
        Ok(league.entries)
    }

    pub async fn get_summoner_by_id(&self, summoner_id: &str) -> Result<Summoner, AppError> {
        let url = format!(
            "{}/lol/summoner/v4/summoners/{}",
            self.platform_base, summoner_id
        );
        self.transport.get(&url, &[]).await
    }

    /// The `count` highest-ranked challenger players, fully resolved. Entries
    /// are ranked by league points before resolution, so the output mirrors
    /// ladder order rather than response-completion order.
    pub async fn get_top_players(&self, count: usize) -> Result<Vec<Summoner>, AppError> {
        let entries = self.get_challenger_league(RANKED_SOLO_QUEUE).await?;
        let top = rank_entries(entries, count);

        try_join_all(top.iter().map(|e| self.get_summoner_by_id(&e.summoner_id))).await
    }

    pub async fn get_match_ids_by_puuid(
        &self,
        puuid: &str,
        count: usize,
        start: usize,
    ) -> Result<Vec<String>, AppError> {
        let url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids",
            self.regional_base, puuid
        );
        let query = [
            ("count", count.to_string()),
            ("start", start.to_string()),
        ];
        self.transport.get(&url, &query).await
    }

    pub async fn get_match(&self, match_id: &str) -> Result<Match, AppError> {
        let url = format!("{}/lol/match/v5/matches/{}", self.regional_base, match_id);
        self.transport.get(&url, &[]).await
    }

    /// Recent matches across a set of summoners. Match IDs shared between
    /// summoners are fetched once; output order is an implementation detail
    /// callers must not rely on. Any single failed request fails the whole
    /// operation, there is no partial result.
    pub async fn get_matches_for_summoners(
        &self,
        summoners: &[Summoner],
        matches_per_summoner: usize,
    ) -> Result<Vec<Match>, AppError> {
        let id_lists = try_join_all(
            summoners
                .iter()
                .map(|s| self.get_match_ids_by_puuid(&s.puuid, matches_per_summoner, 0)),
        )
        .await?;

        let mut seen = HashSet::new();
        let mut unique_ids = Vec::new();
        for id in id_lists.into_iter().flatten() {
            if seen.insert(id.clone()) {
                unique_ids.push(id);
            }
        }

        try_join_all(unique_ids.iter().map(|id| self.get_match(id))).await
    }
}

/// Sort descending by league points and keep the first `count`. The sort is
/// stable, so players tied on points keep their relative order from the API.
fn rank_entries(mut entries: Vec<LeagueEntry>, count: usize) -> Vec<LeagueEntry> {
    entries.sort_by(|a, b| b.league_points.cmp(&a.league_points));
    entries.truncate(count);
    entries
}
