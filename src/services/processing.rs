use anyhow::Result;
use log::{info, warn};

use crate::cache::Cache;
use crate::config::{AppConfig, RatingSettings};
use crate::domain::{TournamentCollection, TournamentData};
use crate::rating::{EloEngine, Match, MatchId, TeamRegistry};
use crate::services::ingestion::PARSED_TOURNAMENTS_KEY;

/// Counts from one replay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingSummary {
    pub tournaments: usize,
    pub teams: usize,
    pub matches_played: usize,
    pub matches_skipped: usize,
}

pub struct ProcessingService {
    config: AppConfig,
}

impl ProcessingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Rate teams from the tournaments stored by the last ingestion
    pub fn run(&self) -> Result<TeamRegistry> {
        let tournaments = self.load_tournaments_from_cache()?;
        info!("  → Loaded {} tournaments from cache\n", tournaments.len());
        Ok(self.process(tournaments))
    }

    pub fn process(&self, tournaments: Vec<TournamentData>) -> TeamRegistry {
        info!("=== Starting Rating Calculation ===\n");

        let (registry, summary) = replay(tournaments, &self.config.rating);

        info!(
            "  → Rated {} teams from {} matches in {} tournaments",
            summary.teams, summary.matches_played, summary.tournaments
        );
        if summary.matches_skipped > 0 {
            warn!("  Skipped {} invalid matches", summary.matches_skipped);
        }

        info!("=== Rating Calculation Complete ===");
        registry
    }

    fn load_tournaments_from_cache(&self) -> Result<Vec<TournamentData>> {
        let cache = Cache::new(&self.config.cache_dir)?;
        cache
            .load_parsed(PARSED_TOURNAMENTS_KEY)?
            .ok_or_else(|| anyhow::anyhow!("No tournaments found in cache, run ingest first"))
    }
}

/// Replay all matches, oldest tournament first, into a fresh registry.
///
/// Only teams on a tournament's team list are registered; a match naming any
/// other team is skipped, as is a match of a team against itself.
pub fn replay(
    tournaments: Vec<TournamentData>,
    settings: &RatingSettings,
) -> (TeamRegistry, ProcessingSummary) {
    let tournaments = tournaments
        .into_iter()
        .collect::<TournamentCollection>()
        .into_chronological();

    let mut registry = TeamRegistry::from_settings(settings);
    let mut engine = EloEngine::new(settings.clone());
    let mut summary = ProcessingSummary {
        tournaments: tournaments.len(),
        ..ProcessingSummary::default()
    };

    for data in &tournaments {
        for team in &data.teams {
            registry.register(&team.slug, &team.name);
        }

        for (ordinal, info) in data.matches.iter().enumerate() {
            let id = MatchId::new(data.slug(), ordinal);
            let teams = [info.team_a.slug.clone(), info.team_b.slug.clone()];

            let played = Match::from_results(id, teams, &info.results)
                .and_then(|game| engine.play(&mut registry, &game));

            match played {
                Ok(_) => summary.matches_played += 1,
                Err(e) => {
                    warn!("Skipping match {}#{}: {}", data.slug(), ordinal, e);
                    summary.matches_skipped += 1;
                }
            }
        }
    }

    summary.teams = registry.len();
    (registry, summary)
}
