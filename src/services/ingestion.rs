use anyhow::Result;
use log::{error, info};

use crate::cache::Cache;
use crate::config::{AppConfig, get_excluded_tournaments, is_excluded};
use crate::domain::{FetchProgress, Tournament, TournamentCollection, TournamentData};
use crate::fetchers::TugenyScraper;

pub const PARSED_TOURNAMENTS_KEY: &str = "tournaments";

pub struct IngestionService {
    cache: Cache,
    scraper: TugenyScraper,
}

impl IngestionService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            cache: Cache::new(&config.cache_dir)?,
            scraper: TugenyScraper::new(&config.scraper)?,
        })
    }

    /// Fetch every tournament and store them, oldest first, in the parsed cache
    pub async fn run(&mut self) -> Result<Vec<TournamentData>> {
        info!("=== Starting Data Ingestion ===\n");

        // Step 1: Discover tournaments
        let tournaments = self.discover_tournaments().await?;
        info!("  → {} jugger tournaments to fetch\n", tournaments.len());

        // Step 2: Fetch teams and matches
        let collection = self.fetch_tournaments(tournaments).await?;
        info!(
            "  → Fetched {} tournaments with {} matches\n",
            collection.len(),
            collection.match_count()
        );

        // Step 3: Save to parsed cache
        let tournaments = collection.into_chronological();
        self.cache.save_parsed(PARSED_TOURNAMENTS_KEY, &tournaments)?;
        info!("  → Saved to parsed cache\n");

        info!("=== Ingestion Complete ===");
        Ok(tournaments)
    }

    async fn discover_tournaments(&mut self) -> Result<Vec<Tournament>> {
        info!("Step 1: Discovering tournaments...");

        let all = self.scraper.discover_tournaments(&self.cache).await?;
        let total = all.len();
        let tournaments: Vec<Tournament> =
            all.into_iter().filter(|t| !is_excluded(&t.slug)).collect();

        if tournaments.len() < total {
            info!(
                "  Skipped {} of {} known non-jugger tournaments",
                total - tournaments.len(),
                get_excluded_tournaments().len()
            );
        }

        Ok(tournaments)
    }

    async fn fetch_tournaments(
        &mut self,
        tournaments: Vec<Tournament>,
    ) -> Result<TournamentCollection> {
        info!("Step 2: Fetching tournament details...");

        let mut progress = FetchProgress::new(tournaments.len());
        let mut collection = TournamentCollection::new();

        for tournament in tournaments {
            let slug = tournament.slug.clone();
            match self.scraper.fetch_tournament(tournament, &self.cache).await {
                Ok((data, was_cached)) => {
                    collection.add(data);
                    progress.record(was_cached);
                }
                Err(e) => {
                    error!("Failed to fetch tournament {}: {:?}", slug, e);
                    progress.record_failure();
                }
            }
        }

        if progress.failed() > 0 {
            anyhow::bail!(
                "{} tournaments could not be fetched; rerun to retry (fetched pages are cached)",
                progress.failed()
            );
        }

        Ok(collection)
    }
}
