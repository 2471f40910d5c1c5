use std::path::PathBuf;

const CACHE_DIR_ENV: &str = "JUGGER_CACHE_DIR";
const DEFAULT_CACHE_DIR: &str = "cache";

/// Elo policy (FIDE-style tiers)
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSettings {
    pub default_rating: f64,
    pub expert_rating: f64,
    pub new_team_matches: u32,
    pub k_new_team: f64,
    pub k_regular_team: f64,
    pub k_expert_team: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            default_rating: 1500.0,
            expert_rating: 2400.0,
            new_team_matches: 30,
            k_new_team: 40.0,
            k_regular_team: 20.0,
            k_expert_team: 10.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScraperSettings {
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub base_url: &'static str,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 500,
            user_agent: "JuggerRanking/1.0",
            timeout_secs: 30,
            base_url: "https://tugeny.org",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub scraper: ScraperSettings,
    pub cache_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            scraper: ScraperSettings::default(),
            cache_dir: default_cache_dir(),
        }
    }

    pub fn with_cache_dir(mut self, cache_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = cache_dir {
            self.cache_dir = dir;
        }
        self
    }
}

fn default_cache_dir() -> PathBuf {
    std::env::var(CACHE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_DIR))
}
