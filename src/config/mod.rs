pub mod settings;
pub mod tournaments;

pub use settings::{AppConfig, RatingSettings, ScraperSettings};
pub use tournaments::{get_excluded_tournaments, is_excluded};
