mod tugeny_scraper;

pub use tugeny_scraper::TugenyScraper;
