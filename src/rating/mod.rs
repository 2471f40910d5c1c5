pub mod elo;
pub mod matches;
pub mod registry;
pub mod results_parser;
pub mod team;

pub use elo::{EloEngine, RatingChange, expected_score};
pub use matches::{Match, MatchId, MatchType, SetScore};
pub use registry::{TeamRegistry, TeamStanding};
pub use results_parser::{ParsedResults, parse_match_results};
pub use team::{KTier, Team};
