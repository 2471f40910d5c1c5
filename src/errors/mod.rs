use crate::rating::MatchId;

/// Contract violations raised by the rating core.
///
/// None of these are retried: they describe a single match whose data cannot
/// be applied without corrupting ratings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Team not registered: {slug}")]
    UnknownTeam { slug: String },

    #[error("Team cannot play against itself: {slug}")]
    SameTeam { slug: String },

    #[error("Match already played: {id}")]
    AlreadyPlayed { id: MatchId },
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to cache errors
pub fn cache_context(operation: &str, key: &str) -> String {
    format!("Failed to {} cache for key: {}", operation, key)
}
