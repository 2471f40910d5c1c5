use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tournament as listed on tugeny.org
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub name: String,
    pub slug: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Team link as found on a tournament page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub slug: String,
    pub name: String,
}

/// One match as extracted from markup: both teams in page order and the raw
/// results text (`"5 : 4 | 1 : 5 | - : -"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub team_a: TeamInfo,
    pub team_b: TeamInfo,
    pub results: String,
}

/// Everything ingestion collected for one tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentData {
    pub tournament: Tournament,
    pub teams: Vec<TeamInfo>,
    pub matches: Vec<MatchInfo>,
}

impl TournamentData {
    pub fn slug(&self) -> &str {
        &self.tournament.slug
    }
}
