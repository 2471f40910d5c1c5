use super::models::TournamentData;
use std::collections::HashSet;

/// Tournaments collected during ingestion, unique by slug
pub struct TournamentCollection {
    tournaments: Vec<TournamentData>,
    slugs: HashSet<String>,
}

impl TournamentCollection {
    pub fn new() -> Self {
        Self {
            tournaments: Vec::new(),
            slugs: HashSet::new(),
        }
    }

    /// Returns false if a tournament with the same slug was already added
    pub fn add(&mut self, tournament: TournamentData) -> bool {
        if !self.slugs.insert(tournament.slug().to_string()) {
            return false;
        }
        self.tournaments.push(tournament);
        true
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&TournamentData> {
        self.tournaments.iter().find(|t| t.slug() == slug)
    }

    pub fn match_count(&self) -> usize {
        self.tournaments.iter().map(|t| t.matches.len()).sum()
    }

    /// Oldest first. Undated tournaments come first, in the order they were added.
    pub fn into_chronological(self) -> Vec<TournamentData> {
        let mut tournaments = self.tournaments;
        tournaments.sort_by_key(|t| t.tournament.start_date);
        tournaments
    }
}

impl Default for TournamentCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<TournamentData> for TournamentCollection {
    fn from_iter<I: IntoIterator<Item = TournamentData>>(iter: I) -> Self {
        let mut collection = Self::new();
        for tournament in iter {
            collection.add(tournament);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchInfo, TeamInfo, Tournament};
    use chrono::NaiveDate;

    fn tournament(slug: &str, start: Option<(i32, u32, u32)>, matches: usize) -> TournamentData {
        let start_date = start.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        let team = |slug: &str| TeamInfo {
            slug: slug.to_string(),
            name: slug.to_string(),
        };

        TournamentData {
            tournament: Tournament {
                name: slug.to_string(),
                slug: slug.to_string(),
                start_date,
                end_date: start_date,
            },
            teams: vec![team("a"), team("b")],
            matches: (0..matches)
                .map(|_| MatchInfo {
                    team_a: team("a"),
                    team_b: team("b"),
                    results: "5 : 3".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_duplicate_slugs_are_ignored() {
        let mut collection = TournamentCollection::new();

        assert!(collection.add(tournament("dm-2019", Some((2019, 6, 1)), 3)));
        assert!(!collection.add(tournament("dm-2019", Some((2019, 6, 1)), 5)));

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.match_count(), 3);
        assert!(collection.get("dm-2019").is_some());
    }

    #[test]
    fn test_chronological_order() {
        let collection: TournamentCollection = vec![
            tournament("late", Some((2020, 3, 1)), 0),
            tournament("undated", None, 0),
            tournament("early", Some((2018, 9, 15)), 0),
        ]
        .into_iter()
        .collect();

        let slugs: Vec<String> = collection
            .into_chronological()
            .into_iter()
            .map(|t| t.tournament.slug)
            .collect();

        assert_eq!(slugs, vec!["undated", "early", "late"]);
    }
}
