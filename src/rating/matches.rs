use std::fmt;

use serde::{Deserialize, Serialize};

use super::results_parser::parse_match_results;
use crate::errors::RatingError;

/// Points of both teams in one set, in match-team order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore(pub u64, pub u64);

/// How the winner of a match is decided.
///
/// A single-set match (first-to-N or timed) goes to the team with more points.
/// A multi-set match goes to the team that won more sets, so a team can score
/// more points overall and still lose (`5 : 4 | 1 : 5 | 5 : 4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    SingleSet,
    MultiSet,
}

/// Identifies one match instance: the tournament it belongs to and its
/// position in that tournament's schedule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchId {
    pub tournament: String,
    pub ordinal: usize,
}

impl MatchId {
    pub fn new(tournament: impl Into<String>, ordinal: usize) -> Self {
        Self {
            tournament: tournament.into(),
            ordinal,
        }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.tournament, self.ordinal)
    }
}

/// A played match between two registered teams.
///
/// Teams are held by slug; the registry owns the rating state. Set scores are
/// always read in the same order as `teams`.
#[derive(Debug, PartialEq)]
pub struct Match {
    id: MatchId,
    teams: [String; 2],
    sets: Vec<SetScore>,
    match_type: MatchType,
}

impl Match {
    pub fn new(
        id: MatchId,
        teams: [String; 2],
        sets: Vec<SetScore>,
        match_type: MatchType,
    ) -> Result<Self, RatingError> {
        if teams[0] == teams[1] {
            return Err(RatingError::SameTeam {
                slug: teams[0].clone(),
            });
        }

        Ok(Self {
            id,
            teams,
            sets,
            match_type,
        })
    }

    /// Build a match from a raw results string like `"5 : 4 | 1 : 5 | - : -"`
    pub fn from_results(id: MatchId, teams: [String; 2], raw: &str) -> Result<Self, RatingError> {
        let parsed = parse_match_results(raw);
        Self::new(id, teams, parsed.sets, parsed.match_type)
    }

    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn teams(&self) -> &[String; 2] {
        &self.teams
    }

    pub fn sets(&self) -> &[SetScore] {
        &self.sets
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    /// Totals saturate at `u64::MAX` instead of wrapping
    pub fn points_scored(&self) -> (u64, u64) {
        self.sets.iter().fold((0u64, 0u64), |(a, b), set| {
            (a.saturating_add(set.0), b.saturating_add(set.1))
        })
    }

    /// Tied sets count for neither team
    pub fn sets_won(&self) -> (u32, u32) {
        self.sets.iter().fold((0, 0), |(a, b), set| {
            if set.0 > set.1 {
                (a + 1, b)
            } else if set.1 > set.0 {
                (a, b + 1)
            } else {
                (a, b)
            }
        })
    }

    /// Slug of the winning team, or `None` for a draw (including a match with no sets)
    pub fn winner(&self) -> Option<&str> {
        let (score_a, score_b) = match self.match_type {
            MatchType::SingleSet => self.points_scored(),
            MatchType::MultiSet => {
                let (sets_a, sets_b) = self.sets_won();
                (u64::from(sets_a), u64::from(sets_b))
            }
        };

        if score_a > score_b {
            Some(self.teams[0].as_str())
        } else if score_b > score_a {
            Some(self.teams[1].as_str())
        } else {
            None
        }
    }

    /// The other team, or `None` if `slug` did not play in this match
    pub fn opponent(&self, slug: &str) -> Option<&str> {
        if self.teams[0] == slug {
            Some(self.teams[1].as_str())
        } else if self.teams[1] == slug {
            Some(self.teams[0].as_str())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(sets: Vec<SetScore>, match_type: MatchType) -> Match {
        Match::new(
            MatchId::new("test-cup", 0),
            ["falco".to_string(), "rigor-mortis".to_string()],
            sets,
            match_type,
        )
        .unwrap()
    }

    #[test]
    fn test_multi_set_winner_uses_sets_not_points() {
        let game = build(
            vec![SetScore(5, 4), SetScore(1, 5), SetScore(5, 4)],
            MatchType::MultiSet,
        );

        assert_eq!(game.points_scored(), (11, 13));
        assert_eq!(game.sets_won(), (2, 1));
        assert_eq!(game.winner(), Some("falco"));
    }

    #[test]
    fn test_large_point_totals_do_not_overflow() {
        let game = Match::from_results(
            MatchId::new("test-cup", 3),
            ["falco".to_string(), "rigor-mortis".to_string()],
            "4000000000 : 1 | 4000000000 : 2",
        )
        .unwrap();

        assert_eq!(game.points_scored(), (8_000_000_000, 3));
        assert_eq!(game.sets_won(), (2, 0));
        assert_eq!(game.winner(), Some("falco"));

        let saturated = build(
            vec![SetScore(u64::MAX, 0), SetScore(1, 0)],
            MatchType::SingleSet,
        );
        assert_eq!(saturated.points_scored(), (u64::MAX, 0));
        assert_eq!(saturated.winner(), Some("falco"));
    }

    #[test]
    fn test_single_set_winner_uses_points() {
        let game = build(vec![SetScore(3, 7)], MatchType::SingleSet);

        assert_eq!(game.winner(), Some("rigor-mortis"));
    }

    #[test]
    fn test_tied_sets_count_for_nobody() {
        let game = build(
            vec![SetScore(5, 5), SetScore(2, 5), SetScore(5, 3)],
            MatchType::MultiSet,
        );

        assert_eq!(game.sets_won(), (1, 1));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_empty_match_is_a_draw() {
        let single = build(Vec::new(), MatchType::SingleSet);
        let multi = build(Vec::new(), MatchType::MultiSet);

        assert_eq!(single.points_scored(), (0, 0));
        assert_eq!(single.winner(), None);
        assert_eq!(multi.winner(), None);
    }

    #[test]
    fn test_opponent_by_slug() {
        let game = build(vec![SetScore(1, 0)], MatchType::SingleSet);

        assert_eq!(game.opponent("falco"), Some("rigor-mortis"));
        assert_eq!(game.opponent("rigor-mortis"), Some("falco"));
        assert_eq!(game.opponent("zonenkinder"), None);
    }

    #[test]
    fn test_same_team_twice_is_rejected() {
        let result = Match::new(
            MatchId::new("test-cup", 1),
            ["falco".to_string(), "falco".to_string()],
            vec![SetScore(5, 4)],
            MatchType::SingleSet,
        );

        assert_eq!(
            result,
            Err(RatingError::SameTeam {
                slug: "falco".to_string()
            })
        );
    }

    #[test]
    fn test_from_results_parses_score_text() {
        let game = Match::from_results(
            MatchId::new("test-cup", 2),
            ["falco".to_string(), "rigor-mortis".to_string()],
            "5 : 4 | 1 : 5 | - : -",
        )
        .unwrap();

        assert_eq!(game.match_type(), MatchType::MultiSet);
        assert_eq!(game.sets(), &[SetScore(5, 4), SetScore(1, 5)]);
        assert_eq!(game.winner(), None);
        assert_eq!(game.id().to_string(), "test-cup#2");
    }
}
