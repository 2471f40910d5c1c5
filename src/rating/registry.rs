use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use super::team::Team;
use crate::config::RatingSettings;

/// Plain-data snapshot of a team for output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    pub name: String,
    pub slug: String,
    pub rating: f64,
    pub peak_rating: f64,
    pub matches_played: u32,
}

impl From<&Team> for TeamStanding {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name().to_string(),
            slug: team.slug().to_string(),
            rating: team.rating(),
            peak_rating: team.peak_rating(),
            matches_played: team.matches_played(),
        }
    }
}

/// Owns exactly one `Team` per slug
#[derive(Debug, Clone)]
pub struct TeamRegistry {
    teams: HashMap<String, Team>,
    default_rating: f64,
}

impl TeamRegistry {
    pub fn new(default_rating: f64) -> Self {
        Self {
            teams: HashMap::new(),
            default_rating,
        }
    }

    pub fn from_settings(settings: &RatingSettings) -> Self {
        Self::new(settings.default_rating)
    }

    /// Register a team, or return the existing one for this slug.
    /// The first display name seen for a slug is kept.
    pub fn register(&mut self, slug: &str, name: &str) -> &Team {
        let default_rating = self.default_rating;
        let team = self
            .teams
            .entry(slug.to_string())
            .or_insert_with(|| Team::new(name, slug, default_rating));

        if team.name() != name {
            debug!(
                "Team {} already registered as '{}', ignoring name '{}'",
                slug,
                team.name(),
                name
            );
        }

        team
    }

    /// Insert a team with existing state, replacing any team with the same slug
    pub fn insert(&mut self, team: Team) {
        self.teams.insert(team.slug().to_string(), team);
    }

    pub fn get(&self, slug: &str) -> Option<&Team> {
        self.teams.get(slug)
    }

    pub(crate) fn get_mut(&mut self, slug: &str) -> Option<&mut Team> {
        self.teams.get_mut(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.teams.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    /// Snapshot sorted by rating (highest first), ties broken by slug
    pub fn standings(&self) -> Vec<TeamStanding> {
        let mut standings: Vec<TeamStanding> = self.iter().map(TeamStanding::from).collect();
        standings.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        standings
    }
}

impl Default for TeamRegistry {
    fn default() -> Self {
        Self::from_settings(&RatingSettings::default())
    }
}
