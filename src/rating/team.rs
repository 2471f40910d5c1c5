use std::hash::{Hash, Hasher};

use crate::config::RatingSettings;

/// K-factor tier a team falls into before a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KTier {
    Expert,
    New,
    Regular,
}

impl KTier {
    pub fn k_factor(&self, settings: &RatingSettings) -> f64 {
        match self {
            KTier::Expert => settings.k_expert_team,
            KTier::New => settings.k_new_team,
            KTier::Regular => settings.k_regular_team,
        }
    }
}

/// Rating state of one team, identified by its slug.
///
/// Equality and hashing only look at the slug; two values with the same slug
/// are the same team even when their display names differ.
#[derive(Debug, Clone)]
pub struct Team {
    name: String,
    slug: String,
    rating: f64,
    peak_rating: f64,
    matches_played: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, slug: impl Into<String>, default_rating: f64) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            rating: default_rating,
            peak_rating: default_rating,
            matches_played: 0,
        }
    }

    /// Rebuild a team from previously computed state.
    /// The peak is raised to `rating` if it was recorded lower.
    pub fn restore(
        name: impl Into<String>,
        slug: impl Into<String>,
        rating: f64,
        peak_rating: f64,
        matches_played: u32,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            rating,
            peak_rating: peak_rating.max(rating),
            matches_played,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn peak_rating(&self) -> f64 {
        self.peak_rating
    }

    pub fn matches_played(&self) -> u32 {
        self.matches_played
    }

    /// Expert status depends on the peak, so it survives a later rating drop.
    pub fn k_tier(&self, settings: &RatingSettings) -> KTier {
        if self.peak_rating >= settings.expert_rating {
            KTier::Expert
        } else if self.matches_played < settings.new_team_matches {
            KTier::New
        } else {
            KTier::Regular
        }
    }

    pub fn k_factor(&self, settings: &RatingSettings) -> f64 {
        self.k_tier(settings).k_factor(settings)
    }

    pub(crate) fn apply_delta(&mut self, delta: f64) {
        self.matches_played += 1;
        self.rating += delta;
        if self.rating > self.peak_rating {
            self.peak_rating = self.rating;
        }
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.slug == other.slug
    }
}

impl Eq for Team {}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slug.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> RatingSettings {
        RatingSettings::default()
    }

    #[test]
    fn test_new_team_starts_at_default_rating() {
        let team = Team::new("Rigor Mortis", "rigor-mortis", 1500.0);

        assert_eq!(team.rating(), 1500.0);
        assert_eq!(team.peak_rating(), 1500.0);
        assert_eq!(team.matches_played(), 0);
    }

    #[test]
    fn test_equality_uses_slug_only() {
        let a = Team::new("Rigor Mortis", "rigor-mortis", 1500.0);
        let b = Team::restore("Rigor Mortis Berlin", "rigor-mortis", 1800.0, 1900.0, 12);
        let c = Team::new("Rigor Mortis", "rigor-mortis-2", 1500.0);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_restore_keeps_peak_above_rating() {
        let team = Team::restore("Falco", "falco", 1700.0, 1600.0, 5);
        assert_eq!(team.peak_rating(), 1700.0);
    }

    #[test]
    fn test_new_team_tier_boundary() {
        let settings = settings();
        let almost = Team::restore("A", "a", 1500.0, 1500.0, 29);
        let regular = Team::restore("A", "a", 1500.0, 1500.0, 30);

        assert_eq!(almost.k_tier(&settings), KTier::New);
        assert_eq!(almost.k_factor(&settings), 40.0);
        assert_eq!(regular.k_tier(&settings), KTier::Regular);
        assert_eq!(regular.k_factor(&settings), 20.0);
    }

    #[test]
    fn test_expert_tier_overrides_new_team_bonus() {
        let settings = settings();
        let fresh_expert = Team::restore("A", "a", 2300.0, 2400.0, 3);

        assert_eq!(fresh_expert.k_tier(&settings), KTier::Expert);
        assert_eq!(fresh_expert.k_factor(&settings), 10.0);
    }

    #[test]
    fn test_apply_delta_tracks_peak_and_count() {
        let mut team = Team::new("A", "a", 1500.0);

        team.apply_delta(20.0);
        team.apply_delta(-35.0);

        assert_eq!(team.rating(), 1485.0);
        assert_eq!(team.peak_rating(), 1520.0);
        assert_eq!(team.matches_played(), 2);
    }
}
