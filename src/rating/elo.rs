use std::collections::HashSet;

use log::debug;

use super::matches::{Match, MatchId};
use super::registry::TeamRegistry;
use super::team::Team;
use crate::config::RatingSettings;
use crate::errors::RatingError;

/// Rating movement of one team in one match
#[derive(Debug, Clone, PartialEq)]
pub struct RatingChange {
    pub slug: String,
    pub k_factor: f64,
    pub expected: f64,
    pub actual: f64,
    pub before: f64,
    pub after: f64,
}

impl RatingChange {
    pub fn delta(&self) -> f64 {
        self.after - self.before
    }
}

/// Logistic win expectation: E_A = 1 / (1 + 10^((R_B - R_A) / 400))
pub fn expected_score(rating: f64, opponent_rating: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent_rating - rating) / 400.0))
}

/// 1 for a win, 0 for a loss, 0.5 when nobody won
fn actual_score(game: &Match, slug: &str) -> f64 {
    match game.winner() {
        None => 0.5,
        Some(winner) if winner == slug => 1.0,
        Some(_) => 0.0,
    }
}

/// Applies Elo updates to a registry, one match at a time.
///
/// Ratings depend on the order matches are played in; callers replay them
/// chronologically. Each `MatchId` is accepted once.
#[derive(Debug, Clone)]
pub struct EloEngine {
    settings: RatingSettings,
    played: HashSet<MatchId>,
}

impl EloEngine {
    pub fn new(settings: RatingSettings) -> Self {
        Self {
            settings,
            played: HashSet::new(),
        }
    }

    pub fn settings(&self) -> &RatingSettings {
        &self.settings
    }

    pub fn has_played(&self, id: &MatchId) -> bool {
        self.played.contains(id)
    }

    pub fn matches_played(&self) -> usize {
        self.played.len()
    }

    /// Update both teams of `game`.
    ///
    /// Expectations and K-factors are computed from the state before either
    /// team is touched. Nothing is mutated when an error is returned.
    pub fn play(
        &mut self,
        registry: &mut TeamRegistry,
        game: &Match,
    ) -> Result<[RatingChange; 2], RatingError> {
        if self.has_played(game.id()) {
            return Err(RatingError::AlreadyPlayed {
                id: game.id().clone(),
            });
        }

        let [slug_a, slug_b] = game.teams();
        let change_a = self.compute_change(registry, game, slug_a, slug_b)?;
        let change_b = self.compute_change(registry, game, slug_b, slug_a)?;

        for change in [&change_a, &change_b] {
            if let Some(team) = registry.get_mut(&change.slug) {
                team.apply_delta(change.delta());
            }
        }
        self.played.insert(game.id().clone());

        debug!(
            "{}: {} {:.1} -> {:.1} (K={}), {} {:.1} -> {:.1} (K={})",
            game.id(),
            change_a.slug,
            change_a.before,
            change_a.after,
            change_a.k_factor,
            change_b.slug,
            change_b.before,
            change_b.after,
            change_b.k_factor
        );

        Ok([change_a, change_b])
    }

    fn compute_change(
        &self,
        registry: &TeamRegistry,
        game: &Match,
        slug: &str,
        opponent_slug: &str,
    ) -> Result<RatingChange, RatingError> {
        let team = lookup(registry, slug)?;
        let opponent = lookup(registry, opponent_slug)?;

        let k_factor = team.k_factor(&self.settings);
        let expected = expected_score(team.rating(), opponent.rating());
        let actual = actual_score(game, slug);
        let before = team.rating();

        Ok(RatingChange {
            slug: slug.to_string(),
            k_factor,
            expected,
            actual,
            before,
            after: before + k_factor * (actual - expected),
        })
    }
}

impl Default for EloEngine {
    fn default() -> Self {
        Self::new(RatingSettings::default())
    }
}

fn lookup<'a>(registry: &'a TeamRegistry, slug: &str) -> Result<&'a Team, RatingError> {
    registry.get(slug).ok_or_else(|| RatingError::UnknownTeam {
        slug: slug.to_string(),
    })
}
