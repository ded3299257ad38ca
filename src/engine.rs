//! Reviewer selection policy.
//!
//! All decision-making for reviewer assignment lives here: who is eligible at
//! PR creation, who is eligible to replace an outgoing reviewer, and how the
//! pick is made. The pick itself goes through [`ReviewerSelector`] so callers
//! can substitute a deterministic strategy in tests; the production
//! implementation samples uniformly at random.

use rand::seq::SliceRandom;

use crate::db::models::User;

/// At most this many reviewers are assigned when a PR is created.
pub const MAX_INITIAL_REVIEWERS: usize = 2;

pub trait ReviewerSelector: Send + Sync {
    /// Pick up to `count` distinct reviewers from the candidate pool.
    fn pick_many(&self, candidates: &[User], count: usize) -> Vec<String>;

    /// Pick a single reviewer from the candidate pool, if any.
    fn pick_one(&self, candidates: &[User]) -> Option<String>;
}

/// Uniform random selection without replacement.
pub struct RandomSelector;

impl ReviewerSelector for RandomSelector {
    fn pick_many(&self, candidates: &[User], count: usize) -> Vec<String> {
        let mut rng = rand::thread_rng();
        candidates
            .choose_multiple(&mut rng, count)
            .map(|u| u.user_id.clone())
            .collect()
    }

    fn pick_one(&self, candidates: &[User]) -> Option<String> {
        let mut rng = rand::thread_rng();
        candidates.choose(&mut rng).map(|u| u.user_id.clone())
    }
}

/// Team members eligible for initial assignment: active and not the author.
pub fn initial_candidates(members: &[User], author_id: &str) -> Vec<User> {
    members
        .iter()
        .filter(|m| m.is_active && m.user_id != author_id)
        .cloned()
        .collect()
}

/// Team members eligible to replace `old_reviewer_id`: active, not the
/// outgoing reviewer, and not already assigned to the PR. The author is not
/// excluded here; only initial selection draws around the author.
pub fn replacement_candidates(
    members: &[User],
    old_reviewer_id: &str,
    current_reviewers: &[String],
) -> Vec<User> {
    members
        .iter()
        .filter(|m| {
            m.is_active
                && m.user_id != old_reviewer_id
                && !current_reviewers.iter().any(|r| r == &m.user_id)
        })
        .cloned()
        .collect()
}

/// Select `min(2, |candidates|)` reviewers for a fresh PR. An empty candidate
/// set yields an empty reviewer set, not an error.
pub fn select_initial_reviewers(
    selector: &dyn ReviewerSelector,
    members: &[User],
    author_id: &str,
) -> Vec<String> {
    let candidates = initial_candidates(members, author_id);
    selector.pick_many(&candidates, MAX_INITIAL_REVIEWERS)
}
