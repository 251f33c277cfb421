#[cfg(test)]
#[path = "../../tests/unit/solver/acceptance_test.rs"]
mod acceptance_test;

use crate::models::common::Cost;
use crate::utils::{compare_floats, Random};
use std::cmp::Ordering;

/// Specifies the logic which decides whether the search moves to a candidate solution.
pub trait Acceptance {
    /// Returns true if the current solution should be replaced by the candidate.
    fn is_accepted(&self, current_cost: Cost, candidate_cost: Cost, random: &(dyn Random + Send + Sync)) -> bool;
}

/// A fixed-probability acceptance rule: a single uniform draw `r` in [0, 1) decides both
/// branches. An improving candidate is adopted iff `r < probability`, an equal or worse
/// one iff `r >= probability`, which lets the walk escape local optima with probability
/// `1 - probability` while usually moving downhill.
///
/// Note that both outcomes couple to the same threshold: `probability` is a tunable
/// hyperparameter, not the conventional "accept improvements this often" annealing knob.
pub struct RandomProbability {
    probability: f64,
}

impl RandomProbability {
    /// Creates a new instance of `RandomProbability`.
    pub fn new(probability: f64) -> Self {
        assert!((0. ..=1.).contains(&probability));

        Self { probability }
    }
}

impl Default for RandomProbability {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl Acceptance for RandomProbability {
    fn is_accepted(&self, current_cost: Cost, candidate_cost: Cost, random: &(dyn Random + Send + Sync)) -> bool {
        let draw = random.uniform_real(0., 1.);

        if compare_floats(candidate_cost, current_cost) == Ordering::Less {
            draw < self.probability
        } else {
            draw >= self.probability
        }
    }
}
