#[cfg(test)]
#[path = "../../tests/unit/solver/termination_test.rs"]
mod termination_test;

use crate::solver::SearchState;
use crate::utils::Timer;
use std::time::Duration;

/// Specifies the logic which decides when the search should stop.
pub trait Termination {
    /// Returns true if the search should be stopped.
    fn is_termination(&self, state: &SearchState) -> bool;
}

/// Stops when the iteration budget is exhausted.
pub struct MaxIteration {
    limit: usize,
}

impl MaxIteration {
    /// Creates a new instance of `MaxIteration`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxIteration {
    fn is_termination(&self, state: &SearchState) -> bool {
        state.iteration >= self.limit
    }
}

/// Stops when the wall-clock budget is exhausted, handing back the best solution found so far.
pub struct MaxTime {
    limit: Duration,
    timer: Timer,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime` which starts counting immediately.
    pub fn new(limit: Duration) -> Self {
        Self { limit, timer: Timer::start() }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, _: &SearchState) -> bool {
        self.timer.elapsed_millis() >= self.limit.as_millis()
    }
}

/// A termination which stops when any of its inner terminations is satisfied.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, state: &SearchState) -> bool {
        self.terminations.iter().any(|termination| termination.is_termination(state))
    }
}
