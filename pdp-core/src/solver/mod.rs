//! Contains the stochastic local search driver and its building blocks.
//!
//! The driver holds the current solution and iterates: generate neighbor candidates, pick the
//! cheapest ones, update the best solution seen on strict improvement and let the acceptance
//! policy decide whether the chosen candidate becomes the new current solution.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::construction::create_initial_solution;
use crate::models::common::{Cost, Location, Weight};
use crate::models::problem::TaskId;
use crate::models::solution::Solution;
use crate::models::Problem;
use crate::utils::{compare_floats, DefaultRandom, Random};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

mod acceptance;
pub use self::acceptance::{Acceptance, RandomProbability};

mod cost;
pub use self::cost::CostEvaluator;

pub mod search;
use self::search::{Candidate, Neighborhood};

mod telemetry;
pub use self::telemetry::{create_stdout_logger, InfoLogger, Telemetry};

mod termination;
pub use self::termination::{CompositeTermination, MaxIteration, MaxTime, Termination};

/// Represents errors which can be raised by the solver.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverError {
    /// A task cannot be carried by the largest vehicle, so the problem is unsolvable.
    InfeasibleTask {
        /// An id of the task.
        task: TaskId,
        /// The task weight.
        weight: Weight,
        /// The largest capacity in the fleet.
        capacity: Weight,
    },
    /// A non-finite or negative distance was returned by the transport collaborator.
    InvalidCost {
        /// A leg start location.
        from: Location,
        /// A leg end location.
        to: Location,
        /// The malformed distance value.
        value: f64,
    },
    /// An invalid search configuration parameter.
    InvalidConfig(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InfeasibleTask { task, weight, capacity } => {
                write!(f, "task {task} with weight {weight} does not fit the largest vehicle capacity {capacity}")
            }
            SolverError::InvalidCost { from, to, value } => {
                write!(f, "invalid distance {value} between locations {from} and {to}")
            }
            SolverError::InvalidConfig(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for SolverError {}

/// A configuration of the search driver.
pub struct SearchConfig {
    /// A maximum amount of iterations.
    pub max_iterations: usize,
    /// A probability used by the acceptance policy.
    pub acceptance_probability: f64,
    /// A seed of the random stream, `None` seeds from entropy.
    pub seed: Option<u64>,
    /// An optional wall-clock budget checked at the top of each iteration.
    pub max_time: Option<Duration>,
    /// Specifies how often telemetry logs progress, zero disables interval logging.
    pub log_interval: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_iterations: 10_000, acceptance_probability: 0.8, seed: None, max_time: None, log_interval: 1_000 }
    }
}

impl SearchConfig {
    fn validate(&self) -> Result<(), SolverError> {
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig("max_iterations must be positive".to_string()));
        }

        if !self.acceptance_probability.is_finite() || !(0. ..=1.).contains(&self.acceptance_probability) {
            return Err(SolverError::InvalidConfig(format!(
                "acceptance_probability must be within [0, 1], got {}",
                self.acceptance_probability
            )));
        }

        Ok(())
    }
}

/// Keeps track of the search progress.
///
/// The state is created once from the initial solution, its current and best fields mutate
/// every iteration and only the best solution survives the search.
pub struct SearchState {
    /// The current solution of the walk.
    pub current: Solution,
    /// Memoized per-route costs of the current solution.
    pub current_costs: Vec<Cost>,
    /// The total cost of the current solution.
    pub current_cost: Cost,
    /// The best solution seen so far.
    pub best: Solution,
    /// The cost of the best solution seen so far.
    pub best_cost: Cost,
    /// An iteration counter.
    pub iteration: usize,
    /// Counts iterations which produced no candidates.
    pub empty_neighborhoods: usize,
}

impl SearchState {
    fn new(initial: Solution, route_costs: Vec<Cost>) -> Self {
        let cost = route_costs.iter().sum();

        Self {
            current: initial.clone(),
            current_costs: route_costs,
            current_cost: cost,
            best: initial,
            best_cost: cost,
            iteration: 0,
            empty_neighborhoods: 0,
        }
    }
}

/// Solves a pickup and delivery problem with stochastic local search.
pub struct Solver {
    problem: Arc<Problem>,
    config: SearchConfig,
    random: Arc<dyn Random + Send + Sync>,
    telemetry: Telemetry,
}

impl Solver {
    /// Creates a new instance of `Solver` logging to standard output.
    pub fn new(problem: Arc<Problem>, config: SearchConfig) -> Result<Self, SolverError> {
        Self::new_with_logger(problem, config, create_stdout_logger())
    }

    /// Creates a new instance of `Solver` with a custom logger.
    pub fn new_with_logger(
        problem: Arc<Problem>,
        config: SearchConfig,
        logger: InfoLogger,
    ) -> Result<Self, SolverError> {
        config.validate()?;

        let random: Arc<dyn Random + Send + Sync> = match config.seed {
            Some(seed) => Arc::new(DefaultRandom::new_with_seed(seed)),
            None => Arc::new(DefaultRandom::default()),
        };
        let telemetry = Telemetry::new(logger, config.log_interval);

        Ok(Self { problem, config, random, telemetry })
    }

    /// Runs the search and returns the best solution found within the budget.
    pub fn solve(&self) -> Result<Solution, SolverError> {
        let evaluator = CostEvaluator::new(&self.problem);
        let initial = create_initial_solution(&self.problem)?;
        let route_costs = evaluator.route_costs(&initial)?;

        let mut state = SearchState::new(initial, route_costs);
        self.telemetry.on_initial(state.current_cost);

        let neighborhood = Neighborhood::new(&self.problem);
        let acceptance = RandomProbability::new(self.config.acceptance_probability);
        let termination = self.create_termination();

        while !termination.is_termination(&state) {
            step(&mut state, &neighborhood, &acceptance, self.random.as_ref())?;
            self.telemetry.on_iteration(&state);
        }

        self.telemetry.on_result(&state);

        Ok(state.best)
    }

    fn create_termination(&self) -> CompositeTermination {
        let mut terminations: Vec<Box<dyn Termination>> =
            vec![Box::new(MaxIteration::new(self.config.max_iterations))];

        if let Some(limit) = self.config.max_time {
            terminations.push(Box::new(MaxTime::new(limit)));
        }

        CompositeTermination::new(terminations)
    }
}

/// Performs a single search iteration: explores the neighborhood, picks one of the cheapest
/// candidates at random, updates the best solution on strict improvement and applies the
/// acceptance policy to the current one.
fn step(
    state: &mut SearchState,
    neighborhood: &Neighborhood,
    acceptance: &dyn Acceptance,
    random: &(dyn Random + Send + Sync),
) -> Result<(), SolverError> {
    let candidates = neighborhood.explore(&state.current, &state.current_costs, random)?;

    if candidates.is_empty() {
        state.empty_neighborhoods += 1;
        state.iteration += 1;
        return Ok(());
    }

    let chosen = select_cheapest_candidate(candidates, random);

    if compare_floats(chosen.cost, state.best_cost) == Ordering::Less {
        state.best = chosen.solution.clone();
        state.best_cost = chosen.cost;
    }

    if acceptance.is_accepted(state.current_cost, chosen.cost, random) {
        state.current = chosen.solution;
        state.current_costs = chosen.route_costs;
        state.current_cost = chosen.cost;
    }

    state.iteration += 1;

    Ok(())
}

/// Returns one of the minimum cost candidates chosen uniformly at random, ties kept.
fn select_cheapest_candidate(candidates: Vec<Candidate>, random: &(dyn Random + Send + Sync)) -> Candidate {
    let min_cost = candidates
        .iter()
        .map(|candidate| candidate.cost)
        .min_by(|a, b| compare_floats(*a, *b))
        .expect("no candidates to select from");

    let mut cheapest = candidates
        .into_iter()
        .filter(|candidate| compare_floats(candidate.cost, min_cost) == Ordering::Equal)
        .collect::<Vec<_>>();

    let index = random.uniform_int(0, cheapest.len() as i32 - 1) as usize;

    cheapest.swap_remove(index)
}
