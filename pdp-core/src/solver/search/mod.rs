//! Contains neighborhood generation operators of the stochastic local search.

#[cfg(test)]
#[path = "../../../tests/unit/solver/search/neighborhood_test.rs"]
mod neighborhood_test;

use crate::models::common::Cost;
use crate::models::problem::VehicleId;
use crate::models::solution::{Route, Solution};
use crate::models::Problem;
use crate::solver::{CostEvaluator, SolverError};
use crate::utils::{parallel_into_collect, Random};
use rustc_hash::FxHashSet;

mod reassign_vehicle;
pub(crate) use self::reassign_vehicle::reassign_task;

mod reorder_route;
pub(crate) use self::reorder_route::reorder_route;

/// A fully costed candidate solution produced by the neighborhood.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// A candidate solution.
    pub solution: Solution,
    /// Memoized per-route costs ordered by vehicle id.
    pub route_costs: Vec<Cost>,
    /// The total solution cost.
    pub cost: Cost,
}

/// Produces the set of feasible neighbor solutions from a current solution.
///
/// One call picks a reference vehicle at random, applies the reassign-vehicle operator for
/// every feasible target vehicle and locally re-optimizes both touched routes with the
/// reorder-route operator. Candidates with identical route contents are de-duplicated.
pub struct Neighborhood<'a> {
    problem: &'a Problem,
}

impl<'a> Neighborhood<'a> {
    /// Creates a new instance of `Neighborhood`.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Returns costed neighbor candidates of the given solution, an empty vector when
    /// no reference route can be chosen or no target vehicle can take the task over.
    pub fn explore(
        &self,
        current: &Solution,
        current_costs: &[Cost],
        random: &(dyn Random + Send + Sync),
    ) -> Result<Vec<Candidate>, SolverError> {
        let reference = match select_reference_vehicle(current, random) {
            Some(vehicle) => vehicle,
            None => return Ok(Vec::new()),
        };

        let task = current.route(reference).first_task().expect("reference route is empty");
        let weight = self.problem.catalog.get(task).weight;

        let targets = self
            .problem
            .fleet
            .iter()
            .filter(|vehicle| vehicle.id != reference && weight < vehicle.capacity)
            .map(|vehicle| vehicle.id)
            .collect::<Vec<_>>();

        // candidates are independent, only the reference selection above draws randomness
        let evaluator = CostEvaluator::new(self.problem);
        let candidates = parallel_into_collect(targets, |target| {
            reassign_task(self.problem, &evaluator, current, current_costs, reference, target, task)
        });

        let mut unique = FxHashSet::default();
        candidates.into_iter().try_fold(Vec::new(), |mut acc, candidate| {
            let candidate = candidate?;
            if unique.insert(candidate.solution.clone()) {
                acc.push(candidate);
            }

            Ok(acc)
        })
    }
}

/// Selects the reference vehicle uniformly over the whole fleet, retrying while the chosen
/// route is empty. Returns `None` when every route is empty.
pub(crate) fn select_reference_vehicle(
    solution: &Solution,
    random: &(dyn Random + Send + Sync),
) -> Option<VehicleId> {
    if solution.routes().iter().all(Route::is_empty) {
        return None;
    }

    loop {
        let index = random.uniform_int(0, solution.routes().len() as i32 - 1) as usize;
        if !solution.route(index).is_empty() {
            return Some(index);
        }
    }
}
