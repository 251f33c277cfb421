#[cfg(test)]
#[path = "../../../tests/unit/solver/search/reassign_vehicle_test.rs"]
mod reassign_vehicle_test;

use super::{reorder_route, Candidate};
use crate::models::common::Cost;
use crate::models::problem::{TaskId, VehicleId};
use crate::models::solution::Solution;
use crate::models::Problem;
use crate::solver::{CostEvaluator, SolverError};

/// Moves the first task of the reference route to the front of the target vehicle's route,
/// pickup immediately followed by delivery, and re-optimizes both touched routes.
///
/// The caller guarantees that the task's weight is strictly below the target capacity, which
/// makes the move itself feasible: the donor only loses load and the recipient serves the
/// task before any previously assigned activity.
pub(crate) fn reassign_task(
    problem: &Problem,
    evaluator: &CostEvaluator,
    current: &Solution,
    current_costs: &[Cost],
    reference: VehicleId,
    target: VehicleId,
    task: TaskId,
) -> Result<Candidate, SolverError> {
    let mut solution = current.clone();
    solution.route_mut(reference).remove_task(task);
    solution.route_mut(target).push_front(task);

    // routes untouched by the move keep their memoized costs
    let mut route_costs = current_costs.to_vec();

    for vehicle_id in [reference, target] {
        let vehicle = problem.fleet.get(vehicle_id);

        route_costs[vehicle_id] =
            match reorder_route(solution.route(vehicle_id), vehicle, &problem.catalog, evaluator)? {
                Some((route, cost)) => {
                    *solution.route_mut(vehicle_id) = route;
                    cost
                }
                None => evaluator.route_cost(solution.route(vehicle_id), vehicle)?,
            };

        debug_assert!(solution.route(vehicle_id).is_feasible(vehicle.capacity, &problem.catalog));
    }

    debug_assert!(solution.is_complete(&problem.catalog));

    let cost = route_costs.iter().sum();

    Ok(Candidate { solution, route_costs, cost })
}
