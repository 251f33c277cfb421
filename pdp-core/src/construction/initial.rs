#[cfg(test)]
#[path = "../../tests/unit/construction/initial_test.rs"]
mod initial_test;

use crate::models::solution::Solution;
use crate::models::Problem;
use crate::solver::SolverError;

/// Creates an initial solution by assigning every task to the vehicle with the largest
/// capacity, appending pickup immediately followed by delivery in catalog order.
///
/// Fails with `SolverError::InfeasibleTask` when a task's weight is not strictly less than
/// that capacity: no perturbation can make such a task transportable, so the problem is
/// unsolvable under this model.
pub fn create_initial_solution(problem: &Problem) -> Result<Solution, SolverError> {
    let vehicle = problem.fleet.largest();
    let mut solution = Solution::empty(problem.fleet.len());

    for task in problem.catalog.iter() {
        if task.weight >= vehicle.capacity {
            return Err(SolverError::InfeasibleTask {
                task: task.id,
                weight: task.weight,
                capacity: vehicle.capacity,
            });
        }

        solution.route_mut(vehicle.id).push_back(task.id);
    }

    debug_assert!(solution.is_complete(&problem.catalog));
    debug_assert!(solution.route(vehicle.id).is_feasible(vehicle.capacity, &problem.catalog));

    Ok(solution)
}
