#[cfg(test)]
#[path = "../../tests/unit/solver/cost_test.rs"]
mod cost_test;

use crate::models::common::Cost;
use crate::models::problem::Vehicle;
use crate::models::solution::{Activity, Route, Solution};
use crate::models::Problem;
use crate::solver::SolverError;

/// Computes travel costs of routes and solutions.
///
/// A route cost is a pure function of its contents: the walk starts at the vehicle's
/// start location and accumulates leg distances multiplied by the vehicle's cost per
/// distance unit. Malformed distances are rejected here, never propagated into comparisons.
pub struct CostEvaluator<'a> {
    problem: &'a Problem,
}

impl<'a> CostEvaluator<'a> {
    /// Creates a new instance of `CostEvaluator`.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Returns travel cost of a single route performed by the given vehicle.
    pub fn route_cost(&self, route: &Route, vehicle: &Vehicle) -> Result<Cost, SolverError> {
        let mut current = vehicle.start;
        let mut total = 0.;

        for activity in route.activities() {
            let task = self.problem.catalog.get(activity.task());
            let next = match activity {
                Activity::Pickup(_) => task.pickup,
                Activity::Delivery(_) => task.delivery,
            };

            let leg = self.problem.transport.distance(current, next);
            if !leg.is_finite() || leg < 0. {
                return Err(SolverError::InvalidCost { from: current, to: next, value: leg });
            }

            total += leg;
            current = next;
        }

        Ok(total * vehicle.distance_cost)
    }

    /// Returns per-route costs of the whole solution ordered by vehicle id.
    pub fn route_costs(&self, solution: &Solution) -> Result<Vec<Cost>, SolverError> {
        solution
            .routes()
            .iter()
            .zip(self.problem.fleet.iter())
            .map(|(route, vehicle)| self.route_cost(route, vehicle))
            .collect()
    }

    /// Returns the total travel cost of a solution.
    pub fn solution_cost(&self, solution: &Solution) -> Result<Cost, SolverError> {
        Ok(self.route_costs(solution)?.into_iter().sum())
    }
}
