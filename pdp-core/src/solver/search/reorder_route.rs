#[cfg(test)]
#[path = "../../../tests/unit/solver/search/reorder_route_test.rs"]
mod reorder_route_test;

use crate::models::common::{Cost, Weight};
use crate::models::problem::{Catalog, Vehicle};
use crate::models::solution::{Activity, Route};
use crate::solver::{CostEvaluator, SolverError};
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Relocates the first task of the route to its best position.
///
/// Both activities of the task are removed, then every capacity-feasible pickup placement
/// other than the original one is combined with every delivery placement strictly after it.
/// Delivery enumeration stops as soon as the running load would exceed capacity, since any
/// later position is then infeasible as well. Among all enumerated routes only the one with
/// the minimum cost survives.
///
/// Returns `None` when the route holds at most one task or no alternative placement is
/// capacity-feasible.
pub(crate) fn reorder_route(
    route: &Route,
    vehicle: &Vehicle,
    catalog: &Catalog,
    evaluator: &CostEvaluator,
) -> Result<Option<(Route, Cost)>, SolverError> {
    if route.len() <= 2 {
        return Ok(None);
    }

    let task = route.first_task().expect("route is empty");
    let weight = catalog.get(task).weight;

    let mut reduced = route.clone();
    reduced.remove_task(task);

    // running load of the reduced route after its first i activities
    let loads = prefix_loads(&reduced, catalog);

    let mut best: Option<(Route, Cost)> = None;

    // the task was first by position, so its original pickup index is zero
    for pickup_index in 1..=reduced.len() {
        if loads[pickup_index] + weight > vehicle.capacity {
            continue;
        }

        let mut delivery_index = pickup_index + 1;
        loop {
            let mut candidate = reduced.clone();
            candidate.insert(pickup_index, Activity::Pickup(task));
            candidate.insert(delivery_index, Activity::Delivery(task));
            debug_assert!(candidate.is_feasible(vehicle.capacity, catalog));

            let cost = evaluator.route_cost(&candidate, vehicle)?;
            if best.as_ref().map_or(true, |(_, best_cost)| compare_floats(cost, *best_cost) == Ordering::Less) {
                best = Some((candidate, cost));
            }

            // extending past the next reduced activity keeps the task on board
            let traversed = delivery_index - 1;
            if traversed >= reduced.len() || loads[traversed + 1] + weight > vehicle.capacity {
                break;
            }

            delivery_index += 1;
        }
    }

    Ok(best)
}

fn prefix_loads(route: &Route, catalog: &Catalog) -> Vec<Weight> {
    let mut loads = Vec::with_capacity(route.len() + 1);
    let mut load: Weight = 0;

    loads.push(load);
    for activity in route.activities() {
        let weight = catalog.get(activity.task()).weight;
        match activity {
            Activity::Pickup(_) => load += weight,
            Activity::Delivery(_) => load -= weight,
        }
        loads.push(load);
    }

    loads
}
