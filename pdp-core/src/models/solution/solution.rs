#[cfg(test)]
#[path = "../../../tests/unit/models/solution/solution_test.rs"]
mod solution_test;

use crate::models::problem::{Catalog, VehicleId};
use crate::models::solution::{Activity, Route};
use rustc_hash::FxHashSet;

/// Represents an assignment of every task to exactly one position in exactly one vehicle's route.
///
/// Solutions are value-like snapshots: operators clone a solution and modify the copy, the
/// original is never mutated in place. Structural equality and hashing ignore container
/// identity, so solutions with identical route contents de-duplicate in a hash set.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a new solution with an empty route per vehicle.
    pub fn empty(fleet_size: usize) -> Self {
        Self { routes: vec![Route::default(); fleet_size] }
    }

    /// Creates a new solution from given routes.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Returns the route of the given vehicle.
    pub fn route(&self, vehicle: VehicleId) -> &Route {
        &self.routes[vehicle]
    }

    /// Returns the route of the given vehicle as mutable.
    pub fn route_mut(&mut self, vehicle: VehicleId) -> &mut Route {
        &mut self.routes[vehicle]
    }

    /// Returns all routes ordered by vehicle id.
    pub fn routes(&self) -> &[Route] {
        self.routes.as_slice()
    }

    /// Checks the partition invariant: every catalog task appears exactly once
    /// as pickup and exactly once as delivery across all routes combined.
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        let mut pickups = FxHashSet::default();
        let mut deliveries = FxHashSet::default();

        let unique = self.routes.iter().flat_map(|route| route.activities()).all(|activity| match *activity {
            Activity::Pickup(id) => pickups.insert(id),
            Activity::Delivery(id) => deliveries.insert(id),
        });

        unique && pickups.len() == catalog.len() && deliveries.len() == catalog.len()
    }
}
