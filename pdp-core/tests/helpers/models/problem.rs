use crate::models::common::{Location, Weight};
use crate::models::problem::{Catalog, Fleet, MatrixTransportCost, Task, TaskId, Vehicle, VehicleId};
use crate::models::Problem;
use std::sync::Arc;

pub fn test_task(id: TaskId, weight: Weight, pickup: Location, delivery: Location) -> Task {
    Task { id, weight, pickup, delivery }
}

pub fn test_vehicle(id: VehicleId, capacity: Weight, start: Location) -> Vehicle {
    Vehicle { id, capacity, start, distance_cost: 1. }
}

/// Creates a catalog of three tasks with weights 4, 6 and 3 on a three location topology.
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![test_task(0, 4, 1, 2), test_task(1, 6, 2, 0), test_task(2, 3, 0, 1)])
}

/// Creates a symmetric distance matrix for three fully connected locations:
/// d(0, 1) = 4, d(0, 2) = 5, d(1, 2) = 3.
pub fn test_matrix_transport() -> MatrixTransportCost {
    #[rustfmt::skip]
    let matrix = vec![
        0., 4., 5.,
        4., 0., 3.,
        5., 3., 0.,
    ];

    MatrixTransportCost::new(matrix, 3)
}

/// Creates a problem with two vehicles (capacities 10 and 5, both starting at location 0)
/// and the three task catalog.
pub fn create_test_problem() -> Problem {
    create_test_problem_with_vehicles(vec![test_vehicle(0, 10, 0), test_vehicle(1, 5, 0)])
}

pub fn create_test_problem_with_vehicles(vehicles: Vec<Vehicle>) -> Problem {
    Problem {
        catalog: Arc::new(test_catalog()),
        fleet: Arc::new(Fleet::new(vehicles)),
        transport: Arc::new(test_matrix_transport()),
    }
}

pub fn create_test_problem_with_catalog(catalog: Catalog, vehicles: Vec<Vehicle>) -> Problem {
    Problem {
        catalog: Arc::new(catalog),
        fleet: Arc::new(Fleet::new(vehicles)),
        transport: Arc::new(test_matrix_transport()),
    }
}
