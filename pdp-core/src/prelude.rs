//! This module reimports commonly used types.

pub use crate::models::common::{Cost, Distance, Location, Weight};
pub use crate::models::problem::{Catalog, Fleet, MatrixTransportCost, Task, TaskId, TransportCost, Vehicle, VehicleId};
pub use crate::models::solution::{Activity, Route, Solution};
pub use crate::models::Problem;

pub use crate::construction::create_initial_solution;

pub use crate::solver::{CostEvaluator, SearchConfig, Solver, SolverError};
pub use crate::solver::{InfoLogger, Telemetry};

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Random;
