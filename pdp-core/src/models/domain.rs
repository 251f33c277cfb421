use crate::models::problem::{Catalog, Fleet, TransportCost};
use std::sync::Arc;

/// Defines a pickup and delivery problem.
pub struct Problem {
    /// Specifies all tasks.
    pub catalog: Arc<Catalog>,

    /// Specifies used fleet.
    pub fleet: Arc<Fleet>,

    /// Specifies transport costs.
    pub transport: Arc<dyn TransportCost + Send + Sync>,
}
