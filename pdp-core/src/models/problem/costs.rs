use crate::models::common::{Distance, Location};

/// Provides the way to get travel distances between locations from the topology collaborator.
/// Distances are assumed to be metric: symmetric, non-negative and zero iff locations are equal.
pub trait TransportCost {
    /// Returns travel distance between two locations.
    fn distance(&self, from: Location, to: Location) -> Distance;
}

/// A transport cost implementation backed by a row-major distance matrix.
pub struct MatrixTransportCost {
    size: usize,
    matrix: Vec<Distance>,
}

impl MatrixTransportCost {
    /// Creates a new instance of `MatrixTransportCost` from a row-major matrix of given dimension.
    pub fn new(matrix: Vec<Distance>, size: usize) -> Self {
        assert_eq!(matrix.len(), size * size);

        Self { size, matrix }
    }
}

impl TransportCost for MatrixTransportCost {
    fn distance(&self, from: Location, to: Location) -> Distance {
        self.matrix[from * self.size + to]
    }
}
