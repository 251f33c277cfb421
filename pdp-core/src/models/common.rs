//! Common models.

/// Specifies location type, an opaque index assigned by the topology collaborator.
pub type Location = usize;

/// Specifies cost value.
pub type Cost = f64;

/// Represents a travel distance.
pub type Distance = f64;

/// Represents a weight of carried goods.
pub type Weight = i32;
