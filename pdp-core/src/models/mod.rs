//! A collection of models to represent problem and solution in Pickup and Delivery domain.

mod domain;
pub use self::domain::*;

pub mod common;
pub mod problem;
pub mod solution;
