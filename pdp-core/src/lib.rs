//! Core crate contains building blocks to solve a ***Pickup and Delivery Problem*** with
//! stochastic local search: a solution model with capacity and precedence feasibility rules,
//! neighborhood generation operators, cost evaluation and a randomized acceptance policy.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod solver;
pub mod utils;

pub mod prelude;
