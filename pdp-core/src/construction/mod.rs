//! Provides the logic to build an initial feasible solution.

mod initial;
pub use self::initial::create_initial_solution;
