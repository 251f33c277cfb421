//! Solution domain models.

mod route;
pub use self::route::{Activity, Route};

mod solution;
pub use self::solution::Solution;
