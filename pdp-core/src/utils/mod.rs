//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod parallel;
pub use self::parallel::*;

mod random;
pub use self::random::*;

mod timing;
pub use self::timing::*;
