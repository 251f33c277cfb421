//! Problem domain models.

mod catalog;
pub use self::catalog::*;

mod costs;
pub use self::costs::*;

mod fleet;
pub use self::fleet::*;
