//! Data loading, splitting, and prediction output
//!
//! External collaborators around the training core: none of this touches
//! the optimizer beyond the `(X, y)` shape contract.

pub mod csv;
pub mod output;
pub mod split;

pub use self::csv::*;
pub use self::output::*;
pub use self::split::*;
