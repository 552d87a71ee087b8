//! Exact 0/1 knapsack solving via full-table dynamic programming.
//!
//! Given items with integer values and weights and a weight capacity, the
//! solver computes the maximum achievable total value together with one
//! subset of items that attains it. The solve runs in two phases:
//! 1. [`ValueTable::build`] fills the `(items + 1) × (capacity + 1)`
//!    optimal-value table by the classic knapsack recurrence.
//! 2. [`backtrace::backtrace`] walks the finished table backwards to
//!    recover which items the tabled optimum took.
//!
//! ## Quick start
//! ```
//! use knapsack_dp::{solve, Instance, Item};
//!
//! let instance = Instance::new(
//!     vec![Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)],
//!     50,
//! );
//! let solution = solve(&instance);
//! assert_eq!(solution.value, 220);
//! assert_eq!(solution.selected, vec![false, true, true]);
//! ```
//!
//! Ties between equally valuable subsets are broken deterministically; the
//! exact policy is documented in [`backtrace`].
//!
//! The [`io`] module speaks the batch wire format (an `N C` header line,
//! then one `value weight` line per item) and the `solver` binary wraps it
//! in a one-shot CLI.

pub mod backtrace;
pub mod error;
pub mod instance;
pub mod io;
pub mod solver;
pub mod table;

pub use crate::error::{Error, Result};
pub use crate::instance::{Instance, Item};
pub use crate::solver::{solve, DpSolver, Solution};
pub use crate::table::ValueTable;
