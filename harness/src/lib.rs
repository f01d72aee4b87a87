//! Invoke a challenge body's `solution` with fixed sample arguments and print
//! the result in its canonical text form.
//!
//! - **[`solver`]**: the [`Challenge`](solver::Challenge) and
//!   [`Solver`](solver::Solver) traits a challenge body implements.
//! - **[`args`]** / **[`value`]**: closed sets of argument and result shapes.
//! - **[`invoke`]**: lookup, contract check, call, void-return handling.
//! - **[`report`]**: writes the result or a diagnostic and picks the exit code.

pub mod args;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod invoke;
pub mod logging;
pub mod report;
pub mod solver;
pub mod value;

pub use args::{Arg, ArgKind};
pub use config::HarnessConfig;
pub use error::HarnessError;
pub use solver::{Challenge, Returns, Signature, Solver};
pub use value::Value;
