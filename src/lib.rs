//! # A dense tableau linear program solver
//!
//! Linear programs of the form `min / max c^T x` subject to `Ax (<=, =, >=) b` and `x >= 0` are
//! solved using the two-phase simplex method on a dense tableau, as described in chapters 2 and 4
//! of Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! The first phase minimizes the sum of artificial variables to find a basic feasible solution,
//! the second phase optimizes the original objective starting from that basis. Either the greedy
//! (Dantzig) pivot rule or Bland's anti cycling rule drives both phases.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod model;

pub use algorithm::two_phase::options::SolverOptions;
pub use algorithm::two_phase::strategy::pivot_rule::PivotRuleKind;
pub use algorithm::two_phase::Outcome;
pub use data::linear_program::elements::{ConstraintType, LinearProgramType, Objective};
pub use data::linear_program::error::InconsistencyError;
pub use data::linear_program::general_form::LinearProgram;
pub use data::linear_program::solution::Solution;
pub use model::LinearModel;

#[cfg(test)]
mod tests;
