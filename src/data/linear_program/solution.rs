//! # Representation of feasible solutions
//!
//! Once a linear program is fully solved, a solution is derived. It holds a value for each of the
//! decision variables of the original problem, and the objective value in the original direction
//! of optimization.
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fmt;

use crate::data::number_types::traits::RealField;

/// Represents a solution to a linear program.
///
/// Only created at the end of a successful solve, and not changed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function for this solution, with the sign of the original problem.
    objective_value: F,
    /// Value of each decision variable, the variable `x_j` at index `j - 1`.
    values: Vec<F>,
}

impl<F: RealField> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// # Arguments
    ///
    /// * `objective_value`: Optimal value of the original objective.
    /// * `values`: Value for each decision variable, in order.
    pub fn new(objective_value: F, values: Vec<F>) -> Self {
        Self { objective_value, values }
    }

    /// Optimal objective value, rounded while the solution was extracted.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Optimal objective value, rounded to fewer decimals.
    pub fn rounded_objective_value(&self, decimals: i32) -> F {
        self.objective_value.round_to_decimals(decimals)
    }

    /// Value of decision variable `x_j`.
    ///
    /// # Arguments
    ///
    /// * `variable`: One-based index `j` of the decision variable.
    ///
    /// # Return value
    ///
    /// `None` if there is no such variable.
    pub fn value(&self, variable: usize) -> Option<F> {
        variable.checked_sub(1).and_then(|j| self.values.get(j)).copied()
    }

    /// Values of all decision variables, zero based.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Number of decision variables.
    pub fn nr_variables(&self) -> usize {
        self.values.len()
    }

    /// Mapping from one-based decision variable index to its value.
    ///
    /// Variables that never entered the basis have value zero, and are included.
    pub fn coefficients(&self) -> BTreeMap<usize, F> {
        self.values.iter()
            .enumerate()
            .map(|(j, &value)| (j + 1, value))
            .collect()
    }
}

impl<F: RealField> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (j, value) in self.coefficients() {
            writeln!(f, "x_{} = {}", j, value)?;
        }
        writeln!(f, "Optimal value: {}", self.objective_value)
    }
}
