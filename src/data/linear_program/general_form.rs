//! # Linear programs in general form
//!
//! A linear program `min / max c^T x` subject to `Ax (<=, =, >=) b` and `x >= 0`, exactly as given
//! by the user. It is validated once, and read only afterwards.
use std::fmt::{Display, Formatter};
use std::fmt;

use itertools::Itertools;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::error::InconsistencyError;
use crate::data::number_types::traits::RealField;

/// A linear program with non negative variables.
///
/// The dimensions of all fields are consistent: `constraints` has one row for each value in `b`
/// and `constraint_types`, and one column for each value in `cost`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<F> {
    /// Coefficient matrix `A`, of size `m x n`.
    constraints: DenseMatrix<F>,
    /// Right hand side `b` of length `m`.
    b: Vec<F>,
    /// Objective coefficients `c` of length `n`.
    cost: Vec<F>,
    objective: Objective,
    /// Direction of each constraint row.
    constraint_types: Vec<ConstraintType>,
}

impl<F: RealField> LinearProgram<F> {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Rows of the coefficient matrix `A`.
    /// * `b`: Right hand side, one value per row.
    /// * `cost`: Objective coefficients, one per variable.
    /// * `objective`: Whether to minimize or maximize.
    /// * `constraint_types`: Direction of each row.
    ///
    /// # Return value
    ///
    /// The linear program, or an error if the dimensions don't match or values are not finite.
    pub fn new(
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
        cost: Vec<F>,
        objective: Objective,
        constraint_types: Vec<ConstraintType>,
    ) -> Result<Self, InconsistencyError> {
        let nr_variables = cost.len();
        if nr_variables == 0 {
            return Err(InconsistencyError::NoVariables);
        }

        let nr_rows = constraints.len();
        if b.len() != nr_rows {
            return Err(InconsistencyError::RightHandSideLength { expected: nr_rows, found: b.len() });
        }
        if constraint_types.len() != nr_rows {
            return Err(InconsistencyError::ConstraintTypesLength {
                expected: nr_rows,
                found: constraint_types.len(),
            });
        }
        if let Some((row, found)) = constraints.iter()
            .map(Vec::len)
            .find_position(|&length| length != nr_variables) {
            return Err(InconsistencyError::RowLength { row, expected: nr_variables, found });
        }

        if let Some(j) = cost.iter().position(|value| !value.is_finite()) {
            return Err(InconsistencyError::NotFinite(format!("c[{}]", j)));
        }
        if let Some(i) = b.iter().position(|value| !value.is_finite()) {
            return Err(InconsistencyError::NotFinite(format!("b[{}]", i)));
        }
        for (i, row) in constraints.iter().enumerate() {
            if let Some(j) = row.iter().position(|value| !value.is_finite()) {
                return Err(InconsistencyError::NotFinite(format!("A[{}][{}]", i, j)));
            }
        }

        Ok(Self {
            constraints: DenseMatrix::from_rows(constraints, nr_variables),
            b,
            cost,
            objective,
            constraint_types,
        })
    }

    /// Coefficient matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Right hand side `b`.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Objective coefficients `c`.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Direction of each constraint row.
    pub fn constraint_types(&self) -> &[ConstraintType] {
        &self.constraint_types
    }

    /// Number of constraint rows `m`.
    pub fn nr_rows(&self) -> usize {
        self.b.len()
    }

    /// Number of decision variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Value of the objective function `c^T x`.
    pub fn objective_value_of(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        inner_product(&self.cost, x)
    }

    /// Whether an assignment satisfies all constraints and non negativity bounds.
    ///
    /// # Arguments
    ///
    /// * `x`: Value for each decision variable.
    /// * `tolerance`: Allowed violation per constraint.
    pub fn is_satisfied_by(&self, x: &[F], tolerance: F) -> bool {
        if x.len() != self.nr_variables() {
            return false;
        }
        if x.iter().any(|&value| value < -tolerance) {
            return false;
        }

        self.constraints.rows()
            .zip(&self.b)
            .zip(&self.constraint_types)
            .all(|((row, &b), constraint_type)| {
                let lhs = inner_product(row, x);
                match constraint_type {
                    ConstraintType::Equal => (lhs - b).abs() <= tolerance,
                    ConstraintType::Greater => lhs >= b - tolerance,
                    ConstraintType::Less => lhs <= b + tolerance,
                }
            })
    }
}

fn inner_product<F: RealField>(left: &[F], right: &[F]) -> F {
    left.iter().zip(right).map(|(&l, &r)| l * r).sum()
}

impl<F: RealField> Display for LinearProgram<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let direction = match self.objective {
            Objective::Maximize => "max",
            Objective::Minimize => "min",
        };
        let terms = |coefficients: &[F]| coefficients.iter()
            .enumerate()
            .map(|(j, value)| format!("{} x_{}", value, j + 1))
            .join(" + ");

        writeln!(f, "{} {}", direction, terms(&self.cost[..]))?;
        writeln!(f, "s.t.")?;
        for ((row, b), constraint_type) in self.constraints.rows().zip(&self.b).zip(&self.constraint_types) {
            writeln!(f, "    {} {} {}", terms(row), constraint_type, b)?;
        }
        Ok(())
    }
}
