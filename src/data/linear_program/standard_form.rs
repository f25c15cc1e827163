//! # Standardization
//!
//! Before a tableau can be built, each row of a general form linear program is given a non
//! negative right hand side. Inequalities are then turned into equalities by adding slack (`<=`)
//! or surplus (`>=`) variables: the standard form. Rows that don't have a slack variable to start
//! a basis with get an artificial variable: the auxiliary form.
//!
//! Both kinds of columns are unit columns, and are computed independently from the constraint
//! types of the rows.
use std::ops::Neg;

use itertools::Itertools;
use num_traits::One;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::number_types::traits::RealField;

/// A linear program with non negative right hand side, and the columns that make it an equality
/// system with an initial basis.
///
/// The cost vector and direction of optimization are not needed until the second phase, they
/// are read from the `LinearProgram` directly.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    /// Original coefficients, rows with a negative right hand side negated.
    constraints: DenseMatrix<F>,
    /// Non negative right hand side.
    b: Vec<F>,
    /// Direction of each row after negation.
    constraint_types: Vec<ConstraintType>,
    /// Slack and surplus columns as (row index, coefficient), in row order.
    standard_columns: Vec<SparseTuple<F>>,
    /// Artificial columns as (row index, coefficient), in row order.
    artificial_columns: Vec<SparseTuple<F>>,
}

impl<F: RealField> StandardForm<F> {
    /// Standardize a linear program.
    pub fn new(program: &LinearProgram<F>) -> Self {
        let (constraints, b, constraint_types) = normalize(program);
        let standard_columns = standard_columns(&constraint_types);
        let artificial_columns = auxiliary_columns(&constraint_types);

        Self { constraints, b, constraint_types, standard_columns, artificial_columns }
    }

    /// Coefficients of the decision variables.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Non negative right hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Direction of each row after normalization.
    pub fn constraint_types(&self) -> &[ConstraintType] {
        &self.constraint_types
    }

    /// Slack and surplus columns.
    pub fn standard_columns(&self) -> &[SparseTuple<F>] {
        &self.standard_columns
    }

    /// Artificial columns.
    pub fn artificial_columns(&self) -> &[SparseTuple<F>] {
        &self.artificial_columns
    }

    /// Number of rows `m`.
    pub fn nr_rows(&self) -> usize {
        self.b.len()
    }

    /// Number of decision variables `n`.
    pub fn nr_decision_variables(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// Number of slack and surplus variables.
    pub fn nr_slack_variables(&self) -> usize {
        self.standard_columns.len()
    }

    /// Number of artificial variables.
    pub fn nr_artificial_variables(&self) -> usize {
        self.artificial_columns.len()
    }
}

/// Make the right hand side non negative.
///
/// Rows with a negative right hand side are multiplied by `-1`, which flips the direction of
/// inequalities.
///
/// # Return value
///
/// Tuple of the coefficient matrix, the right hand side and the row directions.
pub fn normalize<F: RealField>(
    program: &LinearProgram<F>,
) -> (DenseMatrix<F>, Vec<F>, Vec<ConstraintType>) {
    let mut constraints = program.constraints().clone();
    let mut b = program.b().to_vec();
    let mut constraint_types = program.constraint_types().to_vec();

    for i in 0..program.nr_rows() {
        if b[i] < F::zero() {
            for value in constraints.row_mut(i) {
                *value = -*value;
            }
            b[i] = -b[i];
            constraint_types[i] = !constraint_types[i];
        }
    }

    (constraints, b, constraint_types)
}

/// Slack variables for `<=` rows and surplus variables for `>=` rows.
///
/// # Return value
///
/// One (row index, coefficient) tuple per column, the coefficient being `1` for a slack and `-1`
/// for a surplus variable.
pub fn standard_columns<F: One + Neg<Output = F>>(
    constraint_types: &[ConstraintType],
) -> Vec<SparseTuple<F>> {
    constraint_types.iter()
        .enumerate()
        .filter_map(|(i, constraint_type)| match constraint_type {
            ConstraintType::Less => Some((i, F::one())),
            ConstraintType::Greater => Some((i, -F::one())),
            ConstraintType::Equal => None,
        })
        .collect()
}

/// Artificial variables for all rows that don't have a slack variable.
///
/// # Return value
///
/// One (row index, `1`) tuple per column.
pub fn auxiliary_columns<F: One>(constraint_types: &[ConstraintType]) -> Vec<SparseTuple<F>> {
    constraint_types.iter()
        .positions(|&constraint_type| constraint_type != ConstraintType::Less)
        .map(|i| (i, F::one()))
        .collect()
}
