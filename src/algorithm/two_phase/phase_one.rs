//! # Phase one
//!
//! Computing a basic feasible solution: the first phase of the two phase method. Rows that have no
//! slack variable to start a basis with get an artificial variable, and the sum of those is
//! minimized. If that sum can be made zero, the artificial variables are driven out of the basis
//! and removed.
use cumsum::cumsum_array_owned;
use enum_map::enum_map;

use crate::algorithm::two_phase::{Phase, primal};
use crate::algorithm::two_phase::observer::Observer;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{ColumnType, Tableau};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::float::numerical_precision::is_close_to_zero;
use crate::data::number_types::traits::RealField;

/// Create the tableau of the first phase.
///
/// Columns are ordered as decision variables, slack and surplus variables and finally artificial
/// variables. Each `<=` row starts with its own slack variable in the basis, all other rows with
/// their artificial variable. The objective is the sum of the artificial variables, in canonical
/// form.
///
/// # Arguments
///
/// * `standard`: Problem with a non negative right hand side.
/// * `decimals`: Precision maintained during pivots.
/// * `tolerance`: Values not larger than this in absolute value are treated as zero while pivoting.
pub fn artificial_tableau<F: RealField>(
    standard: &StandardForm<F>,
    decimals: i32,
    tolerance: F,
) -> Tableau<F> {
    let nr_rows = standard.nr_rows();

    let cumulative = cumsum_array_owned([
        standard.nr_decision_variables(),
        standard.nr_slack_variables(),
        standard.nr_artificial_variables(),
    ]);
    let column_group_end = enum_map!{
        ColumnType::Decision   => cumulative[0],
        ColumnType::Slack      => cumulative[1],
        ColumnType::Artificial => cumulative[2],
    };
    let nr_columns = column_group_end[ColumnType::Artificial];

    let mut constraints = DenseMatrix::zeros(nr_rows, nr_columns);
    for i in 0..nr_rows {
        constraints.row_mut(i)[..cumulative[0]].copy_from_slice(standard.constraints().row(i));
    }

    let mut basis_indices = vec![usize::MAX; nr_rows];
    let standard_columns = standard.standard_columns().iter()
        .enumerate()
        .map(|(k, &(i, value))| (column_group_end[ColumnType::Decision] + k, i, value));
    for (j, i, value) in standard_columns {
        constraints[(i, j)] = value;
        if standard.constraint_types()[i] == ConstraintType::Less {
            basis_indices[i] = j;
        }
    }
    let artificial_columns = standard.artificial_columns().iter()
        .enumerate()
        .map(|(k, &(i, value))| (column_group_end[ColumnType::Slack] + k, i, value));
    for (j, i, value) in artificial_columns {
        constraints[(i, j)] = value;
        basis_indices[i] = j;
    }
    debug_assert!(basis_indices.iter().all(|&j| j < nr_columns));

    let mut tableau = Tableau::new(
        constraints,
        standard.b().to_vec(),
        basis_indices,
        column_group_end,
        decimals,
        tolerance,
    );

    let cost = (0..nr_columns)
        .map(|j| if j < cumulative[1] { F::zero() } else { F::one() })
        .collect::<Vec<_>>();
    tableau.set_objective(&cost);

    tableau
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `tableau`: Artificial tableau with a valid basis, as created by `artificial_tableau`.
/// * `tolerance`: Artificial cost above which the problem is considered infeasible.
/// * `observer`: Receives the pivots and the removal of the artificial variables.
///
/// # Return value
///
/// Whether the problem is feasible, and the number of pivots that were done. If feasible, the
/// tableau no longer contains artificial variables.
pub(crate) fn artificial_primal<F, PR, O>(
    tableau: &mut Tableau<F>,
    tolerance: F,
    observer: &mut O,
) -> (RankedFeasibilityResult, usize)
where
    F: RealField,
    PR: PivotRule,
    O: Observer<F>,
{
    // An unbounded direction also ends the phase: the artificial cost is bounded from below by zero,
    // so it can only be the result of numerical error
    let (_, nr_pivots) = primal::<_, PR, _>(tableau, Phase::One, observer);

    if tableau.objective_function_value() > tolerance {
        return (RankedFeasibilityResult::Infeasible, nr_pivots);
    }

    let (rows_to_remove, nr_purge_pivots) = if tableau.nr_artificial_variables() > 0 {
        remove_artificial_basis_variables(tableau, tolerance, observer)
    } else {
        (Vec::new(), 0)
    };

    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        Rank::Deficient(rows_to_remove)
    };
    (RankedFeasibilityResult::Feasible { rank }, nr_pivots + nr_purge_pivots)
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub enum RankedFeasibilityResult {
    /// The problem is feasible, the tableau holds a basic feasible solution without artificial
    /// variables.
    Feasible {
        /// Whether rows were removed.
        rank: Rank,
    },
    /// The problem is not feasible.
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Removes all artificial variables from the tableau by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// Each row that still has an artificial basic variable is pivoted on its first non zero value
/// outside the artificial columns. If there is no such value, the row is a linear combination of
/// other rows and removed. Afterwards, the artificial columns are removed.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for.
/// * `tolerance`: Values not larger than this in absolute value are considered zero.
/// * `observer`: Receives the pivots and the removal.
///
/// # Return value
///
/// A `Vec` with indices of rows that were redundant and removed, sorted, and the number of pivots.
fn remove_artificial_basis_variables<F, O>(
    tableau: &mut Tableau<F>,
    tolerance: F,
    observer: &mut O,
) -> (Vec<usize>, usize)
where
    F: RealField,
    O: Observer<F>,
{
    let mut rows_to_remove = Vec::new();
    let mut nr_pivots = 0;

    // Pivots don't change the row count, the indices stay valid
    for pivot_row in tableau.artificial_basis_rows() {
        let pivot_column = (0..tableau.nr_non_artificial_columns())
            .filter(|&j| !tableau.is_in_basis(j))
            .find(|&j| !is_close_to_zero(tableau.element(pivot_row, j), tolerance));

        if let Some(pivot_column) = pivot_column {
            let pivot = tableau.bring_into_basis(pivot_column, pivot_row);
            nr_pivots += 1;
            observer.pivoted(Phase::One, &pivot, tableau);
        } else {
            rows_to_remove.push(pivot_row);
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    tableau.remove_rows(&rows_to_remove);
    tableau.remove_artificial_columns();
    observer.artificial_removed(&rows_to_remove, tableau);

    (rows_to_remove, nr_pivots)
}
