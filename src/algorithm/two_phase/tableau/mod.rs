//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is held in full: an objective row, the constraint rows, a right hand side column and
//! the index of the basic variable of each row.
use std::cmp::max;
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter::repeat;
use std::mem;

use enum_map::{Enum, EnumMap};
use index_utils::remove_indices;
use itertools::Itertools;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::SparseTuple;
use crate::data::number_types::traits::RealField;

/// Columns are grouped by the kind of variable they represent.
///
/// Within the tableau, the groups appear in the order of this enum.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnType {
    /// Variables of the original problem.
    Decision,
    /// Slack (for `<=` rows) or surplus (for `>=` rows) variables.
    Slack,
    /// Variables only present during the first phase, to start with a feasible basis.
    Artificial,
}

/// How to choose between rows with an equal minimum ratio.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TieBreak {
    /// Keep the first row that attains the minimum.
    FirstFound,
    /// Prefer the row whose basic variable has the lowest index.
    ///
    /// Needed for Bland's rule to terminate.
    LowestBasisIndex,
}

/// A basis change that happened.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pivot<F> {
    /// Row index of the pivot.
    pub row: usize,
    /// Column index of the pivot, the entering variable.
    pub column: usize,
    /// Value of the pivot element before the basis change.
    pub element: F,
    /// Column index of the variable that left the basis.
    pub leaving: usize,
}

/// The data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns all data describing the current solution basis, and doesn't refer back to the problem
/// it was created from.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Relative cost of each column.
    ///
    /// Zero on all basis columns.
    cost: Vec<F>,
    /// Right hand side of the objective row, the negated objective function value.
    minus_objective: F,
    /// Constraint rows, of size `m x nr_columns`.
    constraints: DenseMatrix<F>,
    /// Right hand side of the constraint rows, never negative.
    b: Vec<F>,
    /// Index of the basic variable of each row.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,
    /// Exclusive end index of each group of columns.
    column_group_end: EnumMap<ColumnType, usize>,
    /// Number of decimals to round to after each basis change.
    decimals: i32,
    /// Values not larger than this in absolute value are treated as zero when selecting a pivot.
    tolerance: F,
}

impl<F: RealField> Tableau<F> {
    /// Create a new tableau with an all zero objective row.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Constraint rows, one column for each variable.
    /// * `b`: Non negative right hand side.
    /// * `basis_indices`: For each row, a column that is a unit vector with its one in that row.
    /// * `column_group_end`: Exclusive end index of each column group.
    /// * `decimals`: Precision maintained during pivots.
    /// * `tolerance`: Magnitude below which relative costs and column values don't count as
    /// negative or positive. Should be well above `10^-decimals`.
    pub(crate) fn new(
        constraints: DenseMatrix<F>,
        b: Vec<F>,
        basis_indices: Vec<usize>,
        column_group_end: EnumMap<ColumnType, usize>,
        decimals: i32,
        tolerance: F,
    ) -> Self {
        debug_assert_eq!(constraints.nr_rows(), b.len());
        debug_assert_eq!(basis_indices.len(), b.len());
        debug_assert_eq!(column_group_end[ColumnType::Artificial], constraints.nr_columns());
        debug_assert!(b.iter().all(|&value| value >= F::zero()));

        let basis_columns = basis_indices.iter().copied().collect::<HashSet<_>>();
        debug_assert_eq!(basis_columns.len(), basis_indices.len());

        Self {
            cost: vec![F::zero(); constraints.nr_columns()],
            minus_objective: F::zero(),
            constraints,
            b,
            basis_indices,
            basis_columns,
            column_group_end,
            decimals,
            tolerance,
        }
    }

    /// Replace the objective row.
    ///
    /// The new objective is brought into canonical form w.r.t. the current basis: the relative cost
    /// of all basis columns becomes zero.
    ///
    /// # Arguments
    ///
    /// * `cost`: Cost of the first `cost.len()` columns, the remaining columns get cost zero.
    pub fn set_objective(&mut self, cost: &[F]) {
        debug_assert!(cost.len() <= self.nr_columns());

        self.cost = cost.iter()
            .copied()
            .chain(repeat(F::zero()))
            .take(self.nr_columns())
            .collect();
        self.minus_objective = F::zero();
        self.make_canonical();
    }

    /// Subtract multiples of the constraint rows from the objective row, such that the objective
    /// row is zero on each basis column.
    fn make_canonical(&mut self) {
        for i in 0..self.nr_rows() {
            let factor = self.cost[self.basis_indices[i]];
            if !factor.is_zero() {
                subtract_multiple(&mut self.cost, factor, self.constraints.row(i));
                self.minus_objective = self.minus_objective - factor * self.b[i];
            }
        }

        let decimals = self.decimals;
        for value in &mut self.cost {
            *value = value.round_to_decimals(decimals);
        }
        self.minus_objective = self.minus_objective.round_to_decimals(decimals);
        for &j in &self.basis_indices {
            self.cost[j] = F::zero();
        }
    }

    /// Brings a column into the basis by pivoting on a single element.
    ///
    /// The pivot row is divided by the pivot element, and multiples of it are subtracted from all
    /// other rows (including the objective row) to make the pivot column a unit vector. Afterwards,
    /// all values are rounded to remove accumulated noise.
    ///
    /// # Arguments
    ///
    /// * `pivot_column`: Column index of the entering variable, not yet in the basis.
    /// * `pivot_row`: Row index of the pivot, the element there should not be zero.
    ///
    /// # Return value
    ///
    /// A description of the basis change.
    pub fn bring_into_basis(&mut self, pivot_column: usize, pivot_row: usize) -> Pivot<F> {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column));

        let element = self.constraints[(pivot_row, pivot_column)];
        debug_assert!(!element.is_zero());

        for value in self.constraints.row_mut(pivot_row) {
            *value = *value / element;
        }
        self.b[pivot_row] = self.b[pivot_row] / element;

        let row = self.constraints.row(pivot_row).to_vec();
        let rhs = self.b[pivot_row];
        for i in (0..self.nr_rows()).filter(|&i| i != pivot_row) {
            let factor = self.constraints[(i, pivot_column)];
            if !factor.is_zero() {
                subtract_multiple(self.constraints.row_mut(i), factor, &row);
                self.b[i] = self.b[i] - factor * rhs;
            }
        }
        let factor = self.cost[pivot_column];
        if !factor.is_zero() {
            subtract_multiple(&mut self.cost, factor, &row);
            self.minus_objective = self.minus_objective - factor * rhs;
        }

        self.round();
        // Exact unit column
        for i in 0..self.nr_rows() {
            self.constraints[(i, pivot_column)] = if i == pivot_row { F::one() } else { F::zero() };
        }
        self.cost[pivot_column] = F::zero();

        let leaving = self.update_basis_indices(pivot_column, pivot_row);
        Pivot { row: pivot_row, column: pivot_column, element, leaving }
    }

    /// Round all values to the configured precision.
    ///
    /// Values in the right hand side that became negative through rounding errors are set to zero.
    fn round(&mut self) {
        let decimals = self.decimals;

        for value in self.constraints.values_mut() {
            *value = value.round_to_decimals(decimals);
        }
        for value in &mut self.b {
            *value = value.round_to_decimals(decimals).max(F::zero());
        }
        for value in &mut self.cost {
            *value = value.round_to_decimals(decimals);
        }
        self.minus_objective = self.minus_objective.round_to_decimals(decimals);
    }

    /// Update the basis index.
    ///
    /// # Return value
    ///
    /// Index of the column that left the basis.
    fn update_basis_indices(&mut self, pivot_column: usize, pivot_row: usize) -> usize {
        let leaving_column = mem::replace(&mut self.basis_indices[pivot_row], pivot_column);

        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);

        leaving_column
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the minimal ratio between the right hand side and a column value larger
    /// than the tolerance.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column.
    /// * `tie_break`: What to do when several rows attain the minimum ratio.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded in the direction of
    /// this column.
    pub fn select_primal_pivot_row(&self, column: usize, tie_break: TieBreak) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen row, minimum ratio)
        let mut min_values: Option<(usize, F)> = None;
        for i in 0..self.nr_rows() {
            let xij = self.constraints[(i, column)];
            if xij > self.tolerance {
                let ratio = (self.b[i] / xij).round_to_decimals(self.decimals);
                match &mut min_values {
                    Some((min_row, min_ratio)) => {
                        if ratio < *min_ratio {
                            *min_row = i;
                            *min_ratio = ratio;
                        } else if ratio == *min_ratio
                            && tie_break == TieBreak::LowestBasisIndex
                            && self.basis_indices[i] < self.basis_indices[*min_row] {
                            *min_row = i;
                        }
                    },
                    None => min_values = Some((i, ratio)),
                }
            }
        }

        min_values.map(|(min_row, _)| min_row)
    }

    /// Remove constraint rows.
    ///
    /// Basis indices of the remaining rows are kept, the basis column set is derived anew from
    /// them.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, deduplicated indices of rows to remove.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.is_sorted());
        debug_assert!(rows.iter().all(|&i| i < self.nr_rows()));

        if rows.is_empty() {
            return;
        }

        self.constraints.remove_rows(rows);
        remove_indices(&mut self.b, rows);
        remove_indices(&mut self.basis_indices, rows);
        self.basis_columns = self.basis_indices.iter().copied().collect();
    }

    /// Remove all artificial columns.
    ///
    /// None of them should be in the basis anymore.
    pub fn remove_artificial_columns(&mut self) {
        debug_assert!(!self.has_artificial_in_basis());

        let nr_columns = self.column_group_end[ColumnType::Slack];
        self.constraints.truncate_columns(nr_columns);
        self.cost.truncate(nr_columns);
        self.column_group_end[ColumnType::Artificial] = nr_columns;
    }

    /// Rows that have an artificial basic variable, in increasing order.
    pub fn artificial_basis_rows(&self) -> Vec<usize> {
        self.basis_indices.iter()
            .positions(|&j| self.column_type(j) == ColumnType::Artificial)
            .collect()
    }

    /// Whether any artificial variable is still in the basis.
    pub fn has_artificial_in_basis(&self) -> bool {
        self.basis_indices.iter().any(|&j| self.column_type(j) == ColumnType::Artificial)
    }

    /// Calculates the relative cost of a column.
    ///
    /// # Arguments
    ///
    /// * `j`: Index of column to get the relative cost for, in range `0` until
    /// `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// The relative cost, which is zero for basis columns.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.cost[j]
    }

    /// Single element with respect to the current basis.
    pub fn element(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.constraints[(i, j)]
    }

    /// Magnitude below which values are treated as zero when selecting a pivot.
    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    /// Right hand side value of a constraint row.
    pub fn constraint_value(&self, i: usize) -> F {
        self.b[i]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Index of the basic variable of a row.
    pub fn basis_column_index_for_row(&self, i: usize) -> usize {
        self.basis_indices[i]
    }

    /// Kind of variable a column represents.
    pub fn column_type(&self, j: usize) -> ColumnType {
        debug_assert!(j < self.nr_columns());

        if j < self.column_group_end[ColumnType::Decision] {
            ColumnType::Decision
        } else if j < self.column_group_end[ColumnType::Slack] {
            ColumnType::Slack
        } else {
            ColumnType::Artificial
        }
    }

    /// Name of the variable of a column, numbered from one within its group.
    ///
    /// Decision variables are called `x_j`, slack and surplus variables `s_j` and artificial
    /// variables `a_j`.
    pub fn column_label(&self, j: usize) -> String {
        match self.column_type(j) {
            ColumnType::Decision => format!("x_{}", j + 1),
            ColumnType::Slack => {
                format!("s_{}", j - self.column_group_end[ColumnType::Decision] + 1)
            },
            ColumnType::Artificial => {
                format!("a_{}", j - self.column_group_end[ColumnType::Slack] + 1)
            },
        }
    }

    /// Get the current basic feasible solution.
    ///
    /// # Return value
    ///
    /// (column index, value) tuples of all basic variables, sorted by column index.
    pub fn current_bfs(&self) -> Vec<SparseTuple<F>> {
        self.basis_indices.iter()
            .copied()
            .zip(self.b.iter().copied())
            .sorted_by_key(|&(j, _)| j)
            .collect()
    }

    /// Get the cost of the current solution.
    ///
    /// # Return value
    ///
    /// The current value of the objective function, which is being minimized.
    pub fn objective_function_value(&self) -> F {
        -self.minus_objective
    }

    /// Number of rows in the tableau, excluding the objective row.
    pub fn nr_rows(&self) -> usize {
        self.b.len()
    }

    /// Number of variables in the tableau.
    pub fn nr_columns(&self) -> usize {
        self.column_group_end[ColumnType::Artificial]
    }

    /// Number of decision variables.
    pub fn nr_decision_variables(&self) -> usize {
        self.column_group_end[ColumnType::Decision]
    }

    /// Number of columns that are not artificial.
    ///
    /// Artificial columns have the highest indices, so these are the columns `0` until this
    /// number.
    pub fn nr_non_artificial_columns(&self) -> usize {
        self.column_group_end[ColumnType::Slack]
    }

    /// Number of artificial variables.
    pub fn nr_artificial_variables(&self) -> usize {
        self.column_group_end[ColumnType::Artificial] - self.column_group_end[ColumnType::Slack]
    }
}

/// Subtract `factor` times `row` from `target`, element wise.
fn subtract_multiple<F: RealField>(target: &mut [F], factor: F, row: &[F]) {
    debug_assert_eq!(target.len(), row.len());

    for (value, &other) in target.iter_mut().zip(row) {
        *value = *value - factor * other;
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<F: RealField>(tableau: &Tableau<F>) {
    // Correct number of basis columns (uniqueness is implied because it's a set)
    debug_assert_eq!(tableau.basis_columns.len(), tableau.nr_rows());

    // Basis columns form an identity submatrix
    for (i, &j) in tableau.basis_indices.iter().enumerate() {
        debug_assert!(tableau.basis_columns.contains(&j));
        for k in 0..tableau.nr_rows() {
            let expected = if k == i { F::one() } else { F::zero() };
            debug_assert_eq!(tableau.element(k, j), expected, "Column {} is not equal to e_{}", j, i);
        }
        debug_assert!(
            tableau.relative_cost(j).is_zero(), "Relative cost of column {} is not zero", j,
        );
    }

    // `b` >= 0
    for (i, value) in tableau.b.iter().enumerate() {
        debug_assert!(
            *value >= F::zero(),
            "rhs (b) is not always nonnegative: at index {} we have {} < 0", i, value,
        );
    }
}

impl<F: RealField> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let labels = (0..self.nr_columns()).map(|j| self.column_label(j)).collect::<Vec<_>>();
        let cost = self.cost.iter().map(F::to_string).collect::<Vec<_>>();
        let rows = self.constraints.rows()
            .map(|row| row.iter().map(F::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let b = self.b.iter().map(F::to_string).collect::<Vec<_>>();
        let basis = self.basis_indices.iter().map(|&j| self.column_label(j)).collect::<Vec<_>>();
        let objective = self.minus_objective.to_string();

        let label_width = basis.iter().map(String::len).fold("ind".len(), max);
        let b_width = b.iter().map(String::len).fold(max("b".len(), objective.len()), max);
        let column_width = (0..self.nr_columns())
            .map(|j| rows.iter()
                .map(|row| row[j].len())
                .fold(max(labels[j].len(), cost[j].len()), max)
            )
            .collect::<Vec<_>>();

        let write_row = |f: &mut Formatter, label: &str, rhs: &str, values: &[String]| {
            write!(f, "{0:>width$} | {1:>b_width$} |", label, rhs, width = label_width, b_width = b_width)?;
            for (value, width) in values.iter().zip(&column_width) {
                write!(f, " {0:>width$}", value, width = width)?;
            }
            writeln!(f)
        };

        write_row(f, "ind", "b", &labels)?;
        let total_width = label_width + 3 + b_width + 2 + column_width.iter().map(|w| 1 + w).sum::<usize>();
        writeln!(f, "{}", "-".repeat(total_width))?;
        write_row(f, "z", &objective, &cost)?;
        for ((label, rhs), values) in basis.iter().zip(&b).zip(&rows) {
            write_row(f, label, rhs, values)?;
        }

        Ok(())
    }
}
