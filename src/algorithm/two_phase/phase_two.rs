//! # Phase two
//!
//! Optimizing the original objective, starting from the basic feasible solution found in the
//! first phase.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::RealField;

/// Replace the artificial objective by the objective of the original problem.
///
/// The tableau always minimizes, so the cost of a maximization problem is negated. Slack and
/// surplus variables have zero cost.
///
/// # Arguments
///
/// * `tableau`: Tableau without artificial variables in the basis.
/// * `program`: Problem the tableau was derived from.
pub fn install_objective<F: RealField>(tableau: &mut Tableau<F>, program: &LinearProgram<F>) {
    debug_assert!(!tableau.has_artificial_in_basis());
    debug_assert_eq!(tableau.nr_decision_variables(), program.nr_variables());

    let cost = match program.objective() {
        Objective::Minimize => program.cost().to_vec(),
        Objective::Maximize => program.cost().iter().map(|&value| -value).collect(),
    };
    tableau.set_objective(&cost);
}

/// Read the solution of the original problem from an optimal basic feasible solution.
///
/// # Arguments
///
/// * `bfs`: (column, value) tuples of the basic variables of an optimal tableau.
/// * `objective_function_value`: Value of the minimized objective of that tableau.
/// * `program`: Problem the tableau was derived from.
/// * `decimals`: Precision of the reported values.
///
/// # Return value
///
/// A value for each decision variable, zero for those not in the basis, and the objective value
/// in the direction of the original problem.
pub fn extract_solution<F: RealField>(
    bfs: &[SparseTuple<F>],
    objective_function_value: F,
    program: &LinearProgram<F>,
    decimals: i32,
) -> Solution<F> {
    let mut values = vec![F::zero(); program.nr_variables()];
    for &(j, value) in bfs {
        if j < values.len() {
            values[j] = value.round_to_decimals(decimals);
        }
    }

    let objective_value = match program.objective() {
        Objective::Minimize => objective_function_value,
        Objective::Maximize => -objective_function_value,
    };

    Solution::new(objective_value.round_to_decimals(decimals), values)
}
