//! # Small textbook problems
//!
//! Problems with a known optimum that are small enough to verify by hand.
use tableau_lp::{ConstraintType, LinearProgram, Objective, Outcome, PivotRuleKind, SolverOptions};
use tableau_lp::algorithm::two_phase::solve_with_options;

/// The Wyndor Glass Co. problem.
pub fn wyndor() -> LinearProgram<f64> {
    LinearProgram::new(
        vec![
            vec![1f64, 0f64],
            vec![0f64, 2f64],
            vec![3f64, 2f64],
        ],
        vec![4f64, 12f64, 18f64],
        vec![3f64, 5f64],
        Objective::Maximize,
        vec![ConstraintType::Less; 3],
    ).unwrap()
}

/// The dual of the Wyndor Glass Co. problem.
pub fn wyndor_dual() -> LinearProgram<f64> {
    LinearProgram::new(
        vec![
            vec![1f64, 0f64, 3f64],
            vec![0f64, 2f64, 2f64],
        ],
        vec![3f64, 5f64],
        vec![4f64, 12f64, 18f64],
        Objective::Minimize,
        vec![ConstraintType::Greater; 2],
    ).unwrap()
}

/// Buy three foods as cheaply as possible while meeting nutritional lower bounds, without eating
/// any food too often or too much in total.
pub fn diet() -> LinearProgram<f64> {
    let nutrients = vec![
        vec![110f64, 205f64, 160f64],
        vec![4f64, 32f64, 13f64],
        vec![2f64, 12f64, 54f64],
    ];
    let servings = vec![
        vec![1f64, 0f64, 0f64],
        vec![0f64, 1f64, 0f64],
        vec![0f64, 0f64, 1f64],
    ];
    let constraints = nutrients.iter().cloned()
        .chain(servings)
        .chain([nutrients[0].clone()])
        .collect();

    let mut constraint_types = vec![ConstraintType::Greater; 3];
    constraint_types.extend([ConstraintType::Less; 4]);

    LinearProgram::new(
        constraints,
        vec![1000f64, 55f64, 100f64, 4f64, 3f64, 2f64, 1300f64],
        vec![3f64, 24f64, 13f64],
        Objective::Minimize,
        constraint_types,
    ).unwrap()
}

/// Solve with each of the pivot rules.
pub fn solve_with_each_rule(program: &LinearProgram<f64>) -> Vec<(PivotRuleKind, Outcome<f64>)> {
    [PivotRuleKind::Dantzig, PivotRuleKind::Bland].into_iter()
        .map(|pivot_rule| {
            let options = SolverOptions::default().with_pivot_rule(pivot_rule);
            (pivot_rule, solve_with_options(program, &options))
        })
        .collect()
}

#[cfg(test)]
mod test;
