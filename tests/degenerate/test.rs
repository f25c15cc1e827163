use tableau_lp::{ConstraintType, LinearModel, LinearProgram, Objective, PivotRuleKind, Solution, SolverOptions};
use tableau_lp::algorithm::two_phase::{Phase, solve};

use super::{beale, CycleDetector};

#[test]
fn bland_terminates() {
    let options = SolverOptions::default().with_pivot_rule(PivotRuleKind::Bland);
    let mut detector = CycleDetector::default();
    let outcome = solve(&beale(), &options, &mut detector);

    assert_eq!(outcome.solution(), Some(&Solution::new(-1.25, vec![1f64, 0f64, 1f64, 0f64])));
    assert_eq!(outcome.iterations(Phase::One), 0);
    assert_eq!(outcome.iterations(Phase::Two), 6);
}

#[test]
#[should_panic(expected = "cycle in Phase 2")]
fn dantzig_cycles() {
    let options = SolverOptions::default().with_pivot_rule(PivotRuleKind::Dantzig);
    solve(&beale(), &options, &mut CycleDetector::default());
}

#[test]
fn duplicate_equality() {
    let model = LinearModel::new(
        vec![vec![1f64, 1f64], vec![1f64, 1f64]],
        vec![1f64, 1f64],
        vec![1f64, 1f64],
        Objective::Maximize,
        vec![ConstraintType::Equal; 2],
        PivotRuleKind::Dantzig,
        false,
    ).unwrap();

    let outcome = model.solve();
    assert_eq!(outcome.solution(), Some(&Solution::new(1f64, vec![1f64, 0f64])));
    assert_eq!(outcome.nr_redundant_rows(), 1);
    assert_eq!(outcome.iterations(Phase::One), 1);
    assert_eq!(outcome.iterations(Phase::Two), 0);
}

#[test]
fn sum_of_rows() {
    // The last row is the sum of the first two
    let program = LinearProgram::new(
        vec![
            vec![1f64, 1f64, 0f64],
            vec![0f64, 1f64, 1f64],
            vec![1f64, 2f64, 1f64],
        ],
        vec![2f64, 3f64, 5f64],
        vec![1f64, 1f64, 1f64],
        Objective::Minimize,
        vec![ConstraintType::Equal; 3],
    ).unwrap();

    let options = SolverOptions::default();
    let outcome = solve(&program, &options, &mut CycleDetector::default());
    assert_eq!(outcome.optimal_value(), Some(3f64));
    assert_eq!(outcome.nr_redundant_rows(), 1);
    assert!(program.is_satisfied_by(outcome.solution().unwrap().values(), 1e-9));
}
