use float_eq::assert_float_eq;

use tableau_lp::{ConstraintType, LinearModel, LinearProgram, LinearProgramType, Objective, PivotRuleKind, Solution};
use tableau_lp::algorithm::two_phase::Phase;

use super::{diet, solve_with_each_rule, wyndor, wyndor_dual};

#[test]
fn wyndor_glass() {
    let program = wyndor();
    for (pivot_rule, outcome) in solve_with_each_rule(&program) {
        assert_eq!(outcome.result(), &LinearProgramType::FiniteOptimum(Solution::new(36f64, vec![2f64, 6f64])));
        assert_eq!(outcome.iterations(Phase::One), 0);
        let expected_pivots = match pivot_rule {
            PivotRuleKind::Dantzig => 2,
            PivotRuleKind::Bland => 3,
        };
        assert_eq!(outcome.iterations(Phase::Two), expected_pivots);
        assert_eq!(outcome.nr_redundant_rows(), 0);
    }
}

#[test]
fn minimizing_the_negated_objective() {
    let maximize = wyndor();
    let minimize = LinearProgram::new(
        maximize.constraints().rows().map(<[f64]>::to_vec).collect(),
        maximize.b().to_vec(),
        maximize.cost().iter().map(|&c| -c).collect(),
        Objective::Minimize,
        maximize.constraint_types().to_vec(),
    ).unwrap();

    for ((_, max), (_, min)) in solve_with_each_rule(&maximize).into_iter().zip(solve_with_each_rule(&minimize)) {
        assert_eq!(max.optimal_value(), min.optimal_value().map(|value| -value));
        assert_eq!(max.coefficients(), min.coefficients());
        assert_eq!(max.iterations(Phase::Two), min.iterations(Phase::Two));
    }
}

#[test]
fn strong_duality() {
    let primal = solve_with_each_rule(&wyndor());
    let dual = solve_with_each_rule(&wyndor_dual());

    for ((_, primal), (_, dual)) in primal.into_iter().zip(dual) {
        assert_float_eq!(primal.optimal_value().unwrap(), dual.optimal_value().unwrap(), abs <= 1e-9);
        // Shadow prices of the three Wyndor plants
        assert_float_eq!(dual.solution().unwrap().values(), &[0f64, 1.5, 1f64][..], abs_all <= 1e-9);
        assert_eq!(dual.iterations(Phase::One), 2);
    }
}

#[test]
fn diet_problem() {
    let program = diet();
    for (_, outcome) in solve_with_each_rule(&program) {
        assert!(outcome.is_feasible());
        assert!(outcome.is_bounded());

        let solution = outcome.solution().unwrap();
        assert_float_eq!(solution.objective_value(), 66.098, abs <= 1e-9);
        assert_float_eq!(solution.values(), &[4f64, 1.171, 2f64][..], abs_all <= 1e-9);
        // The values are rounded to three decimals
        assert!(program.is_satisfied_by(solution.values(), 1e-2));
        assert!(!program.is_satisfied_by(&[4f64, 1f64, 2f64], 1e-2));

        assert_eq!(outcome.iterations(Phase::One), 4);
        assert_eq!(outcome.iterations(Phase::Two), 1);
    }
}

#[test]
fn equality_row() {
    let model = LinearModel::new(
        vec![vec![1f64, 1f64], vec![1f64, 2f64]],
        vec![5f64, 8f64],
        vec![2f64, 3f64],
        Objective::Maximize,
        vec![ConstraintType::Equal, ConstraintType::Less],
        PivotRuleKind::Dantzig,
        false,
    ).unwrap();

    let outcome = model.solve();
    assert_eq!(outcome.optimal_value(), Some(13f64));
    assert_eq!(outcome.coefficients().map(|c| c.into_iter().collect::<Vec<_>>()), Some(vec![(1, 2f64), (2, 3f64)]));
    assert_eq!(outcome.iterations(Phase::One), 1);
    assert_eq!(outcome.iterations(Phase::Two), 1);
    assert!(model.program().is_satisfied_by(outcome.solution().unwrap().values(), 1e-9));
}

#[test]
fn negative_right_hand_side() {
    // -x_1 - x_2 <= -2 is read as x_1 + x_2 >= 2
    let model = LinearModel::new(
        vec![vec![-1f64, -1f64], vec![1f64, 0f64]],
        vec![-2f64, 3f64],
        vec![1f64, 2f64],
        Objective::Minimize,
        vec![ConstraintType::Less; 2],
        PivotRuleKind::Bland,
        false,
    ).unwrap();

    let outcome = model.solve();
    assert_eq!(outcome.solution(), Some(&Solution::new(2f64, vec![2f64, 0f64])));
    assert_eq!(outcome.iterations(Phase::One), 1);
    assert_eq!(outcome.iterations(Phase::Two), 0);
}

#[test]
fn origin_is_optimal() {
    let model = LinearModel::new(
        vec![vec![1f64, 1f64], vec![1f64, -1f64]],
        vec![-4f64, 6f64],
        vec![1f64, 1f64],
        Objective::Minimize,
        vec![ConstraintType::Greater, ConstraintType::Less],
        PivotRuleKind::Dantzig,
        false,
    ).unwrap();

    let outcome = model.solve();
    assert_eq!(outcome.solution(), Some(&Solution::new(0f64, vec![0f64, 0f64])));
    assert_eq!(outcome.total_iterations(), 0);
}

#[test]
fn unbounded() {
    let program = LinearProgram::new(
        vec![vec![1f64, -1f64]],
        vec![1f64],
        vec![1f64, 0f64],
        Objective::Maximize,
        vec![ConstraintType::Less],
    ).unwrap();

    for (_, outcome) in solve_with_each_rule(&program) {
        assert_eq!(outcome.result(), &LinearProgramType::Unbounded);
        assert!(outcome.is_feasible());
        assert!(!outcome.is_bounded());
        assert_eq!(outcome.optimal_value(), None);
        assert_eq!(outcome.iterations(Phase::Two), 1);
    }
}

#[test]
fn infeasible() {
    let program = LinearProgram::new(
        vec![vec![1f64, 1f64], vec![1f64, 1f64]],
        vec![1f64, 5f64],
        vec![1f64, 1f64],
        Objective::Minimize,
        vec![ConstraintType::Equal; 2],
    ).unwrap();

    for (_, outcome) in solve_with_each_rule(&program) {
        assert_eq!(outcome.result(), &LinearProgramType::Infeasible);
        assert!(!outcome.is_feasible());
        assert_eq!(outcome.coefficients(), None);
        assert_eq!(outcome.iterations(Phase::One), 1);
        assert_eq!(outcome.iterations(Phase::Two), 0);
    }
}
