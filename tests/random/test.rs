use std::mem::discriminant;

use float_eq::assert_float_eq;

use tableau_lp::{LinearProgramType, PivotRuleKind};

use super::{fractional_single_variable, mixed_constraints, Problems, solve_with_each_rule, two_equalities};

#[test]
fn pivot_rules_agree() {
    let mut nr_optimal = 0;
    for (index, program) in Problems::seeded(0).take(500).enumerate() {
        let outcomes = solve_with_each_rule(&program, 9);
        let (_, dantzig) = &outcomes[0];
        let (_, bland) = &outcomes[1];

        assert_eq!(
            discriminant(dantzig.result()), discriminant(bland.result()),
            "problem {}: {:?} and {:?}\n{}", index, dantzig.result(), bland.result(), program,
        );

        if let (LinearProgramType::FiniteOptimum(left), LinearProgramType::FiniteOptimum(right)) = (dantzig.result(), bland.result()) {
            nr_optimal += 1;
            let value = left.objective_value();
            assert_float_eq!(value, right.objective_value(), abs <= 1e-6 * (1f64 + value.abs()), "problem {}", index);

            for solution in [left, right] {
                assert!(program.is_satisfied_by(solution.values(), 1e-6), "problem {}: {}\n{}", index, solution, program);
                assert_float_eq!(
                    program.objective_value_of(solution.values()), solution.objective_value(),
                    abs <= 1e-6 * (1f64 + value.abs())
                );
            }
        }
    }

    assert!(nr_optimal > 0);
}

#[test]
fn every_status_occurs() {
    let outcomes = Problems::seeded(0).take(500)
        .flat_map(|program| solve_with_each_rule(&program, 9))
        .collect::<Vec<_>>();

    for pivot_rule in [PivotRuleKind::Dantzig, PivotRuleKind::Bland] {
        let results = outcomes.iter()
            .filter(|(rule, _)| *rule == pivot_rule)
            .map(|(_, outcome)| outcome.result())
            .collect::<Vec<_>>();
        assert!(results.iter().any(|result| matches!(result, LinearProgramType::Infeasible)), "{:?}", pivot_rule);
        assert!(results.iter().any(|result| matches!(result, LinearProgramType::Unbounded)), "{:?}", pivot_rule);
        assert!(results.iter().any(|result| matches!(result, LinearProgramType::FiniteOptimum(_))), "{:?}", pivot_rule);
    }
}

#[test]
fn noise_in_ratio_test() {
    let program = fractional_single_variable();
    for (_, outcome) in solve_with_each_rule(&program, 3) {
        let solution = outcome.solution().unwrap();
        assert_float_eq!(solution.objective_value(), -1.5, abs <= 1e-9);
        assert_float_eq!(solution.values(), &[0f64, 0f64, 0.333][..], abs_all <= 1e-9);
        assert!(program.is_satisfied_by(solution.values(), 1e-2));
    }
}

#[test]
fn noise_in_artificial_cost() {
    let program = two_equalities();
    for (_, outcome) in solve_with_each_rule(&program, 3) {
        let solution = outcome.solution().unwrap();
        assert_float_eq!(solution.objective_value(), 12.816, abs <= 1e-9);
        assert_float_eq!(solution.values(), &[2.203, 3.072, 0f64, 1.459][..], abs_all <= 1e-9);
        assert!(program.is_satisfied_by(solution.values(), 1e-2));
    }
}

#[test]
fn noise_in_phase_two_costs() {
    let program = mixed_constraints();
    for (_, outcome) in solve_with_each_rule(&program, 3) {
        let solution = outcome.solution().unwrap();
        assert_float_eq!(solution.objective_value(), -2.351, abs <= 1e-9);
        assert_float_eq!(solution.values(), &[0.335, 0f64, 0.005, 0f64, 0.205][..], abs_all <= 1e-9);
        assert!(program.is_satisfied_by(solution.values(), 1e-2));
    }
}
