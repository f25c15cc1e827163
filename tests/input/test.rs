use tableau_lp::{ConstraintType, InconsistencyError, LinearModel, Objective, PivotRuleKind};

fn model(
    constraints: Vec<Vec<f64>>,
    b: Vec<f64>,
    cost: Vec<f64>,
    constraint_types: Vec<ConstraintType>,
    verbose: bool,
) -> Result<LinearModel<f64>, InconsistencyError> {
    LinearModel::new(constraints, b, cost, Objective::Maximize, constraint_types, PivotRuleKind::Dantzig, verbose)
}

#[test]
fn mismatched_dimensions() {
    assert_eq!(
        model(vec![vec![1f64, 1f64]], vec![1f64, 2f64], vec![1f64, 1f64], vec![ConstraintType::Less], false),
        Err(InconsistencyError::RightHandSideLength { expected: 1, found: 2 }),
    );
    assert_eq!(
        model(vec![vec![1f64, 1f64], vec![1f64]], vec![1f64, 2f64], vec![1f64, 1f64], vec![ConstraintType::Less; 2], false),
        Err(InconsistencyError::RowLength { row: 1, expected: 2, found: 1 }),
    );
    assert_eq!(
        model(vec![], vec![], vec![], vec![], false),
        Err(InconsistencyError::NoVariables),
    );
}

#[test]
fn not_finite() {
    let error = model(
        vec![vec![1f64, f64::NAN]], vec![1f64], vec![1f64, 1f64], vec![ConstraintType::Less], false,
    ).unwrap_err();
    assert_eq!(error, InconsistencyError::NotFinite("A[0][1]".to_string()));
    assert_eq!(error.to_string(), "ProgramError: value A[0][1] is not finite");

    let error = model(
        vec![vec![1f64, 1f64]], vec![f64::INFINITY], vec![1f64, 1f64], vec![ConstraintType::Less], false,
    ).unwrap_err();
    assert_eq!(error, InconsistencyError::NotFinite("b[0]".to_string()));
}

#[test]
fn without_constraints() {
    // Only the non negativity bounds remain
    let bounded = LinearModel::new(
        vec![], vec![], vec![1f64, 2f64], Objective::Minimize, vec![], PivotRuleKind::Bland, false,
    ).unwrap();
    let outcome = bounded.solve();
    assert_eq!(outcome.optimal_value(), Some(0f64));
    assert_eq!(outcome.total_iterations(), 0);

    let unbounded = model(vec![], vec![], vec![1f64, 2f64], vec![], false).unwrap();
    assert!(!unbounded.solve().is_bounded());
}

#[test]
fn verbose() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();

    let constraints = vec![vec![1f64, 1f64], vec![1f64, 1f64], vec![1f64, 3f64]];
    let b = vec![4f64, 4f64, 6f64];
    let cost = vec![1f64, 1f64];
    let constraint_types = vec![ConstraintType::Equal, ConstraintType::Equal, ConstraintType::Less];

    let verbose = model(constraints.clone(), b.clone(), cost.clone(), constraint_types.clone(), true).unwrap();
    let silent = model(constraints, b, cost, constraint_types, false).unwrap();

    assert_eq!(verbose.solve(), silent.solve());
    assert_eq!(verbose.solve().optimal_value(), Some(4f64));
    assert_eq!(verbose.solve().nr_redundant_rows(), 1);
}

#[test]
fn print_solution() {
    let model = model(
        vec![vec![1f64, 0f64], vec![0f64, 2f64], vec![3f64, 2f64]],
        vec![4f64, 12f64, 18f64],
        vec![3f64, 5f64],
        vec![ConstraintType::Less; 3],
        false,
    ).unwrap();

    let outcome = model.solve();
    let solution = outcome.solution().unwrap();
    assert_eq!(solution.to_string(), "x_1 = 2\nx_2 = 6\nOptimal value: 36\n");
    assert_eq!(solution.value(2), Some(6f64));
}
