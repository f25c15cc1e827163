//! # Linear models
//!
//! Construct a linear program together with the way it should be solved, solve it and query the
//! results.
use crate::algorithm::two_phase::{Outcome, solve, solve_with_options};
use crate::algorithm::two_phase::observer::Observer;
use crate::algorithm::two_phase::options::SolverOptions;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRuleKind;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::error::InconsistencyError;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::number_types::traits::RealField;

/// A validated linear program and the options to solve it with.
///
/// Solving doesn't modify the model, it can be solved any number of times.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearModel<F> {
    program: LinearProgram<F>,
    options: SolverOptions,
}

impl<F: RealField> LinearModel<F> {
    /// Create a new model.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Rows of the coefficient matrix `A`.
    /// * `b`: Right hand side, one value per row.
    /// * `cost`: Objective coefficients, one per variable.
    /// * `objective`: Whether to minimize or maximize.
    /// * `constraint_types`: Direction of each row.
    /// * `pivot_rule`: How to choose the entering variable.
    /// * `verbose`: Whether to log the intermediate tableaus.
    ///
    /// # Return value
    ///
    /// The model, or an error if the dimensions of the input don't match or values are not finite.
    pub fn new(
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
        cost: Vec<F>,
        objective: Objective,
        constraint_types: Vec<ConstraintType>,
        pivot_rule: PivotRuleKind,
        verbose: bool,
    ) -> Result<Self, InconsistencyError> {
        let program = LinearProgram::new(constraints, b, cost, objective, constraint_types)?;
        let options = SolverOptions::default()
            .with_pivot_rule(pivot_rule)
            .with_verbose(verbose);

        Ok(Self::from_program(program, options))
    }

    /// Create a model from an already validated program.
    pub fn from_program(program: LinearProgram<F>, options: SolverOptions) -> Self {
        Self { program, options }
    }

    /// The linear program.
    pub fn program(&self) -> &LinearProgram<F> {
        &self.program
    }

    /// How the program is solved.
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Solve the program with both phases.
    ///
    /// If the model is verbose, intermediate results are reported to the `log` facade.
    pub fn solve(&self) -> Outcome<F> {
        solve_with_options(&self.program, &self.options)
    }

    /// Solve the program, reporting intermediate results to an observer.
    ///
    /// The `verbose` option is ignored.
    pub fn solve_with_observer<O: Observer<F>>(&self, observer: &mut O) -> Outcome<F> {
        solve(&self.program, &self.options, observer)
    }
}
