//! # The two phase Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! A first phase finds a basic feasible solution by minimizing the sum of artificial variables.
//! A second phase starts from that solution and optimizes the original objective. Both phases
//! share the same loop, the `primal` function.
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fmt;

use enum_map::{Enum, EnumMap};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::observer::{Logger, Observer, Silent};
use crate::algorithm::two_phase::options::SolverOptions;
use crate::algorithm::two_phase::phase_one::{Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, Dantzig, PivotRule, PivotRuleKind};
use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_program::elements::LinearProgramType;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::RealField;

pub mod tableau;
pub mod strategy;
pub mod phase_one;
pub mod phase_two;
pub mod options;
pub mod observer;


/// The two phases of the algorithm.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    One,
    Two,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Phase::One => f.write_str("Phase 1"),
            Phase::Two => f.write_str("Phase 2"),
        }
    }
}

/// Result of a complete solve.
///
/// Holds the status and solution of the problem, together with some statistics on how it was
/// obtained.
#[derive(Debug, PartialEq)]
pub struct Outcome<F> {
    result: LinearProgramType<F>,
    /// Number of pivots in each phase.
    ///
    /// Pivots that drive artificial variables out of the basis count towards the first phase.
    iterations: EnumMap<Phase, usize>,
    /// Number of constraint rows that were found to be redundant in the first phase.
    nr_redundant_rows: usize,
}

impl<F: RealField> Outcome<F> {
    /// Status of the problem, and its solution if there is a finite optimum.
    pub fn result(&self) -> &LinearProgramType<F> {
        &self.result
    }

    /// Whether the problem has a feasible solution.
    ///
    /// An unbounded problem is feasible.
    pub fn is_feasible(&self) -> bool {
        !matches!(self.result, LinearProgramType::Infeasible)
    }

    /// Whether the problem is not unbounded.
    ///
    /// An infeasible problem is reported as bounded.
    pub fn is_bounded(&self) -> bool {
        !matches!(self.result, LinearProgramType::Unbounded)
    }

    /// The solution, if the problem has a finite optimum.
    pub fn solution(&self) -> Option<&Solution<F>> {
        match &self.result {
            LinearProgramType::FiniteOptimum(solution) => Some(solution),
            LinearProgramType::Infeasible | LinearProgramType::Unbounded => None,
        }
    }

    /// Optimal objective value, if the problem has a finite optimum.
    pub fn optimal_value(&self) -> Option<F> {
        self.solution().map(Solution::objective_value)
    }

    /// Optimal objective value rounded to fewer decimals, if the problem has a finite optimum.
    pub fn rounded_optimal_value(&self, decimals: i32) -> Option<F> {
        self.solution().map(|solution| solution.rounded_objective_value(decimals))
    }

    /// Mapping from one-based decision variable index to its optimal value, if the problem has a
    /// finite optimum.
    pub fn coefficients(&self) -> Option<BTreeMap<usize, F>> {
        self.solution().map(Solution::coefficients)
    }

    /// Number of pivots done in a phase.
    pub fn iterations(&self, phase: Phase) -> usize {
        self.iterations[phase]
    }

    /// Number of pivots done in total.
    pub fn total_iterations(&self) -> usize {
        self.iterations.values().sum()
    }

    /// Number of constraint rows that were removed because they were redundant.
    pub fn nr_redundant_rows(&self) -> usize {
        self.nr_redundant_rows
    }
}

/// Solve a linear program using the two phase method.
///
/// # Arguments
///
/// * `program`: Problem to solve, it is not modified.
/// * `options`: Pivot rule and precision. The `verbose` field is ignored, the observer decides
/// what is reported.
/// * `observer`: Receives intermediate results.
///
/// # Return value
///
/// Whether the problem is feasible and bounded, and if so, its solution.
pub fn solve<F, O>(
    program: &LinearProgram<F>,
    options: &SolverOptions,
    observer: &mut O,
) -> Outcome<F>
where
    F: RealField,
    O: Observer<F>,
{
    match options.pivot_rule {
        PivotRuleKind::Dantzig => solve_with_rule::<_, Dantzig, _>(program, options, observer),
        PivotRuleKind::Bland => solve_with_rule::<_, Bland, _>(program, options, observer),
    }
}

/// Solve a linear program, reporting to the `log` facade if `options.verbose` is set.
pub fn solve_with_options<F: RealField>(program: &LinearProgram<F>, options: &SolverOptions) -> Outcome<F> {
    if options.verbose {
        solve(program, options, &mut Logger)
    } else {
        solve(program, options, &mut Silent)
    }
}

fn solve_with_rule<F, PR, O>(
    program: &LinearProgram<F>,
    options: &SolverOptions,
    observer: &mut O,
) -> Outcome<F>
where
    F: RealField,
    PR: PivotRule,
    O: Observer<F>,
{
    let mut iterations = EnumMap::default();

    let standard = StandardForm::new(program);
    let tolerance = F::from_f64_lossy(options.tolerance);
    let mut tableau = phase_one::artificial_tableau(&standard, options.decimals, tolerance);
    observer.tableau_built(Phase::One, &tableau);

    let (feasibility, nr_pivots) = phase_one::artificial_primal::<_, PR, _>(
        &mut tableau, tolerance, observer,
    );
    iterations[Phase::One] = nr_pivots;
    observer.phase_finished(Phase::One, nr_pivots);

    let nr_redundant_rows = match feasibility {
        RankedFeasibilityResult::Feasible { rank: Rank::Full } => 0,
        RankedFeasibilityResult::Feasible { rank: Rank::Deficient(rows) } => rows.len(),
        RankedFeasibilityResult::Infeasible => return Outcome {
            result: LinearProgramType::Infeasible,
            iterations,
            nr_redundant_rows: 0,
        },
    };

    phase_two::install_objective(&mut tableau, program);
    observer.tableau_built(Phase::Two, &tableau);

    let (result, nr_pivots) = primal::<_, PR, _>(&mut tableau, Phase::Two, observer);
    iterations[Phase::Two] = nr_pivots;
    observer.phase_finished(Phase::Two, nr_pivots);

    let result = match result {
        OptimizationResult::FiniteOptimum(bfs) => LinearProgramType::FiniteOptimum(
            phase_two::extract_solution(&bfs, tableau.objective_function_value(), program, options.output_decimals),
        ),
        OptimizationResult::Unbounded => LinearProgramType::Unbounded,
    };

    Outcome { result, iterations, nr_redundant_rows }
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be non negative (primal feasibility)
/// - The objective row is in canonical form
///
/// Without an anti cycling pivot rule, this loop might not terminate on degenerate problems.
///
/// # Arguments
///
/// * `tableau`: Tableau to pivot on until optimal.
/// * `phase`: Phase reported to the observer.
/// * `observer`: Receives each pivot.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum, and the
/// number of pivots done.
pub(crate) fn primal<F, PR, O>(
    tableau: &mut Tableau<F>,
    phase: Phase,
    observer: &mut O,
) -> (OptimizationResult<F>, usize)
where
    F: RealField,
    PR: PivotRule,
    O: Observer<F>,
{
    let mut rule = PR::new();
    let mut nr_pivots = 0;

    let result = loop {
        debug_assert_in_basic_feasible_solution_state(tableau);

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, _cost)) => {
                match tableau.select_primal_pivot_row(column_index, PR::TIE_BREAK) {
                    Some(row_index) => {
                        let pivot = tableau.bring_into_basis(column_index, row_index);
                        nr_pivots += 1;
                        observer.pivoted(phase, &pivot, tableau);
                    },
                    None => break OptimizationResult::Unbounded,
                }
            },
            None => break OptimizationResult::FiniteOptimum(tableau.current_bfs()),
        }
    };

    (result, nr_pivots)
}
