//! # Algorithms
use crate::data::linear_algebra::SparseTuple;

pub mod two_phase;

/// Starting from a basic feasible solution, the primal simplex method either finds a finite
/// optimum or an unbounded direction.
///
/// Infeasibility is not a possible result: it is detected by the first phase, from the value of
/// the artificial objective. A finite optimum is described by the (column, value) tuples of the
/// basic variables of the final tableau, which still includes slack and surplus variables.
#[allow(missing_docs)]
#[derive(PartialEq, Debug)]
pub enum OptimizationResult<F> {
    FiniteOptimum(Vec<SparseTuple<F>>),
    Unbounded,
}
