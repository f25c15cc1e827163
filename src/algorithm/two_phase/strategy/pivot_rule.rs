//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use std::cmp::Ordering;

use crate::algorithm::two_phase::tableau::{Tableau, TieBreak};
use crate::data::linear_algebra::SparseTuple;
use crate::data::number_types::traits::RealField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row is found with the minimum ratio test. Only the way
/// ties in that test are broken depends on the rule.
pub trait PivotRule {
    /// How to choose between rows that attain the minimum ratio.
    const TIE_BREAK: TieBreak;

    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// Artificial columns are never selected.
    ///
    /// # Return value
    ///
    /// Index of a column with negative relative cost and that cost, or `None` if there is no such
    /// column and the tableau is optimal.
    fn select_primal_pivot_column<F: RealField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<SparseTuple<F>>;
}

/// All non basic, non artificial columns with a relative cost below minus the tableau tolerance, in
/// increasing order.
fn profitable_columns<F: RealField>(tableau: &Tableau<F>) -> impl Iterator<Item = SparseTuple<F>> + '_ {
    let threshold = -tableau.tolerance();
    (0..tableau.nr_non_artificial_columns())
        .filter(|&column| !tableau.is_in_basis(column))
        .map(|column| (column, tableau.relative_cost(column)))
        .filter(move |&(_, cost)| cost < threshold)
}

/// Pivot on the column which has the most negative relative cost.
///
/// Also known as the greedy rule. Ties are broken by taking the lowest column index, as well in
/// the ratio test. This may cycle on degenerate problems.
pub struct Dantzig;
impl PivotRule for Dantzig {
    const TIE_BREAK: TieBreak = TieBreak::FirstFound;

    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: RealField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<SparseTuple<F>> {
        // `min_by` returns the first of several equal minima
        profitable_columns(tableau)
            .min_by(|(_, left), (_, right)| left.partial_cmp(right).unwrap_or(Ordering::Equal))
    }
}

/// Bland's anti cycling rule.
///
/// Pivot on the first column with a negative relative cost, and in case of ties in the ratio test,
/// on the row whose basic variable has the lowest index. Guaranteed to terminate.
pub struct Bland;
impl PivotRule for Bland {
    const TIE_BREAK: TieBreak = TieBreak::LowestBasisIndex;

    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: RealField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<SparseTuple<F>> {
        profitable_columns(tableau).next()
    }
}

/// Runtime choice between the pivot rules.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PivotRuleKind {
    /// The greedy rule, see `Dantzig`.
    #[default]
    Dantzig,
    /// The anti cycling rule, see `Bland`.
    Bland,
}
