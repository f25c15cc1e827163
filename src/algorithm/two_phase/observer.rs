//! # Observing a solve
//!
//! Intermediate states of the algorithm are reported to an `Observer`. It has no influence on
//! the control flow.
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::tableau::{Pivot, Tableau};
use crate::data::number_types::traits::RealField;

/// Receives intermediate results of the two phase method.
///
/// All methods do nothing by default.
pub trait Observer<F> {
    /// A tableau was created for a phase, before any pivots.
    fn tableau_built(&mut self, _phase: Phase, _tableau: &Tableau<F>) {
    }

    /// A basis change happened.
    ///
    /// # Arguments
    ///
    /// * `phase`: Phase in which the pivot happened.
    /// * `pivot`: Description of the basis change.
    /// * `tableau`: State after the basis change.
    fn pivoted(&mut self, _phase: Phase, _pivot: &Pivot<F>, _tableau: &Tableau<F>) {
    }

    /// Artificial variables were removed at the end of the first phase.
    ///
    /// # Arguments
    ///
    /// * `rows_removed`: Indices of redundant rows that were deleted, w.r.t. the tableau before
    /// deletion.
    /// * `tableau`: State without artificial columns.
    fn artificial_removed(&mut self, _rows_removed: &[usize], _tableau: &Tableau<F>) {
    }

    /// A phase ended.
    fn phase_finished(&mut self, _phase: Phase, _nr_pivots: usize) {
    }
}

/// Ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct Silent;
impl<F> Observer<F> for Silent {}

/// Forwards to the `log` facade.
///
/// Phase milestones are logged at info level, pivots at debug level and full tableaus at trace
/// level.
#[derive(Copy, Clone, Debug, Default)]
pub struct Logger;
impl<F: RealField> Observer<F> for Logger {
    fn tableau_built(&mut self, phase: Phase, tableau: &Tableau<F>) {
        log::info!(
            "----- {}: {} rows, {} columns, objective value {}",
            phase, tableau.nr_rows(), tableau.nr_columns(), tableau.objective_function_value(),
        );
        log::trace!("\n{}", tableau);
    }

    fn pivoted(&mut self, phase: Phase, pivot: &Pivot<F>, tableau: &Tableau<F>) {
        log::debug!(
            "{}: pivot on ({}, {}) = {}, {} enters, {} leaves, objective value {}",
            phase,
            pivot.row,
            pivot.column,
            pivot.element,
            tableau.column_label(pivot.column),
            tableau.column_label(pivot.leaving),
            tableau.objective_function_value(),
        );
        log::trace!("\n{}", tableau);
    }

    fn artificial_removed(&mut self, rows_removed: &[usize], tableau: &Tableau<F>) {
        if rows_removed.is_empty() {
            log::info!("Artificial variables removed");
        } else {
            log::info!("Artificial variables removed, redundant rows {:?} deleted", rows_removed);
        }
        log::trace!("\n{}", tableau);
    }

    fn phase_finished(&mut self, phase: Phase, nr_pivots: usize) {
        log::info!("----- {} finished in {} iterations", phase, nr_pivots);
    }
}

