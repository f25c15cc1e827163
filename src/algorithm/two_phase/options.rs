//! # Solver options
//!
//! All configuration of a solve is held in a single value, there are no configuration files or
//! environment variables.
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRuleKind;

/// Configuration of the two phase simplex method.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverOptions {
    /// Rule to select the entering column and break ties in the ratio test.
    pub pivot_rule: PivotRuleKind,
    /// Whether to log each tableau and pivot.
    pub verbose: bool,
    /// Number of decimals all tableau values are rounded to after each pivot.
    ///
    /// The rounding grid `10^-decimals` should stay well below `tolerance`.
    pub decimals: i32,
    /// Number of decimals of reported variable values and the optimal value.
    pub output_decimals: i32,
    /// Magnitude below which tableau values count as zero: relative costs when selecting a column,
    /// column values in the ratio test and the artificial cost at the end of the first phase.
    pub tolerance: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            pivot_rule: PivotRuleKind::default(),
            verbose: false,
            decimals: 14,
            output_decimals: 3,
            tolerance: 1e-9,
        }
    }
}

impl SolverOptions {
    /// Select a pivot rule.
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }

    /// Log intermediate tableaus.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the tableau precision.
    pub fn with_decimals(mut self, decimals: i32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the precision of reported values.
    pub fn with_output_decimals(mut self, output_decimals: i32) -> Self {
        self.output_decimals = output_decimals;
        self
    }

    /// Set the zero threshold.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
