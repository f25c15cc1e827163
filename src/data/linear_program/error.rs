//! # Error reporting for malformed linear programs
//!
//! Infeasible and unbounded programs are not errors, those are results of solving. The errors
//! here describe inputs from which no tableau can be built at all.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// An `InconsistencyError` is created when the dimensions or values of a linear program don't fit
/// together.
///
/// It is returned before any tableau is built.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InconsistencyError {
    /// There are no variables, so there is nothing to optimize.
    NoVariables,
    /// The right hand side doesn't have one value per constraint row.
    RightHandSideLength {
        /// Number of rows in the constraint matrix.
        expected: usize,
        /// Number of right hand side values.
        found: usize,
    },
    /// The constraint types don't have one value per constraint row.
    ConstraintTypesLength {
        /// Number of rows in the constraint matrix.
        expected: usize,
        /// Number of constraint types.
        found: usize,
    },
    /// A constraint row doesn't have one coefficient per variable.
    RowLength {
        /// Index of the row in the constraint matrix.
        row: usize,
        /// Number of cost coefficients.
        expected: usize,
        /// Number of coefficients in the row.
        found: usize,
    },
    /// A value is NaN or infinite.
    ///
    /// The contained `String` describes where the value was found.
    NotFinite(String),
}

impl Display for InconsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InconsistencyError::NoVariables => write!(f, "ProgramError: the problem has no variables"),
            InconsistencyError::RightHandSideLength { expected, found } => write!(
                f, "ProgramError: expected {} right hand side values, found {}", expected, found,
            ),
            InconsistencyError::ConstraintTypesLength { expected, found } => write!(
                f, "ProgramError: expected {} constraint types, found {}", expected, found,
            ),
            InconsistencyError::RowLength { row, expected, found } => write!(
                f, "ProgramError: row {} has {} coefficients, expected {}", row, found, expected,
            ),
            InconsistencyError::NotFinite(location) => write!(
                f, "ProgramError: value {} is not finite", location,
            ),
        }
    }
}

impl Error for InconsistencyError {}
