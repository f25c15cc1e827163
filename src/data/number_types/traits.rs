//! # Traits
//!
//! The hierarchy of number types is shallow: the tableau only works with floats. The
//! contracts of a field are not kept precisely by these types, which is why the simplex code
//! rounds to a fixed precision after each operation that changes the tableau.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::Float;

/// Floating point numbers that the simplex tableau can be defined over.
///
/// Implemented for `f32` and `f64` in the `float` module.
pub trait RealField: Float + Sum + Display + Debug + Send + Sync + 'static {
    /// Round to a fixed number of decimals.
    ///
    /// Values too large to be represented on the decimal grid are returned unchanged. Negative
    /// zero is returned as zero.
    ///
    /// # Arguments
    ///
    /// * `decimals`: Number of digits after the decimal point to keep.
    fn round_to_decimals(self, decimals: i32) -> Self;

    /// Convert a configuration value, possibly losing precision.
    fn from_f64_lossy(value: f64) -> Self;
}
