//! Helper methods for the accuracy of floating point calculations.
use num_traits::Float;

/// Snap a value to the nearest multiple of `1 / scale`.
///
/// # Arguments
///
/// * `value`: Float (potentially having rounding errors) to round.
/// * `scale`: Inverse of the grid spacing, e.g. `1e10` to keep ten decimals.
/// * `exactly_representable`: Magnitude from which on a scaled float has no fractional part.
///
/// # Return value
///
/// The rounded value, or `value` itself if `value * scale` is too large to be rounded without
/// introducing a new error.
pub fn round_to_grid<F: Float>(value: F, scale: F, exactly_representable: F) -> F {
    debug_assert!(scale > F::zero());

    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= exactly_representable {
        return value;
    }

    let rounded = scaled.round() / scale;
    if rounded.is_zero() {
        // Also gets rid of -0
        F::zero()
    } else {
        rounded
    }
}

/// Whether a value is within `tolerance` of zero.
pub fn is_close_to_zero<F: Float>(value: F, tolerance: F) -> bool {
    value.abs() <= tolerance
}
