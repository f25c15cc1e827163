//! # Floating point numbers
//!
//! Assumed to be fast enough for the small, dense problems this crate targets. Correctness
//! guarantees are harder to give due to (accumulating) rounding errors, which are trimmed after
//! every pivot by rounding to a decimal grid.
use crate::data::number_types::float::numerical_precision::round_to_grid;
use crate::data::number_types::traits::RealField;

pub mod numerical_precision;

macro_rules! impl_real_field {
    ($f_t:ident) => {
        impl RealField for $f_t {
            fn round_to_decimals(self, decimals: i32) -> Self {
                // Beyond this magnitude, the scaled value has no fractional part left to round
                let exactly_representable = (2 as $f_t).powi($f_t::MANTISSA_DIGITS as i32 - 1);
                round_to_grid(self, (10 as $f_t).powi(decimals), exactly_representable)
            }

            fn from_f64_lossy(value: f64) -> Self {
                value as $f_t
            }
        }
    }
}
impl_real_field!(f64);
impl_real_field!(f32);
