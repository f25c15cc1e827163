//! # Number types
//!
//! The tableau is dense and is operated upon with floating point numbers. Accumulated rounding
//! errors are kept in check by snapping values to a fixed decimal grid after every basis change,
//! see the `float` module.
pub mod traits;
pub mod float;
