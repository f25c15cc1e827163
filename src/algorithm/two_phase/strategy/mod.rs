//! # Strategies
//!
//! Choices the simplex method leaves open, made by swappable types.
pub mod pivot_rule;
