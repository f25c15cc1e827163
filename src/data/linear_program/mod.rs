//! # Representation of linear programs
//!
//! A linear program is read in its general form, standardized into equality constraints with
//! slack, surplus and artificial columns, and after solving described by a solution.
pub mod elements;
pub mod error;
pub mod general_form;
pub mod standard_form;
pub mod solution;
