//! # Problems shared by the unit tests.
//!
//! Convention for function names:
//!
//! * `fn program()`
//! * `fn standard_form()`
//! * `fn artificial_tableau_form()`
//! * `fn tableau_form()`
