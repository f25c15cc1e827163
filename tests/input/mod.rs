//! # Model input
//!
//! Constructing models from user input, and solving them with and without reporting.

#[cfg(test)]
mod test;
