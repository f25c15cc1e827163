//! # Linear algebra primitives
//!
//! The tableau is small and dense, so only a dense matrix is provided. Columns that are added to
//! a problem while standardizing it are unit columns, and are described by a single tuple.

pub mod matrix;

/// An (index, value) pair, describing a single nonzero element of a sparse vector.
pub type SparseTuple<F> = (usize, F);
