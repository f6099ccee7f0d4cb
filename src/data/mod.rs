//! Data input abstractions for byte-valued feature matrices.
//!
//! # Overview
//!
//! Training consumes three data types:
//!
//! - [`FeatureMatrix`]: quantized feature data, held feature-major (one
//!   contiguous block of sample values per feature) regardless of the
//!   orientation it was supplied in
//! - [`Labels`]: binary labels validated to be exactly -1 or +1
//! - [`SortedColumns`]: per-feature sorted values plus the permutation back
//!   to original sample indices, built once before decision-stump training
//!
//! # ndarray Integration
//!
//! Constructors accept `ndarray` views so callers can hand over matrices in
//! either orientation without copying first. Internally the data is flattened
//! into plain byte blocks for cache-friendly per-feature iteration.

mod labels;
mod matrix;
mod sorted;

pub use labels::{LabelError, Labels};
pub use matrix::FeatureMatrix;
pub use sorted::SortedColumns;
