//! Suma: Dense Integer Matrices with Row-Partitioned Parallel Addition
//!
//! **Suma** (Spanish: "sum") is a small linear-algebra primitive: a row-major
//! dense integer matrix with deterministic pseudo-random fill, fixed-width
//! printing, element-wise comparison, and element-wise addition that runs
//! either single-threaded or split across a caller-chosen number of worker
//! threads over disjoint row ranges.
//!
//! # Design Principles
//!
//! - **One owned buffer**: a matrix is a single contiguous `Vec<i32>` plus a
//!   `row(i)` accessor returning a bounded slice; no pointer-to-pointer
//!   indirection, no dangling-row class of bug.
//! - **Ownership-partitioned parallelism**: the parallel adder splits the
//!   result buffer into disjoint row-range chunks with `split_at_mut`, hands
//!   each chunk to one scoped thread, and joins them all before returning.
//!   No locks, no atomics, no `unsafe`.
//! - **Explicit errors**: shape and argument validation happens before any
//!   allocation or mutation, surfaced as [`SumaError`] values.
//!
//! # Quick Start
//!
//! ```rust
//! use suma::Matrix;
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
//!
//! let sequential = a.add(&b).unwrap();
//! let parallel = a.add_parallel(&b, 4).unwrap();
//!
//! assert_eq!(sequential.as_slice(), &[6, 8, 10, 12]);
//! assert_eq!(sequential, parallel);
//! ```

pub mod error;
pub mod matrix;
pub mod parallel;

pub use error::{Result, SumaError};
pub use matrix::{Matrix, Mismatch};
