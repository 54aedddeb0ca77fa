//! Dense integer matrix type for Suma
//!
//! Provides a row-major 2D integer matrix with deterministic fill,
//! fixed-width printing, element-wise comparison, and sequential addition.
//! Parallel addition lives in [`crate::parallel`].
//!
//! # Example
//!
//! ```
//! use suma::Matrix;
//!
//! let m = Matrix::new(2, 3).unwrap();
//! assert_eq!(m.rows(), 2);
//! assert_eq!(m.cols(), 3);
//! ```

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Result, SumaError};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// A 2D integer matrix with row-major storage
///
/// Data is stored in row-major format (C-style), where consecutive elements
/// in memory belong to the same row. Row `i` occupies the contiguous slice
/// `[i * cols, (i + 1) * cols)` of the backing buffer, and the buffer length
/// is exactly `rows * cols`.
///
/// # Storage Layout
///
/// For a 2x3 matrix:
/// ```text
/// [[a, b, c],
///  [d, e, f]]
/// ```
/// Data is stored as: [a, b, c, d, e, f]
///
/// # Example
///
/// ```
/// use suma::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(m.get(0, 0), Some(&1));
/// assert_eq!(m.get(0, 1), Some(&2));
/// assert_eq!(m.get(1, 0), Some(&3));
/// assert_eq!(m.get(1, 1), Some(&4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

/// First element-wise difference found by [`Matrix::compare`]
///
/// Coordinates are row-major: the reported element is the first one, scanning
/// rows top to bottom and columns left to right, where the two matrices
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Row index of the differing element
    pub row: usize,
    /// Column index of the differing element
    pub col: usize,
    /// Value in the left-hand matrix
    pub left: i32,
    /// Value in the right-hand matrix
    pub right: i32,
}

impl Matrix {
    /// Creates a new zero-filled matrix
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows, must be at least 1
    /// * `cols` - Number of columns, must be at least 1
    ///
    /// # Errors
    ///
    /// Returns [`SumaError::InvalidDimension`] if either dimension is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use suma::Matrix;
    ///
    /// let m = Matrix::new(3, 4).unwrap();
    /// assert_eq!(m.shape(), (3, 4));
    /// assert!(Matrix::new(0, 4).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SumaError::InvalidDimension(format!(
                "matrix dimensions must be nonzero, got {rows}x{cols}"
            )));
        }
        Ok(Matrix {
            rows,
            cols,
            data: vec![0; rows * cols],
        })
    }

    /// Creates a matrix from a vector of data
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows
    /// * `cols` - Number of columns
    /// * `data` - Matrix elements in row-major order
    ///
    /// # Errors
    ///
    /// Returns [`SumaError::InvalidDimension`] if either dimension is zero or
    /// `data.len() != rows * cols`.
    ///
    /// # Example
    ///
    /// ```
    /// use suma::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.cols(), 2);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i32>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SumaError::InvalidDimension(format!(
                "matrix dimensions must be nonzero, got {rows}x{cols}"
            )));
        }
        if data.len() != rows * cols {
            return Err(SumaError::InvalidDimension(format!(
                "data length {} does not match matrix dimensions {}x{} (expected {})",
                data.len(),
                rows,
                cols,
                rows * cols
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Creates a matrix from a slice by copying the data
    ///
    /// # Errors
    ///
    /// Returns [`SumaError::InvalidDimension`] under the same conditions as
    /// [`Matrix::from_vec`].
    pub fn from_slice(rows: usize, cols: usize, data: &[i32]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a reference to an element at (row, col)
    ///
    /// Returns `None` if indices are out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&i32> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            self.data.get(row * self.cols + col)
        }
    }

    /// Gets a mutable reference to an element at (row, col)
    ///
    /// Returns `None` if indices are out of bounds
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut i32> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            let idx = row * self.cols + col;
            self.data.get_mut(idx)
        }
    }

    /// Returns row `i` as a bounded slice
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`, like slice indexing.
    ///
    /// # Example
    ///
    /// ```
    /// use suma::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m.row(1), &[4, 5, 6]);
    /// ```
    pub fn row(&self, i: usize) -> &[i32] {
        assert!(i < self.rows, "row index {i} out of range for {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns a reference to the underlying data
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Fills every element with a pseudo-random value in `0..100`
    ///
    /// Elements are drawn in row-major order from a generator seeded with
    /// `seed`, so the same seed always produces identical contents. Overwrites
    /// whatever the matrix held before.
    ///
    /// # Example
    ///
    /// ```
    /// use suma::Matrix;
    ///
    /// let mut a = Matrix::new(4, 4).unwrap();
    /// let mut b = Matrix::new(4, 4).unwrap();
    /// a.fill_random(3100);
    /// b.fill_random(3100);
    /// assert_eq!(a, b);
    /// ```
    pub fn fill_random(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for value in &mut self.data {
            *value = rng.random_range(0..100);
        }
    }

    /// Writes the matrix to stdout, fixed-width fields, one line per row
    ///
    /// Convenience wrapper around the [`fmt::Display`] implementation that
    /// appends a trailing blank line.
    pub fn print(&self) {
        println!("{self}\n");
    }

    /// Compares two matrices element-wise in row-major order
    ///
    /// Returns `Ok(None)` when the matrices are equal, or
    /// `Ok(Some(`[`Mismatch`]`))` describing the first differing element.
    /// Shapes are validated before any element is touched.
    ///
    /// # Errors
    ///
    /// Returns [`SumaError::ShapeMismatch`] if the dimensions differ.
    ///
    /// # Example
    ///
    /// ```
    /// use suma::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![1, 2, 9, 4]).unwrap();
    ///
    /// assert_eq!(a.compare(&a).unwrap(), None);
    /// let diff = a.compare(&b).unwrap().unwrap();
    /// assert_eq!((diff.row, diff.col), (1, 0));
    /// assert_eq!((diff.left, diff.right), (3, 9));
    /// ```
    pub fn compare(&self, other: &Matrix) -> Result<Option<Mismatch>> {
        if self.shape() != other.shape() {
            return Err(SumaError::shape_mismatch(self.shape(), other.shape()));
        }

        for (idx, (&left, &right)) in self.data.iter().zip(&other.data).enumerate() {
            if left != right {
                return Ok(Some(Mismatch {
                    row: idx / self.cols,
                    col: idx % self.cols,
                    left,
                    right,
                }));
            }
        }
        Ok(None)
    }

    /// Element-wise addition, single-threaded
    ///
    /// Computes `out[i][j] = self[i][j] + other[i][j]` into a fresh matrix of
    /// the same shape.
    ///
    /// # Overflow
    ///
    /// Addition wraps on overflow (two's-complement), via
    /// [`i32::wrapping_add`].
    ///
    /// # Errors
    ///
    /// Returns [`SumaError::ShapeMismatch`] if the dimensions differ.
    ///
    /// # Example
    ///
    /// ```
    /// use suma::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
    /// let sum = a.add(&b).unwrap();
    ///
    /// assert_eq!(sum.as_slice(), &[6, 8, 10, 12]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dims = %format!("{}x{}", self.rows, self.cols))))]
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        if self.shape() != other.shape() {
            return Err(SumaError::shape_mismatch(self.shape(), other.shape()));
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a.wrapping_add(b))
            .collect();

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl fmt::Display for Matrix {
    /// Row-major dump, right-aligned width-5 fields, newline per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for value in self.row(i) {
                write!(f, "{value:>5}")?;
            }
            if i + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
