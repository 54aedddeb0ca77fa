//! Row-partitioned parallel addition
//!
//! Splits the rows of the output matrix into contiguous, non-overlapping
//! ranges, one per worker thread. Workers share read-only views of both
//! operands and each owns a disjoint mutable chunk of the result buffer, so
//! no locks or atomics are needed; the caller joins every worker before the
//! result is returned.
//!
//! # Example
//!
//! ```
//! use suma::Matrix;
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
//!
//! let sum = a.add_parallel(&b, 4).unwrap();
//! assert_eq!(sum.as_slice(), &[6, 8, 10, 12]);
//! ```

use std::mem;
use std::ops::Range;
use std::thread;

use crate::{Matrix, Result, SumaError};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Row range owned by worker `worker` out of `workers` over `rows` rows
///
/// `worker * rows / workers .. (worker + 1) * rows / workers` with integer
/// division. For any `rows` and `workers >= 1` the spans are pairwise
/// disjoint and cover `[0, rows)` exactly; ranges may be empty when
/// `workers > rows`. The rounding is the load-balancing tie-break rule:
/// span lengths differ by at most one.
fn row_span(worker: usize, workers: usize, rows: usize) -> Range<usize> {
    (worker * rows) / workers..((worker + 1) * rows) / workers
}

impl Matrix {
    /// Element-wise addition across `threads` worker threads
    ///
    /// Allocates the result once up front, partitions its rows into
    /// contiguous disjoint ranges, and spawns one scoped thread per range.
    /// Each worker reads its slice of both operands and writes only its own
    /// rows of the result. Blocks until every worker has finished.
    ///
    /// Threads are spawned per call, not pooled. The worker count is capped
    /// at the number of rows, since extra workers would receive empty row
    /// ranges; the capped schedule writes the same result.
    ///
    /// # Overflow
    ///
    /// Wraps on overflow, same policy as [`Matrix::add`].
    ///
    /// # Errors
    ///
    /// Returns [`SumaError::InvalidThreadCount`] if `threads == 0`,
    /// [`SumaError::ShapeMismatch`] if the dimensions differ, and
    /// [`SumaError::WorkerPanicked`] if any worker panicked (the partially
    /// written result is discarded).
    ///
    /// # Example
    ///
    /// ```
    /// use suma::Matrix;
    ///
    /// let mut a = Matrix::new(100, 80).unwrap();
    /// let mut b = Matrix::new(100, 80).unwrap();
    /// a.fill_random(1);
    /// b.fill_random(2);
    ///
    /// assert_eq!(a.add_parallel(&b, 8).unwrap(), a.add(&b).unwrap());
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dims = %format!("{}x{}", self.rows(), self.cols()), threads)))]
    pub fn add_parallel(&self, other: &Matrix, threads: usize) -> Result<Matrix> {
        if threads == 0 {
            return Err(SumaError::InvalidThreadCount);
        }
        if self.shape() != other.shape() {
            return Err(SumaError::shape_mismatch(self.shape(), other.shape()));
        }

        let rows = self.rows();
        let cols = self.cols();
        let workers = threads.min(rows);

        let mut out = vec![0i32; rows * cols];
        let a = self.as_slice();
        let b = other.as_slice();

        let panicked = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            let mut rest = out.as_mut_slice();

            for worker in 0..workers {
                let span = row_span(worker, workers, rows);
                let len = span.len() * cols;
                let (chunk, tail) = mem::take(&mut rest).split_at_mut(len);
                rest = tail;
                let a_part = &a[span.start * cols..span.end * cols];
                let b_part = &b[span.start * cols..span.end * cols];

                handles.push(scope.spawn(move || {
                    for ((dst, &x), &y) in chunk.iter_mut().zip(a_part).zip(b_part) {
                        *dst = x.wrapping_add(y);
                    }
                }));
            }

            // Join barrier: every worker finishes before the scope ends.
            let mut panicked = false;
            for handle in handles {
                if handle.join().is_err() {
                    panicked = true;
                }
            }
            panicked
        });

        if panicked {
            return Err(SumaError::WorkerPanicked);
        }
        Matrix::from_vec(rows, cols, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_span_covers_rows_disjointly() {
        for rows in 1..=40 {
            for workers in 1..=rows + 5 {
                let mut next = 0;
                for worker in 0..workers {
                    let span = row_span(worker, workers, rows);
                    assert_eq!(span.start, next, "gap or overlap at worker {worker}");
                    assert!(span.end >= span.start);
                    next = span.end;
                }
                assert_eq!(next, rows, "rows={rows} workers={workers}");
            }
        }
    }

    #[test]
    fn test_row_span_balanced() {
        // Span lengths differ by at most one.
        for rows in 1..=40 {
            for workers in 1..=rows {
                let lens: Vec<usize> = (0..workers)
                    .map(|w| row_span(w, workers, rows).len())
                    .collect();
                let min = lens.iter().min().unwrap();
                let max = lens.iter().max().unwrap();
                assert!(max - min <= 1, "rows={rows} workers={workers} lens={lens:?}");
            }
        }
    }

    #[test]
    fn test_row_span_more_workers_than_rows() {
        let spans: Vec<_> = (0..7).map(|w| row_span(w, 7, 3)).collect();
        assert!(spans.iter().any(|s| s.is_empty()));
        assert_eq!(spans.iter().map(|s| s.len()).sum::<usize>(), 3);
    }

    #[test]
    fn test_add_parallel_concrete() {
        let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
        let sum = a.add_parallel(&b, 4).unwrap();
        assert_eq!(sum.as_slice(), &[6, 8, 10, 12]);
    }

    #[test]
    fn test_add_parallel_matches_sequential() {
        let mut a = Matrix::new(13, 9).unwrap();
        let mut b = Matrix::new(13, 9).unwrap();
        a.fill_random(3100);
        b.fill_random(4200);
        let expected = a.add(&b).unwrap();

        for threads in [1, 2, 7, a.rows() + 5] {
            let sum = a.add_parallel(&b, threads).unwrap();
            assert_eq!(expected.compare(&sum).unwrap(), None, "threads={threads}");
        }
    }

    #[test]
    fn test_add_parallel_single_row() {
        let a = Matrix::from_vec(1, 4, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::from_vec(1, 4, vec![10, 20, 30, 40]).unwrap();
        let sum = a.add_parallel(&b, 8).unwrap();
        assert_eq!(sum.as_slice(), &[11, 22, 33, 44]);
    }

    #[test]
    fn test_add_parallel_zero_threads() {
        let a = Matrix::new(2, 2).unwrap();
        let b = Matrix::new(2, 2).unwrap();
        assert_eq!(a.add_parallel(&b, 0), Err(SumaError::InvalidThreadCount));
    }

    #[test]
    fn test_add_parallel_shape_mismatch() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(3, 3).unwrap();
        assert_eq!(
            a.add_parallel(&b, 2),
            Err(SumaError::shape_mismatch((2, 3), (3, 3)))
        );
    }

    #[test]
    fn test_add_parallel_wraps_on_overflow() {
        let a = Matrix::from_vec(2, 1, vec![i32::MAX, i32::MIN]).unwrap();
        let b = Matrix::from_vec(2, 1, vec![1, -1]).unwrap();
        let sum = a.add_parallel(&b, 2).unwrap();
        assert_eq!(sum.as_slice(), &[i32::MIN, i32::MAX]);
    }
}
