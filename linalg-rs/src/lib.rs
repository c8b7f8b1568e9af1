//! Library crate for linalg_rs
//!

use num_traits::{Num, NumCast};
use std::fmt;

mod constructive;
mod display;
mod error;
pub mod functions;
mod iterator;
mod math;
mod matmul;
mod misc;
mod shape;
mod vector;
mod view;

pub use crate::error::{MatrixError, Position};
pub use crate::iterator::Rows;
pub use crate::shape::Shape;
pub use crate::vector::Vector;

pub type Result<T> = std::result::Result<T, error::MatrixError>;

/// Numeric element type accepted by the arithmetic parts of the API.
pub trait Scalar: Copy + PartialOrd + fmt::Debug + fmt::Display + Num + NumCast {}

impl<T> Scalar for T where T: Copy + PartialOrd + fmt::Debug + fmt::Display + Num + NumCast {}

/// A dense two-dimensional matrix with generic element type T.
///
/// Elements live in a single contiguous buffer in row-major order: the element at row `i` and
/// column `j` is stored at linear index `i * cols + j`. The buffer length always equals
/// `shape.len()`. Every matrix exclusively owns its buffer, so cloning is a deep copy and
/// moving transfers the buffer without copying (`std::mem::take` leaves an empty 0x0 matrix).
///
/// Operations that combine matrices validate their operands before touching any storage, so a
/// failed call never leaves the receiver partially modified.
///
/// # Iteration order
/// Every traversal exposed by this type (`iter`, `rows`, `as_slice`, `Display`) walks rows in
/// increasing order and columns in increasing order within a row. Text formats built on top of
/// the matrix may rely on this order.
#[derive(Clone)]
pub struct Matrix<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a matrix from a two-dimensional literal; all rows must have the same length.
///
/// ```
/// use linalg_rs::matrix;
///
/// let m = matrix![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(m.n_rows(), 2);
/// assert_eq!(m.n_cols(), 3);
/// ```
#[macro_export]
macro_rules! matrix {
    () => {
        $crate::Matrix::new()
    };
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Matrix::from([$([$($x),*]),+])
    };
}
