use super::*;
use rand::Rng;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};

impl<T> Matrix<T> {
    /// Creates an empty 0x0 matrix.
    pub fn new() -> Self {
        Self {
            shape: Shape::default(),
            data: Vec::new(),
        }
    }

    /// Creates a column matrix (Nx1) from the given values.
    pub fn from_column(values: Vec<T>) -> Self {
        Self {
            shape: Shape::new(values.len(), 1),
            data: values,
        }
    }

    /// Creates a matrix from row-major values.
    /// Returns an error if the number of values differs from `rows * cols`.
    pub fn from_vec(values: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        let shape = Shape::new(rows, cols);
        if values.len() != shape.len() {
            return Err(MatrixError::ElementCountMismatch {
                expected: shape.len(),
                actual: values.len(),
            });
        }

        Ok(Self {
            shape,
            data: values,
        })
    }

    pub(crate) fn from_parts(shape: Shape, data: Vec<T>) -> Self {
        debug_assert_eq!(shape.len(), data.len());
        Self { shape, data }
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a single row matrix (1xN).
    pub fn from_row(values: &[T]) -> Self {
        Self {
            shape: Shape::new(1, values.len()),
            data: values.to_vec(),
        }
    }

    /// Creates a matrix of the given shape with every element set to `value`.
    pub fn filled(shape: impl Into<Shape>, value: T) -> Self {
        let shape = shape.into();
        Self {
            data: vec![value; shape.len()],
            shape,
        }
    }

    /// Returns an independent deep copy; equivalent to `clone`.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<T: Scalar> Matrix<T> {
    /// Creates a zero-filled matrix. Accepts either `(rows, cols)` or a [`Shape`].
    pub fn with_shape(shape: impl Into<Shape>) -> Self {
        Self::filled(shape, T::zero())
    }

    pub fn zeros(shape: impl Into<Shape>) -> Self {
        Self::filled(shape, T::zero())
    }

    pub fn ones(shape: impl Into<Shape>) -> Self {
        Self::filled(shape, T::one())
    }

    /// Creates a matrix with ones on the main diagonal and zeros elsewhere.
    /// The matrix does not need to be square: the diagonal stops at `min(rows, cols)`.
    pub fn id(shape: impl Into<Shape>) -> Self {
        let mut matrix = Self::zeros(shape);
        let cols = matrix.shape.cols();
        for i in 0..matrix.shape.rows().min(cols) {
            matrix.data[i * cols + i] = T::one();
        }
        matrix
    }
}

impl<T: Scalar + SampleUniform> Matrix<T> {
    /// Creates a matrix with elements drawn uniformly from `[floor, ceil)`.
    ///
    /// The random source is passed explicitly so that results are reproducible with a seeded
    /// generator. Returns an error if `floor` is not strictly below `ceil`, if a bound is not finite
    /// or if the width of a floating point range overflows.
    pub fn random<R: Rng + ?Sized>(
        shape: impl Into<Shape>,
        floor: T,
        ceil: T,
        rng: &mut R,
    ) -> Result<Self> {
        let shape = shape.into();
        if !is_sampling_range(floor, ceil) {
            return Err(MatrixError::InvalidRange {
                floor: floor.to_string(),
                ceil: ceil.to_string(),
            });
        }

        let distribution = Uniform::new(floor, ceil);
        let data = (0..shape.len()).map(|_| distribution.sample(rng)).collect();

        Ok(Self { shape, data })
    }
}

/// Checks that `[floor, ceil)` is a range `Uniform` can sample from.
fn is_sampling_range<T: Scalar>(floor: T, ceil: T) -> bool {
    if !(floor < ceil) {
        return false;
    }

    let (Some(low), Some(high)) = (floor.to_f64(), ceil.to_f64()) else {
        return false;
    };
    if !low.is_finite() || !high.is_finite() {
        return false;
    }

    // Integer ranges are sampled through their unsigned width and never overflow.
    let integral = T::one() / (T::one() + T::one()) == T::zero();

    integral
        || <T as NumCast>::from(high - low)
            .and_then(|width| width.to_f64())
            .is_some_and(f64::is_finite)
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        let (rows_count, cols_count) = if R == 0 { (0, 0) } else { (R, C) };
        Self {
            shape: Shape::new(rows_count, cols_count),
            data: rows.into_iter().flatten().collect(),
        }
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    /// Builds a matrix from nested rows; every row must have the same length.
    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MatrixError::InvalidLiteral {
                row,
                expected: cols,
                actual: values.len(),
            });
        }

        let shape = Shape::new(rows.len(), cols);
        Ok(Self {
            shape,
            data: rows.into_iter().flatten().collect(),
        })
    }
}
