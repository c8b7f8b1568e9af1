use super::*;
use rand::Rng;
use rand::distributions::uniform::SampleUniform;
use std::ops::{Add, AddAssign, Deref, Div, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// A column vector: a [`Matrix`] whose shape is always `(n, 1)`.
///
/// The vector dereferences to its matrix for every read-only operation (products, reductions,
/// element access, comparisons). Operations that could change the column count, such as
/// [`Matrix::set_shape`], are not reachable; [`Vector::set_size`] is the only way to resize.
#[derive(Clone, PartialEq)]
pub struct Vector<T> {
    inner: Matrix<T>,
}

impl<T> Vector<T> {
    /// Creates an empty vector of shape `(0,1)`.
    pub fn new() -> Self {
        Self {
            inner: Matrix::from_parts(Shape::new(0, 1), Vec::new()),
        }
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            inner: Matrix::from_column(values),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.inner
    }

    pub fn into_matrix(self) -> Matrix<T> {
        self.inner
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    pub fn element_at_mut(&mut self, idx: usize) -> Result<&mut T> {
        self.inner.element_at_mut(idx)
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.inner.iter_mut()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Vector<T> {
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            inner: Matrix::filled((n, 1), value),
        }
    }
}

impl<T: Copy> Vector<T> {
    pub fn set_element_at(&mut self, value: T, idx: usize) -> Result<()> {
        self.inner.set_element_at(value, idx)
    }

    pub fn set_elements(&mut self, values: &[T]) -> Result<()> {
        self.inner.set_elements(values)
    }

    /// Copies the elements of `other` into this vector; both must have the same length.
    pub fn copy_from(&mut self, other: &Matrix<T>) -> Result<()> {
        self.inner.copy_from(other)
    }

    /// Broadcast fill: assigns `value` to every element.
    pub fn fill(&mut self, value: T) {
        self.inner.fill(value);
    }

    pub fn map<F>(&self, f: F) -> Vector<T>
    where
        F: FnMut(T) -> T,
    {
        Self {
            inner: self.inner.map(f),
        }
    }

    pub fn zip_map<F>(&self, other: &Vector<T>, f: F) -> Result<Vector<T>>
    where
        F: FnMut(T, T) -> T,
    {
        Ok(Self {
            inner: self.inner.zip_map(&other.inner, f)?,
        })
    }
}

impl<T: Scalar> Vector<T> {
    pub fn zeros(n: usize) -> Self {
        Self::filled(n, T::zero())
    }

    pub fn ones(n: usize) -> Self {
        Self::filled(n, T::one())
    }

    /// Sets the number of elements to `n`.
    ///
    /// Existing leading elements are kept; new elements are zero. The shape becomes `(n,1)`.
    pub fn set_size(&mut self, n: usize) {
        if n != self.inner.data.len() {
            log::debug!("resizing vector {} -> ({n},1)", self.inner.shape);
        }
        self.inner.data.resize(n, T::zero());
        self.inner.shape = Shape::new(n, 1);
    }

    pub fn add_scalar(&self, x: T) -> Vector<T> {
        self.map(|v| v + x)
    }

    pub fn sub_scalar(&self, x: T) -> Vector<T> {
        self.map(|v| v - x)
    }

    pub fn mul_scalar(&self, x: T) -> Vector<T> {
        self.map(|v| v * x)
    }

    pub fn div_scalar(&self, x: T) -> Result<Vector<T>> {
        Ok(Self {
            inner: self.inner.div_scalar(x)?,
        })
    }

    pub fn sum(&self, other: &Vector<T>, subtract: bool) -> Result<Vector<T>> {
        Ok(Self {
            inner: self.inner.sum(&other.inner, subtract)?,
        })
    }

    pub fn multiply(&self, other: &Vector<T>, divide: bool) -> Result<Vector<T>> {
        Ok(Self {
            inner: self.inner.multiply(&other.inner, divide)?,
        })
    }

    pub fn add_in_place(&mut self, other: &Vector<T>) -> Result<()> {
        self.inner.add_in_place(&other.inner)
    }

    pub fn sub_in_place(&mut self, other: &Vector<T>) -> Result<()> {
        self.inner.sub_in_place(&other.inner)
    }

    pub fn mul_in_place(&mut self, other: &Vector<T>) -> Result<()> {
        self.inner.mul_in_place(&other.inner)
    }

    pub fn div_in_place(&mut self, other: &Vector<T>) -> Result<()> {
        self.inner.div_in_place(&other.inner)
    }

    pub fn div_scalar_in_place(&mut self, x: T) -> Result<()> {
        self.inner.div_scalar_in_place(x)
    }
}

impl<T: Scalar + SampleUniform> Vector<T> {
    /// Creates a vector with elements drawn uniformly from `[floor, ceil)`.
    pub fn random<R: Rng + ?Sized>(n: usize, floor: T, ceil: T, rng: &mut R) -> Result<Self> {
        Ok(Self {
            inner: Matrix::random((n, 1), floor, ceil, rng)?,
        })
    }
}

impl<T> Deref for Vector<T> {
    type Target = Matrix<T>;

    fn deref(&self) -> &Matrix<T> {
        &self.inner
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_vec(values.into())
    }
}

impl<T> TryFrom<Matrix<T>> for Vector<T> {
    type Error = MatrixError;

    /// Accepts only single-column matrices.
    fn try_from(matrix: Matrix<T>) -> Result<Self> {
        if matrix.n_cols() != 1 {
            return Err(MatrixError::ShapeMismatch {
                left: *matrix.shape(),
                right: Shape::new(matrix.n_rows(), 1),
            });
        }
        Ok(Self { inner: matrix })
    }
}

impl<T> From<Vector<T>> for Matrix<T> {
    fn from(vector: Vector<T>) -> Self {
        vector.inner
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.inner[idx]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.inner[idx]
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.inner.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>>;

    fn add(self, rhs: &Vector<T>) -> Self::Output {
        self.sum(rhs, false)
    }
}

impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>>;

    fn sub(self, rhs: &Vector<T>) -> Self::Output {
        self.sum(rhs, true)
    }
}

impl<T: Scalar> Mul<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>>;

    fn mul(self, rhs: &Vector<T>) -> Self::Output {
        self.multiply(rhs, false)
    }
}

impl<T: Scalar> Div<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>>;

    fn div(self, rhs: &Vector<T>) -> Self::Output {
        self.multiply(rhs, true)
    }
}

macro_rules! impl_vector_scalar_ops {
    ($($scalar:ty),+) => {
        $(
            impl Add<$scalar> for &Vector<$scalar> {
                type Output = Vector<$scalar>;

                fn add(self, x: $scalar) -> Self::Output {
                    self.add_scalar(x)
                }
            }

            impl Sub<$scalar> for &Vector<$scalar> {
                type Output = Vector<$scalar>;

                fn sub(self, x: $scalar) -> Self::Output {
                    self.sub_scalar(x)
                }
            }

            impl Mul<$scalar> for &Vector<$scalar> {
                type Output = Vector<$scalar>;

                fn mul(self, x: $scalar) -> Self::Output {
                    self.mul_scalar(x)
                }
            }

            impl Div<$scalar> for &Vector<$scalar> {
                type Output = Result<Vector<$scalar>>;

                fn div(self, x: $scalar) -> Self::Output {
                    self.div_scalar(x)
                }
            }

            impl AddAssign<$scalar> for Vector<$scalar> {
                fn add_assign(&mut self, x: $scalar) {
                    self.inner += x;
                }
            }

            impl SubAssign<$scalar> for Vector<$scalar> {
                fn sub_assign(&mut self, x: $scalar) {
                    self.inner -= x;
                }
            }

            impl MulAssign<$scalar> for Vector<$scalar> {
                fn mul_assign(&mut self, x: $scalar) {
                    self.inner *= x;
                }
            }
        )+
    };
}

impl_vector_scalar_ops!(f32, f64, i32, i64, isize, u32, u64, usize);
