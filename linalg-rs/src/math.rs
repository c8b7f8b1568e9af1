use super::*;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

impl<T> Matrix<T> {
    pub(crate) fn ensure_same_shape<U>(&self, other: &Matrix<U>) -> Result<()> {
        if self.shape != *other.shape() {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape,
                right: *other.shape(),
            });
        }
        Ok(())
    }
}

impl<T: Copy> Matrix<T> {
    /// Applies `f` to every element, returning a matrix of the same shape.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(T) -> U,
    {
        Matrix::from_parts(self.shape, self.data.iter().copied().map(f).collect())
    }

    /// Combines two matrices of identical shape element by element.
    pub fn zip_map<U, F>(&self, other: &Matrix<T>, mut f: F) -> Result<Matrix<U>>
    where
        F: FnMut(T, T) -> U,
    {
        self.ensure_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix::from_parts(self.shape, data))
    }

    fn zip_apply<F>(&mut self, other: &Matrix<T>, mut f: F) -> Result<()>
    where
        F: FnMut(T, T) -> T,
    {
        self.ensure_same_shape(other)?;
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, &b)| *a = f(*a, b));
        Ok(())
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

fn ensure_no_zero<T: Scalar>(divisors: &[T]) -> Result<()> {
    if divisors.iter().any(|x| x.is_zero()) {
        return Err(MatrixError::DivisionByZero);
    }
    Ok(())
}

impl<T: Scalar> Matrix<T> {
    pub fn add_scalar(&self, x: T) -> Matrix<T> {
        self.map(|v| v + x)
    }

    pub fn sub_scalar(&self, x: T) -> Matrix<T> {
        self.map(|v| v - x)
    }

    pub fn mul_scalar(&self, x: T) -> Matrix<T> {
        self.map(|v| v * x)
    }

    /// Divides every element by `x`. Returns an error if `x` is zero.
    pub fn div_scalar(&self, x: T) -> Result<Matrix<T>> {
        if x.is_zero() {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.map(|v| v / x))
    }

    /// Divides every element by `x` in place. Returns an error if `x` is zero.
    pub fn div_scalar_in_place(&mut self, x: T) -> Result<()> {
        if x.is_zero() {
            return Err(MatrixError::DivisionByZero);
        }
        self.data.iter_mut().for_each(|v| *v = *v / x);
        Ok(())
    }

    /// Element-wise `self + other`, or `self - other` when `subtract` is set.
    pub fn sum(&self, other: &Matrix<T>, subtract: bool) -> Result<Matrix<T>> {
        if subtract {
            self.zip_map(other, |a, b| a - b)
        } else {
            self.zip_map(other, |a, b| a + b)
        }
    }

    /// Element-wise `self * other`, or `self / other` when `divide` is set.
    /// Division fails if any element of `other` is zero.
    pub fn multiply(&self, other: &Matrix<T>, divide: bool) -> Result<Matrix<T>> {
        if divide {
            self.ensure_same_shape(other)?;
            ensure_no_zero(&other.data)?;
            self.zip_map(other, |a, b| a / b)
        } else {
            self.zip_map(other, |a, b| a * b)
        }
    }

    pub fn add_in_place(&mut self, other: &Matrix<T>) -> Result<()> {
        self.zip_apply(other, |a, b| a + b)
    }

    pub fn sub_in_place(&mut self, other: &Matrix<T>) -> Result<()> {
        self.zip_apply(other, |a, b| a - b)
    }

    pub fn mul_in_place(&mut self, other: &Matrix<T>) -> Result<()> {
        self.zip_apply(other, |a, b| a * b)
    }

    pub fn div_in_place(&mut self, other: &Matrix<T>) -> Result<()> {
        self.ensure_same_shape(other)?;
        ensure_no_zero(&other.data)?;
        self.zip_apply(other, |a, b| a / b)
    }

    /// Sum of all elements, added in row-major order.
    pub fn accumulate(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Arithmetic mean of all elements. Returns an error for an empty matrix.
    pub fn mean(&self) -> Result<T> {
        // a count that T cannot represent has no usable divisor either
        let count = <T as NumCast>::from(self.len())
            .filter(|n| !n.is_zero())
            .ok_or(MatrixError::DivisionByZero)?;
        Ok(self.accumulate() / count)
    }

    fn indicator<F>(&self, mut predicate: F) -> Matrix<T>
    where
        F: FnMut(T) -> bool,
    {
        self.map(|v| if predicate(v) { T::one() } else { T::zero() })
    }

    /// Indicator matrix with 1 where the element is greater than `x`, 0 elsewhere.
    pub fn gt(&self, x: T) -> Matrix<T> {
        self.indicator(|v| v > x)
    }

    /// Indicator matrix with 1 where the element is less than `x`, 0 elsewhere.
    pub fn lt(&self, x: T) -> Matrix<T> {
        self.indicator(|v| v < x)
    }

    pub fn eq_scalar(&self, x: T) -> Matrix<T> {
        self.indicator(|v| v == x)
    }

    pub fn ne_scalar(&self, x: T) -> Matrix<T> {
        self.indicator(|v| v != x)
    }

    /// Compares two matrices element by element, producing an integer indicator matrix.
    pub fn eq_elements(&self, other: &Matrix<T>) -> Result<Matrix<i32>> {
        self.zip_map(other, |a, b| if a == b { 1 } else { 0 })
    }
}

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &Matrix<T>) -> Self::Output {
        self.sum(rhs, false)
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: &Matrix<T>) -> Self::Output {
        self.sum(rhs, true)
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        self.multiply(rhs, false)
    }
}

impl<T: Scalar> Div<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn div(self, rhs: &Matrix<T>) -> Self::Output {
        self.multiply(rhs, true)
    }
}

// Scalar operands are implemented per primitive type: a blanket `impl<T> Add<T>` would clash
// with the matrix operand impls above.
macro_rules! impl_matrix_scalar_ops {
    ($($scalar:ty),+) => {
        $(
            impl Add<$scalar> for &Matrix<$scalar> {
                type Output = Matrix<$scalar>;

                fn add(self, x: $scalar) -> Self::Output {
                    self.add_scalar(x)
                }
            }

            impl Sub<$scalar> for &Matrix<$scalar> {
                type Output = Matrix<$scalar>;

                fn sub(self, x: $scalar) -> Self::Output {
                    self.sub_scalar(x)
                }
            }

            impl Mul<$scalar> for &Matrix<$scalar> {
                type Output = Matrix<$scalar>;

                fn mul(self, x: $scalar) -> Self::Output {
                    self.mul_scalar(x)
                }
            }

            impl Div<$scalar> for &Matrix<$scalar> {
                type Output = Result<Matrix<$scalar>>;

                fn div(self, x: $scalar) -> Self::Output {
                    self.div_scalar(x)
                }
            }

            impl AddAssign<$scalar> for Matrix<$scalar> {
                fn add_assign(&mut self, x: $scalar) {
                    self.data.iter_mut().for_each(|v| *v += x);
                }
            }

            impl SubAssign<$scalar> for Matrix<$scalar> {
                fn sub_assign(&mut self, x: $scalar) {
                    self.data.iter_mut().for_each(|v| *v -= x);
                }
            }

            impl MulAssign<$scalar> for Matrix<$scalar> {
                fn mul_assign(&mut self, x: $scalar) {
                    self.data.iter_mut().for_each(|v| *v *= x);
                }
            }
        )+
    };
}

impl_matrix_scalar_ops!(f32, f64, i32, i64, isize, u32, u64, usize);
