use super::*;

impl<T: Scalar> Matrix<T> {
    /// Performs matrix multiplication `self · other`.
    ///
    /// Requires `self.cols == other.rows` and returns a `(self.rows, other.cols)` matrix where
    /// `result[i][j] = Σ_k self[i][k] · other[k][j]`, summed in increasing `k`.
    pub fn dot(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        let (m, k) = (self.shape.rows(), self.shape.cols());
        let (k2, n) = (other.shape.rows(), other.shape.cols());

        if k != k2 {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape,
                right: other.shape,
            });
        }

        let mut result = vec![T::zero(); m * n];

        // i-k-j order walks both operands row by row; every result[i][j] still receives its
        // products in increasing k
        for i in 0..m {
            let out = &mut result[i * n..(i + 1) * n];
            for l in 0..k {
                let a = self.data[i * k + l];
                let b_row = &other.data[l * n..(l + 1) * n];
                for (acc, &b) in out.iter_mut().zip(b_row) {
                    *acc = *acc + a * b;
                }
            }
        }

        Ok(Matrix::from_parts(Shape::new(m, n), result))
    }

    /// Computes `selfᵗ · other` without materialising the transpose.
    ///
    /// Used to propagate gradients backwards through a weight matrix. Requires
    /// `self.rows == other.rows`; the result is `(self.cols, other.cols)`.
    pub fn transposed_dot(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        let (k, m) = (self.shape.rows(), self.shape.cols());
        let (k2, n) = (other.shape.rows(), other.shape.cols());

        if k != k2 {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape.transposed(),
                right: other.shape,
            });
        }

        let mut result = vec![T::zero(); m * n];

        for l in 0..k {
            let a_row = &self.data[l * m..(l + 1) * m];
            let b_row = &other.data[l * n..(l + 1) * n];
            for (i, &a) in a_row.iter().enumerate() {
                let out = &mut result[i * n..(i + 1) * n];
                for (acc, &b) in out.iter_mut().zip(b_row) {
                    *acc = *acc + a * b;
                }
            }
        }

        Ok(Matrix::from_parts(Shape::new(m, n), result))
    }

    /// Computes `self · otherᵗ`.
    ///
    /// Requires `self.cols == other.cols`; the result is `(self.rows, other.rows)`.
    pub fn dot_transposed(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        let (m, k) = (self.shape.rows(), self.shape.cols());
        let (n, k2) = (other.shape.rows(), other.shape.cols());

        if k != k2 {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape,
                right: other.shape.transposed(),
            });
        }

        let mut result = Vec::with_capacity(m * n);
        for i in 0..m {
            let a_row = &self.data[i * k..(i + 1) * k];
            for j in 0..n {
                let b_row = &other.data[j * k..(j + 1) * k];
                let sum = a_row
                    .iter()
                    .zip(b_row)
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
                result.push(sum);
            }
        }

        Ok(Matrix::from_parts(Shape::new(m, n), result))
    }

    /// Computes `(self · x) + bias` in a single pass.
    ///
    /// This is the forward primitive of a dense layer (`weights · input + bias`). `bias` must have
    /// `self.rows` rows and either one column, in which case `bias[i]` is added to every element
    /// of output row `i`, or exactly `x.cols` columns.
    pub fn dot_add(&self, x: &Matrix<T>, bias: &Matrix<T>) -> Result<Matrix<T>> {
        let (m, k) = (self.shape.rows(), self.shape.cols());
        let (k2, n) = (x.shape.rows(), x.shape.cols());

        if k != k2 {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape,
                right: x.shape,
            });
        }

        let broadcast = bias.shape.cols() == 1;
        if bias.shape.rows() != m || !(broadcast || bias.shape.cols() == n) {
            return Err(MatrixError::ShapeMismatch {
                left: Shape::new(m, n),
                right: bias.shape,
            });
        }

        let mut result = Vec::with_capacity(m * n);
        for i in 0..m {
            let a_row = &self.data[i * k..(i + 1) * k];
            for j in 0..n {
                let mut sum = T::zero();
                for (l, &a) in a_row.iter().enumerate() {
                    sum = sum + a * x.data[l * n + j];
                }
                let b = if broadcast {
                    bias.data[i]
                } else {
                    bias.data[i * n + j]
                };
                result.push(sum + b);
            }
        }

        Ok(Matrix::from_parts(Shape::new(m, n), result))
    }
}

impl<T: Copy> Matrix<T> {
    /// Returns the transposed matrix: the element at `(i, j)` moves to `(j, i)`.
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = (self.shape.rows(), self.shape.cols());
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..cols {
            for i in 0..rows {
                data.push(self.data[i * cols + j]);
            }
        }

        Matrix::from_parts(self.shape.transposed(), data)
    }

    /// Transposes the matrix in place, physically permuting its storage.
    pub fn transpose_in_place(&mut self) {
        *self = self.transpose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() -> Result<()> {
        let a = matrix![[1, 2], [3, 4]];
        let b = matrix![[5, 6], [7, 8]];
        assert_eq!(a.dot(&b)?, matrix![[19, 22], [43, 50]]);

        let a = Matrix::from_vec((0..6).collect(), 2, 3)?;
        let b = Matrix::from_vec((0..12).collect(), 3, 4)?;
        let c = a.dot(&b)?;
        assert_eq!(*c.shape(), Shape::new(2, 4));
        assert_eq!(c, matrix![[20, 23, 26, 29], [56, 68, 80, 92]]);

        Ok(())
    }

    #[test]
    fn test_dot_shape_mismatch() {
        let a = Matrix::<f32>::ones((2, 3));
        let b = Matrix::<f32>::ones((2, 3));

        assert_eq!(
            a.dot(&b),
            Err(MatrixError::ShapeMismatch {
                left: Shape::new(2, 3),
                right: Shape::new(2, 3)
            })
        );
    }

    #[test]
    fn test_dot_with_identity() -> Result<()> {
        let a = matrix![[1.5, -2.0, 3.0], [0.0, 4.0, 2.5]];
        assert_eq!(Matrix::id((2, 2)).dot(&a)?, a);
        assert_eq!(a.dot(&Matrix::id((3, 3)))?, a);

        Ok(())
    }

    #[test]
    fn test_dot_of_empty_inner_dimension() -> Result<()> {
        let a = Matrix::<i32>::zeros((2, 0));
        let b = Matrix::<i32>::zeros((0, 3));
        assert_eq!(a.dot(&b)?, Matrix::zeros((2, 3)));

        Ok(())
    }

    #[test]
    fn test_transposed_dot() -> Result<()> {
        let w = matrix![[1, 2, 3], [4, 5, 6]];
        let x = matrix![[1, 0], [2, 1]];

        let expected = w.transpose().dot(&x)?;
        assert_eq!(w.transposed_dot(&x)?, expected);
        assert_eq!(expected, matrix![[9, 4], [12, 5], [15, 6]]);

        assert!(w.transposed_dot(&Matrix::ones((3, 1))).is_err());

        Ok(())
    }

    #[test]
    fn test_dot_transposed() -> Result<()> {
        let w = matrix![[1, 2], [3, 4], [5, 6]];
        let x = matrix![[1, 1], [0, 2]];

        assert_eq!(w.dot_transposed(&x)?, w.dot(&x.transpose())?);
        assert_eq!(w.dot_transposed(&x)?, matrix![[3, 4], [7, 8], [11, 12]]);

        assert!(w.dot_transposed(&Matrix::ones((2, 3))).is_err());

        Ok(())
    }

    #[test]
    fn test_dot_add_broadcasts_bias_column() -> Result<()> {
        let w = matrix![[1, 2], [3, 4]];
        let x = matrix![[1, 0, 2], [1, 1, 0]];
        let bias = Matrix::from_column(vec![10, 20]);

        assert_eq!(
            w.dot_add(&x, &bias)?,
            matrix![[13, 12, 12], [27, 24, 26]]
        );

        let full_bias = matrix![[1, 1, 1], [2, 2, 2]];
        assert_eq!(
            w.dot_add(&x, &full_bias)?,
            (&w.dot(&x)? + &full_bias)?
        );

        Ok(())
    }

    #[test]
    fn test_dot_add_rejects_bad_bias() {
        let w = Matrix::<f64>::ones((2, 2));
        let x = Matrix::<f64>::ones((2, 1));

        assert_eq!(
            w.dot_add(&x, &Matrix::ones((3, 1))),
            Err(MatrixError::ShapeMismatch {
                left: Shape::new(2, 1),
                right: Shape::new(3, 1)
            })
        );
        assert!(w.dot_add(&Matrix::ones((3, 1)), &Matrix::ones((2, 1))).is_err());
        assert!(w.dot_add(&Matrix::ones((2, 3)), &Matrix::ones((2, 2))).is_err());
    }

    #[test]
    fn test_transpose() {
        let m = matrix![[1, 2, 3], [4, 5, 6]];
        let t = m.transpose();

        assert_eq!(*t.shape(), Shape::new(3, 2));
        assert_eq!(t, matrix![[1, 4], [2, 5], [3, 6]]);

        let mut m2 = m.clone();
        m2.transpose_in_place();
        assert_eq!(m2, t);
        m2.transpose_in_place();
        assert_eq!(m2, m);

        let column = Matrix::from_column(vec![1, 2, 3]);
        assert_eq!(column.transpose(), Matrix::from_row(&[1, 2, 3]));
    }
}
