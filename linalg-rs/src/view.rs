use super::*;
use std::ops::{Index, IndexMut};

impl<T> Matrix<T> {
    // Get shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn n_rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn n_cols(&self) -> usize {
        self.shape.cols()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    /// Returns true if the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    fn offset(&self, i: usize, j: usize) -> Result<usize> {
        if i >= self.shape.rows() || j >= self.shape.cols() {
            return Err(MatrixError::IndexOutOfRange {
                index: Position::Pair(i, j),
                shape: self.shape,
            });
        }
        Ok(i * self.shape.cols() + j)
    }

    fn check_linear(&self, idx: usize) -> Result<usize> {
        if idx >= self.data.len() {
            return Err(MatrixError::IndexOutOfRange {
                index: Position::Linear(idx),
                shape: self.shape,
            });
        }
        Ok(idx)
    }

    /// Mutable reference to the element at row `i` and column `j`.
    pub fn element_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        let offset = self.offset(i, j)?;
        Ok(&mut self.data[offset])
    }

    /// Mutable reference to the element at linear (row-major) index `idx`.
    pub fn element_at_mut(&mut self, idx: usize) -> Result<&mut T> {
        let idx = self.check_linear(idx)?;
        Ok(&mut self.data[idx])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the underlying storage. Writes bypass bounds and shape validation.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the matrix and returns its elements in row-major order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i` is not a valid row.
    pub fn row(&self, i: usize) -> &[T] {
        let cols = self.shape.cols();
        &self.data[i * cols..(i + 1) * cols]
    }

    /// Raw pointer to the first element of row `i`.
    ///
    /// This is a low-level escape hatch for hot loops and is never validated: the pointer is
    /// computed with wrapping arithmetic and may point outside the buffer when `i` is out of
    /// range. Dereferencing it is only sound while `i < n_rows()`, for at most `n_cols()`
    /// elements, and while the matrix is neither mutated nor dropped.
    pub fn row_ptr(&self, i: usize) -> *const T {
        self.data.as_ptr().wrapping_add(i * self.shape.cols())
    }

    /// Changes the dimensions keeping the element count and the row-major element order.
    /// Returns an error if `rows * cols` differs from the current element count.
    pub fn set_shape(&mut self, rows: usize, cols: usize) -> Result<()> {
        let new_shape = Shape::new(rows, cols);
        if !self.is_reshapeable(&new_shape) {
            return Err(MatrixError::ReshapeImpossible {
                from: self.shape,
                to: new_shape,
            });
        }

        log::debug!("reshaping matrix {} -> {}", self.shape, new_shape);
        self.shape = new_shape;
        Ok(())
    }

    /// Same as [`Matrix::set_shape`].
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.set_shape(rows, cols)
    }

    /// Consuming variant of [`Matrix::set_shape`].
    pub fn reshape(mut self, rows: usize, cols: usize) -> Result<Self> {
        self.set_shape(rows, cols)?;
        Ok(self)
    }

    /// Returns true if the matrix can be reshaped to `shape` without changing its element count.
    pub fn is_reshapeable(&self, shape: &Shape) -> bool {
        self.shape.len() == shape.len()
    }
}

impl<T: Copy> Matrix<T> {
    /// Element at row `i` and column `j`.
    pub fn element(&self, i: usize, j: usize) -> Result<T> {
        let offset = self.offset(i, j)?;
        Ok(self.data[offset])
    }

    /// Element at linear (row-major) index `idx`.
    pub fn element_at(&self, idx: usize) -> Result<T> {
        let idx = self.check_linear(idx)?;
        Ok(self.data[idx])
    }

    pub fn set_element(&mut self, value: T, i: usize, j: usize) -> Result<()> {
        *self.element_mut(i, j)? = value;
        Ok(())
    }

    pub fn set_element_at(&mut self, value: T, idx: usize) -> Result<()> {
        *self.element_at_mut(idx)? = value;
        Ok(())
    }

    /// Overwrites all elements with `values` given in row-major order, keeping the shape.
    pub fn set_elements(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.data.len() {
            return Err(MatrixError::ElementCountMismatch {
                expected: self.data.len(),
                actual: values.len(),
            });
        }
        self.data.copy_from_slice(values);
        Ok(())
    }

    /// Copies the elements of `other` into this matrix, keeping this matrix' shape.
    /// Both matrices must hold the same number of elements.
    pub fn copy_from(&mut self, other: &Matrix<T>) -> Result<()> {
        self.set_elements(&other.data)
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.shape.cols() + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let cols = self.shape.cols();
        &mut self.data[i * cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_access() -> Result<()> {
        let mut m = matrix![[1, 2, 3], [4, 5, 6]];

        assert_eq!(m.element(0, 2)?, 3);
        assert_eq!(m.element_at(4)?, 5);

        *m.element_mut(1, 1)? = 50;
        m.set_element_at(60, 5)?;
        m.set_element(10, 0, 0)?;

        assert_eq!(m, matrix![[10, 2, 3], [4, 50, 60]]);

        Ok(())
    }

    #[test]
    fn test_out_of_range_access() {
        let mut m = Matrix::<f32>::zeros((2, 3));

        assert_eq!(
            m.element(2, 0),
            Err(MatrixError::IndexOutOfRange {
                index: Position::Pair(2, 0),
                shape: Shape::new(2, 3)
            })
        );
        assert!(m.element(0, 3).is_err());
        assert!(m.element_at(6).is_err());
        assert!(m.element_at_mut(6).is_err());
        assert!(m.set_element(1.0, 5, 5).is_err());
        assert_eq!(m, Matrix::zeros((2, 3)));
    }

    #[test]
    fn test_unchecked_indexing() {
        let mut m = matrix![[1, 2], [3, 4]];
        m[(1, 0)] += 10;
        m[3] *= 2;

        assert_eq!(m[(1, 0)], 13);
        assert_eq!(m[1], 2);
        assert_eq!(m.row(1), &[13, 8]);
    }

    #[test]
    #[should_panic]
    fn test_unchecked_indexing_panics_past_the_end() {
        let m = Matrix::<i32>::zeros((2, 2));
        let _value = m[4];
    }

    #[test]
    fn test_row_ptr_points_at_row_start() {
        let m = matrix![[1, 2, 3], [4, 5, 6]];
        let ptr = m.row_ptr(1);
        // SAFETY: row 1 exists and holds three elements.
        let row = unsafe { std::slice::from_raw_parts(ptr, m.n_cols()) };
        assert_eq!(row, &[4, 5, 6]);
    }

    #[test]
    fn test_set_shape() -> Result<()> {
        let mut m = Matrix::<f64>::zeros((2, 3));
        m.set_shape(3, 2)?;
        assert_eq!(*m.shape(), Shape::new(3, 2));

        let err = m.set_shape(2, 2).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ReshapeImpossible {
                from: Shape::new(3, 2),
                to: Shape::new(2, 2)
            }
        );
        assert_eq!(*m.shape(), Shape::new(3, 2));

        Ok(())
    }

    #[test]
    fn test_reshape_preserves_linear_order() -> Result<()> {
        let m = Matrix::from_vec((0..6).collect(), 2, 3)?.reshape(3, 2)?;
        assert_eq!(m, matrix![[0, 1], [2, 3], [4, 5]]);

        let mut column = m.clone();
        column.resize(6, 1)?;
        assert_eq!(column.as_slice(), m.as_slice());

        Ok(())
    }

    #[test]
    fn test_set_elements_and_copy_from() -> Result<()> {
        let mut m = Matrix::<i32>::zeros((2, 2));
        m.set_elements(&[1, 2, 3, 4])?;
        assert_eq!(m, matrix![[1, 2], [3, 4]]);

        assert!(m.set_elements(&[1, 2, 3]).is_err());
        assert_eq!(m, matrix![[1, 2], [3, 4]]);

        let column = Matrix::from_column(vec![9, 8, 7, 6]);
        m.copy_from(&column)?;
        assert_eq!(m, matrix![[9, 8], [7, 6]]);

        assert_eq!(
            m.copy_from(&Matrix::zeros((3, 1))),
            Err(MatrixError::ElementCountMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(m.into_vec(), vec![9, 8, 7, 6]);

        Ok(())
    }
}
