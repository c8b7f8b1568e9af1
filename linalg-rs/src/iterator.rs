use super::*;

/// An iterator over the rows of a matrix, top to bottom.
pub struct Rows<'a, T> {
    matrix: &'a Matrix<T>,
    current_index: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.matrix.n_rows() {
            return None;
        }
        let row = self.matrix.row(self.current_index);
        self.current_index += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matrix.n_rows() - self.current_index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}

impl<T> Matrix<T> {
    /// Returns an iterator over the rows as slices.
    /// Rows come in increasing index order; within a row elements are in column order.
    pub fn rows(&self) -> Rows<'_, T> {
        Rows {
            matrix: self,
            current_index: 0,
        }
    }

    /// Returns an iterator over all elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}
