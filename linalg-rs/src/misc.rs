use super::*;

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape)
            .field("elements", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_compare_matrices() -> Result<()> {
        let m1 = Matrix::from_vec((0..6).collect(), 2, 3)?;
        let m2 = Matrix::from_vec((0..6).collect(), 2, 3)?;
        let m3 = Matrix::from_vec((0..6).collect(), 3, 2)?;

        assert_eq!(m1, m2);
        assert_ne!(m1, m3);
        assert_ne!(m1, Matrix::from_vec((1..7).collect(), 2, 3)?);

        Ok(())
    }

    #[test]
    fn copies_are_independent() {
        let original = matrix![[1, 2], [3, 4]];
        let mut copy = original.copy();
        copy[0] = 100;

        assert_eq!(original[0], 1);
        assert_ne!(original, copy);
    }

    #[test]
    fn take_leaves_empty_matrix() {
        let mut m = matrix![[1.0, 2.0]];
        let moved = std::mem::take(&mut m);

        assert_eq!(moved.len(), 2);
        assert!(m.is_empty());
        assert_eq!(*m.shape(), Shape::new(0, 0));
    }
}
