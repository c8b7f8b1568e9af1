use std::fmt;

/// Dimensions of a matrix: rows, columns and the total element count.
///
/// Two shapes are equal when their rows and columns are equal; the element count takes no part
/// in the comparison.
#[derive(Clone, Copy, Debug, Default)]
pub struct Shape {
    rows: usize,
    cols: usize,
    n: usize,
}

impl Shape {
    /// Creates a shape whose element count is `rows * cols`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            n: rows * cols,
        }
    }

    /// Creates a shape with a caller supplied element count.
    ///
    /// This is the pre-validated fast path: `n` is taken as given and is not re-derived from
    /// `rows * cols`. Passing an inconsistent count breaks the storage invariant of every matrix
    /// built from the shape; debug builds catch it with an assertion.
    pub fn trusted(rows: usize, cols: usize, n: usize) -> Self {
        debug_assert_eq!(n, rows * cols, "inconsistent element count for shape ({rows},{cols})");
        Self { rows, cols, n }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns true if the element count agrees with the dimensions.
    pub fn is_consistent(&self) -> bool {
        self.n == self.rows * self.cols
    }

    /// Shape with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        Shape::trusted(self.cols, self.rows, self.n)
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }
}

impl Eq for Shape {}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_count() {
        let shape = Shape::new(3, 4);
        assert_eq!(shape.rows(), 3);
        assert_eq!(shape.cols(), 4);
        assert_eq!(shape.len(), 12);
        assert!(shape.is_consistent());
    }

    #[test]
    fn test_equality_ignores_count() {
        let a = Shape::new(2, 3);
        let b = Shape {
            rows: 2,
            cols: 3,
            n: 7,
        };

        assert_eq!(a, b);
        assert_ne!(a, Shape::new(3, 2));
        assert!(!b.is_consistent());
    }

    #[test]
    fn test_trusted_keeps_count() {
        let shape = Shape::trusted(5, 2, 10);
        assert_eq!(shape.len(), 10);
    }

    #[test]
    #[should_panic(expected = "inconsistent element count")]
    #[cfg(debug_assertions)]
    fn test_trusted_rejects_bad_count_in_debug() {
        let _ = Shape::trusted(2, 2, 5);
    }

    #[test]
    fn test_display_and_conversion() {
        let shape: Shape = (4, 1).into();
        assert_eq!(shape.to_string(), "(4,1)");
        assert_eq!(Shape::default().to_string(), "(0,0)");
        assert!(Shape::default().is_empty());
        assert_eq!(shape.transposed(), Shape::new(1, 4));
    }
}
