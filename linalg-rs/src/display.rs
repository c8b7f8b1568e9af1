use super::*;

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// Renders the shape followed by every row, for debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {} [", self.shape)?;
        for row in self.rows() {
            write!(f, "  [")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "]")
    }
}
