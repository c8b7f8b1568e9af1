use crate::Shape;
use std::fmt;
use thiserror::Error;

/// Location of an element access, either linear (row-major) or by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Linear(usize),
    Pair(usize, usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Linear(idx) => write!(f, "{idx}"),
            Position::Pair(i, j) => write!(f, "({i},{j})"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum MatrixError {
    #[error("Mismatched shapes: {left} and {right}")]
    ShapeMismatch { left: Shape, right: Shape },

    #[error("Number of elements are not the same: {expected} and {actual}")]
    ElementCountMismatch { expected: usize, actual: usize },

    #[error("Index {index} out of matrix range {shape}")]
    IndexOutOfRange { index: Position, shape: Shape },

    #[error("Cannot reshape {from} matrix to {to}")]
    ReshapeImpossible { from: Shape, to: Shape },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Literal row {row} has {actual} elements, expected {expected}")]
    InvalidLiteral {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid random range [{floor}, {ceil})")]
    InvalidRange { floor: String, ceil: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_embed_context() {
        let err = MatrixError::ShapeMismatch {
            left: Shape::new(2, 3),
            right: Shape::new(3, 2),
        };
        assert_eq!(err.to_string(), "Mismatched shapes: (2,3) and (3,2)");

        let err = MatrixError::IndexOutOfRange {
            index: Position::Pair(4, 0),
            shape: Shape::new(2, 2),
        };
        assert_eq!(err.to_string(), "Index (4,0) out of matrix range (2,2)");

        let err = MatrixError::ReshapeImpossible {
            from: Shape::new(2, 3),
            to: Shape::new(2, 2),
        };
        assert_eq!(err.to_string(), "Cannot reshape (2,3) matrix to (2,2)");
    }
}
