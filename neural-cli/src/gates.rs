use anyhow::bail;
use linalg_rs::Matrix;
use std::str::FromStr;

/// Two-input logic gates whose truth tables serve as training sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    And,
    Or,
    Nand,
    Nor,
    Xor,
}

pub const GATE_NAMES: [&str; 5] = ["and", "or", "nand", "nor", "xor"];

impl Gate {
    pub fn name(self) -> &'static str {
        match self {
            Gate::And => "and",
            Gate::Or => "or",
            Gate::Nand => "nand",
            Gate::Nor => "nor",
            Gate::Xor => "xor",
        }
    }

    pub fn eval(self, a: bool, b: bool) -> bool {
        match self {
            Gate::And => a && b,
            Gate::Or => a || b,
            Gate::Nand => !(a && b),
            Gate::Nor => !(a || b),
            Gate::Xor => a != b,
        }
    }

    /// Only XOR is not linearly separable, so it needs a hidden layer.
    pub fn is_linearly_separable(self) -> bool {
        self != Gate::Xor
    }

    /// Inputs `(4,2)` and targets `(4,1)` of the gate's truth table.
    pub fn truth_table(self) -> (Matrix<f32>, Matrix<f32>) {
        let inputs = Matrix::from([[0f32, 0.], [0., 1.], [1., 0.], [1., 1.]]);
        let targets = inputs
            .rows()
            .map(|row| f32::from(u8::from(self.eval(row[0] > 0.5, row[1] > 0.5))))
            .collect();

        (inputs, Matrix::from_column(targets))
    }
}

impl FromStr for Gate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "and" => Gate::And,
            "or" => Gate::Or,
            "nand" => Gate::Nand,
            "nor" => Gate::Nor,
            "xor" => Gate::Xor,
            _ => bail!("Unknown gate '{s}', expected one of {}", GATE_NAMES.join(", ")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linalg_rs::matrix;

    #[test]
    fn test_truth_tables() {
        let (x, y) = Gate::And.truth_table();
        assert_eq!(x, matrix![[0., 0.], [0., 1.], [1., 0.], [1., 1.]]);
        assert_eq!(y, matrix![[0.], [0.], [0.], [1.]]);

        let (_, y) = Gate::Xor.truth_table();
        assert_eq!(y.as_slice(), &[0., 1., 1., 0.]);

        let (_, y) = Gate::Nand.truth_table();
        assert_eq!(y.as_slice(), &[1., 1., 1., 0.]);
    }

    #[test]
    fn test_parse() {
        for name in GATE_NAMES {
            assert_eq!(name.parse::<Gate>().unwrap().name(), name);
        }
        assert_eq!("XOR".parse::<Gate>().unwrap(), Gate::Xor);
        assert!("xnor".parse::<Gate>().is_err());
    }
}
