//! Plain-text model format.
//!
//! ```text
//! MODEL <name> <layer count>
//! LAYER <id> DENSE <input dim> <output dim> <activation>
//! WEIGHTS <rows> <cols>
//! <one line of cols values per row>
//! BIASES <n>
//! <n values>
//! ```
//!
//! Values are whitespace separated and written in row-major order with enough digits to read
//! back the exact same `f32`.

use super::*;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

impl Network {
    /// Writes the model in text form.
    pub fn save<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.name().is_empty() || self.name().contains(char::is_whitespace) {
            return Err(NetworkError::InvalidModelName(self.name().to_string()));
        }

        writeln!(writer, "MODEL {} {}", self.name(), self.layers().len())?;
        for layer in self.layers() {
            layer.save(writer)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Reads a model written by [`Network::save`]. The loaded network is ready for prediction.
    pub fn load<R: BufRead>(reader: R) -> Result<Network> {
        let mut records = Records::new(reader);

        let header = records.expect("MODEL", 2)?;
        let mut network = Network::new(header[1].as_str());
        let count: usize = records.parse(&header[2], "layer count")?;

        for _ in 0..count {
            let layer = DenseLayer::load(&mut records)?;
            network.push_layer(layer)?;
        }
        if network.layers().is_empty() {
            return Err(NetworkError::Empty);
        }
        network.mark_initialized();

        log::debug!("loaded model '{}' with {count} layers", network.name());
        Ok(network)
    }
}

impl DenseLayer {
    fn save<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "LAYER {} DENSE {} {} {}",
            self.id(),
            self.input_dim(),
            self.output_dim(),
            self.activation()
        )?;

        let weights = self.weights();
        writeln!(writer, "WEIGHTS {} {}", weights.n_rows(), weights.n_cols())?;
        for row in weights.rows() {
            write_values(writer, row)?;
        }

        writeln!(writer, "BIASES {}", self.biases().len())?;
        write_values(writer, self.biases().as_slice())
    }

    fn load<R: BufRead>(records: &mut Records<R>) -> Result<DenseLayer> {
        let summary = records.expect("LAYER", 5)?;
        let id: usize = records.parse(&summary[1], "layer id")?;
        if summary[2] != "DENSE" {
            return Err(records.error(format!("unsupported layer type '{}'", summary[2])));
        }
        let input_dim: usize = records.parse(&summary[3], "input dimension")?;
        let output_dim: usize = records.parse(&summary[4], "output dimension")?;
        let activation: Activation = records.parse(&summary[5], "activation")?;

        let header = records.expect("WEIGHTS", 2)?;
        let rows: usize = records.parse(&header[1], "row count")?;
        let cols: usize = records.parse(&header[2], "column count")?;
        if (rows, cols) != (output_dim, input_dim) {
            return Err(records.error(format!(
                "weights ({rows},{cols}) do not fit a {input_dim} -> {output_dim} layer"
            )));
        }
        if rows.checked_mul(cols).is_none() {
            return Err(records.error(format!("weights ({rows},{cols}) are too large")));
        }
        let mut values = Vec::new();
        for _ in 0..rows {
            values.extend(records.values(cols, "weight")?);
        }
        let weights = Matrix::from_vec(values, rows, cols)?;

        let header = records.expect("BIASES", 1)?;
        let size: usize = records.parse(&header[1], "bias count")?;
        if size != output_dim {
            return Err(records.error(format!(
                "{size} biases do not fit a layer with {output_dim} outputs"
            )));
        }
        let biases = Vector::from(records.values(size, "bias")?);

        DenseLayer::with_parameters(id, activation, weights, biases)
    }
}

fn write_values<W: Write>(writer: &mut W, values: &[f32]) -> io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(writer, " ")?;
        }
        write!(writer, "{value}")?;
    }
    writeln!(writer)
}

/// Reads the model text as records: non-blank lines split into whitespace separated tokens.
struct Records<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Records<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> NetworkError {
        NetworkError::Parse {
            line: self.line,
            message: message.into(),
        }
    }

    fn next_record(&mut self) -> Result<Vec<String>> {
        for line in self.lines.by_ref() {
            self.line += 1;
            let tokens: Vec<String> = line?.split_whitespace().map(str::to_string).collect();
            if !tokens.is_empty() {
                return Ok(tokens);
            }
        }
        Err(self.error("unexpected end of input"))
    }

    /// Reads a record that starts with `keyword` followed by exactly `fields` tokens.
    fn expect(&mut self, keyword: &str, fields: usize) -> Result<Vec<String>> {
        let tokens = self.next_record()?;
        if tokens[0] != keyword || tokens.len() != fields + 1 {
            return Err(self.error(format!(
                "expected '{keyword}' with {fields} fields, found '{}'",
                tokens.join(" ")
            )));
        }
        Ok(tokens)
    }

    fn parse<T: FromStr>(&self, token: &str, what: &str) -> Result<T> {
        token
            .parse()
            .map_err(|_| self.error(format!("invalid {what} '{token}'")))
    }

    /// Reads one record of exactly `count` numbers. Nothing is read when `count` is zero.
    fn values(&mut self, count: usize, what: &str) -> Result<Vec<f32>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let tokens = self.next_record()?;
        if tokens.len() != count {
            return Err(self.error(format!(
                "expected {count} {what} values, found {}",
                tokens.len()
            )));
        }
        tokens
            .iter()
            .map(|token| self.parse(token, what))
            .collect()
    }
}
