use linalg_rs::MatrixError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot build weight distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("Network has no layers")]
    Empty,

    #[error("Network is not initialized: call initialize() before {0}")]
    NotInitialized(&'static str),

    #[error("Layer {layer} expects {expected} inputs but receives {actual}")]
    LayerMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Input has {actual} values but the network expects {expected}")]
    InputMismatch { expected: usize, actual: usize },

    #[error("Target has {actual} values but the network produces {expected}")]
    TargetMismatch { expected: usize, actual: usize },

    #[error("Got {inputs} input samples and {targets} target samples")]
    SampleCountMismatch { inputs: usize, targets: usize },

    #[error("Training set is empty")]
    NoSamples,

    #[error("Unknown activation function '{0}'")]
    UnknownActivation(String),

    #[error("Invalid training configuration: {0}")]
    InvalidConfig(String),

    #[error("Model name '{0}' must be non-empty and contain no whitespace")]
    InvalidModelName(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}
