//! Library crate for neural_rs
//!
//! A small feed-forward network on top of `linalg_rs`: dense layers with pluggable
//! activations, losses, initializers and optimizers, per-sample training and a plain-text
//! model format.

use linalg_rs::{Matrix, MatrixError, Vector};

mod activation;
pub mod config;
mod error;
mod init;
mod layer;
mod loss;
mod network;
mod optimizer;
mod persistence;

pub use crate::activation::Activation;
pub use crate::config::TrainConfig;
pub use crate::error::NetworkError;
pub use crate::init::Initializer;
pub use crate::layer::DenseLayer;
pub use crate::loss::Loss;
pub use crate::network::Network;
pub use crate::optimizer::{Adam, Optimizer, OptimizerKind, Sgd};

pub type Result<T> = std::result::Result<T, error::NetworkError>;
