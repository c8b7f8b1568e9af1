use super::*;
use linalg_rs::functions::{powi, transform_pair};
use serde::{Deserialize, Serialize};

/// Error measure between a prediction and its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Loss {
    #[default]
    #[serde(rename = "MSE")]
    MeanSquaredError,
}

impl Loss {
    pub fn call(self, predicted: f32, target: f32) -> f32 {
        match self {
            Loss::MeanSquaredError => (target - predicted).powi(2),
        }
    }

    /// Derivative with respect to the prediction.
    pub fn grad(self, predicted: f32, target: f32) -> f32 {
        match self {
            Loss::MeanSquaredError => 2. * (predicted - target),
        }
    }

    /// Per-element loss of a prediction vector.
    pub fn call_vector(self, predicted: &Vector<f32>, target: &Vector<f32>) -> Result<Vector<f32>> {
        match self {
            Loss::MeanSquaredError => Ok(powi(&(target - predicted)?, 2)),
        }
    }

    /// Per-element gradient of a prediction vector.
    pub fn grad_vector(self, predicted: &Vector<f32>, target: &Vector<f32>) -> Result<Vector<f32>> {
        Ok(transform_pair(predicted, target, |p, t| self.grad(p, t))?)
    }

    /// Loss of a whole sample: the mean of the per-element losses.
    pub fn sample_loss(self, predicted: &Vector<f32>, target: &Vector<f32>) -> Result<f32> {
        Ok(self.call_vector(predicted, target)?.mean()?)
    }

    pub fn name(self) -> &'static str {
        match self {
            Loss::MeanSquaredError => "MSE",
        }
    }
}
