use super::*;
use linalg_rs::functions::transform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied to the weighted sum of a layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Activation {
    /// Identity: `f(x) = x`.
    Linear,
    /// Logistic function `1 / (1 + e^-x)`.
    #[default]
    Sigmoid,
    Tanh,
    /// Rectified linear unit `max(x, 0)`.
    ReLU,
}

impl Activation {
    pub fn call(self, x: f32) -> f32 {
        match self {
            Activation::Linear => x,
            Activation::Sigmoid => 1. / (1. + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::ReLU => x.max(0.),
        }
    }

    /// Derivative with respect to the pre-activation value `x`.
    pub fn grad(self, x: f32) -> f32 {
        match self {
            Activation::Linear => 1.,
            Activation::Sigmoid => {
                let s = self.call(x);
                s * (1. - s)
            }
            Activation::Tanh => 1. - x.tanh().powi(2),
            Activation::ReLU => {
                if x > 0. {
                    1.
                } else {
                    0.
                }
            }
        }
    }

    /// Applies the function to every element of `z`.
    pub fn apply(self, z: &Vector<f32>) -> Vector<f32> {
        transform(z, |x| self.call(x))
    }

    /// Evaluates the derivative at every element of `z`.
    pub fn derivative(self, z: &Vector<f32>) -> Vector<f32> {
        transform(z, |x| self.grad(x))
    }

    /// Name used in the model text format.
    pub fn name(self) -> &'static str {
        match self {
            Activation::Linear => "LINEAR",
            Activation::Sigmoid => "SIGMOID",
            Activation::Tanh => "TANH",
            Activation::ReLU => "RELU",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "LINEAR" => Ok(Activation::Linear),
            "SIGMOID" => Ok(Activation::Sigmoid),
            "TANH" => Ok(Activation::Tanh),
            "RELU" => Ok(Activation::ReLU),
            _ => Err(NetworkError::UnknownActivation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn test_scalar_values() {
        assert_close(Activation::Sigmoid.call(0.), 0.5);
        assert_close(Activation::Sigmoid.grad(0.), 0.25);
        assert_close(Activation::Tanh.call(0.), 0.);
        assert_close(Activation::Tanh.grad(0.), 1.);
        assert_close(Activation::ReLU.call(-2.), 0.);
        assert_close(Activation::ReLU.call(3.), 3.);
        assert_close(Activation::ReLU.grad(-2.), 0.);
        assert_close(Activation::ReLU.grad(3.), 1.);
        assert_close(Activation::Linear.call(-7.5), -7.5);
        assert_close(Activation::Linear.grad(-7.5), 1.);
    }

    #[test]
    fn test_gradients_match_finite_differences() {
        let h = 1e-3;
        for activation in [Activation::Sigmoid, Activation::Tanh] {
            for x in [-2.0f32, -0.5, 0.3, 1.7] {
                let numeric = (activation.call(x + h) - activation.call(x - h)) / (2. * h);
                assert!((numeric - activation.grad(x)).abs() < 1e-3, "{activation} at {x}");
            }
        }
    }

    #[test]
    fn test_vector_forms() {
        let z = Vector::from([-1., 0., 2.]);

        assert_eq!(Activation::ReLU.apply(&z), Vector::from([0., 0., 2.]));
        assert_eq!(Activation::ReLU.derivative(&z), Vector::from([0., 0., 1.]));
        assert_eq!(Activation::Linear.apply(&z), z);
    }

    #[test]
    fn test_names_round_trip() -> Result<()> {
        for activation in [
            Activation::Linear,
            Activation::Sigmoid,
            Activation::Tanh,
            Activation::ReLU,
        ] {
            assert_eq!(activation.name().parse::<Activation>()?, activation);
        }
        assert_eq!("relu".parse::<Activation>()?, Activation::ReLU);
        assert!(matches!(
            "SOFTMAX".parse::<Activation>(),
            Err(NetworkError::UnknownActivation(name)) if name == "SOFTMAX"
        ));

        Ok(())
    }
}
