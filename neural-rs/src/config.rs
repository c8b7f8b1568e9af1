use super::*;
use serde::{Deserialize, Serialize};

/// Hyperparameters of a training run.
///
/// Every field has a default, so a configuration file only needs to name what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f32,
    /// Number of evenly spaced epochs at which the loss is logged and recorded.
    pub log_points: usize,
    /// Seed of the random generator used for initialization; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub activation: Activation,
    pub initializer: Initializer,
    pub optimizer: OptimizerKind,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 5000,
            learning_rate: 0.5,
            log_points: 10,
            seed: None,
            activation: Activation::Sigmoid,
            initializer: Initializer::Random,
            optimizer: OptimizerKind::Sgd,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(NetworkError::InvalidConfig("epochs must be positive".to_string()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.) {
            return Err(NetworkError::InvalidConfig(format!(
                "learning rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        if self.log_points == 0 {
            return Err(NetworkError::InvalidConfig("log_points must be positive".to_string()));
        }

        if self.learning_rate > 10. {
            log::warn!("learning rate {} is unusually large", self.learning_rate);
        }

        Ok(())
    }

    /// Number of epochs between two recorded losses.
    pub fn log_interval(&self) -> usize {
        if self.epochs <= self.log_points {
            1
        } else {
            self.epochs / self.log_points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() -> Result<()> {
        TrainConfig::default().validate()
    }

    #[test]
    fn test_validation() {
        let config = TrainConfig {
            epochs: 0,
            ..TrainConfig::default()
        };
        assert!(matches!(config.validate(), Err(NetworkError::InvalidConfig(_))));

        for learning_rate in [0., -1., f32::NAN, f32::INFINITY] {
            let config = TrainConfig {
                learning_rate,
                ..TrainConfig::default()
            };
            assert!(config.validate().is_err());
        }

        let config = TrainConfig {
            log_points: 0,
            ..TrainConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_interval() {
        let config = TrainConfig {
            epochs: 5000,
            log_points: 10,
            ..TrainConfig::default()
        };
        assert_eq!(config.log_interval(), 500);

        let config = TrainConfig {
            epochs: 3,
            log_points: 10,
            ..TrainConfig::default()
        };
        assert_eq!(config.log_interval(), 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TrainConfig =
            serde_json::from_str(r#"{ "epochs": 200, "activation": "TANH", "optimizer": "ADAM" }"#)
                .unwrap();

        assert_eq!(config.epochs, 200);
        assert_eq!(config.activation, Activation::Tanh);
        assert_eq!(config.optimizer, OptimizerKind::Adam);
        assert_eq!(config.learning_rate, TrainConfig::default().learning_rate);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_json_round_trip() {
        let config = TrainConfig {
            seed: Some(42),
            initializer: Initializer::Xavier,
            ..TrainConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""initializer":"XAVIER""#));
        assert_eq!(serde_json::from_str::<TrainConfig>(&json).unwrap(), config);
    }
}
