use super::*;
use rand::Rng;
use std::fmt;

/// An ordered stack of dense layers trained with per-sample gradient descent.
#[derive(Debug)]
pub struct Network {
    name: String,
    layers: Vec<DenseLayer>,
    loss: Loss,
    optimizer: Box<dyn Optimizer>,
    initialized: bool,
    loss_history: Vec<f32>,
}

impl Network {
    /// Creates a network without layers, using mean squared error and plain SGD.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
            loss: Loss::default(),
            optimizer: Box::new(Sgd::new(0.01)),
            initialized: false,
            loss_history: Vec::new(),
        }
    }

    /// Builds `input_size -> hidden_dim x hidden_layers -> output_size`; without hidden layers
    /// the single layer connects the input directly to the output.
    pub fn with_topology(
        name: impl Into<String>,
        input_size: usize,
        hidden_layers: usize,
        hidden_dim: usize,
        output_size: usize,
        activation: Activation,
    ) -> Result<Self> {
        let mut network = Self::new(name);
        let mut width = input_size;
        for _ in 0..hidden_layers {
            network.add_layer(width, hidden_dim, activation)?;
            width = hidden_dim;
        }
        network.add_layer(width, output_size, activation)?;

        Ok(network)
    }

    /// Appends a layer. Its input width must match the output width of the current last layer.
    pub fn add_layer(
        &mut self,
        input_dim: usize,
        output_dim: usize,
        activation: Activation,
    ) -> Result<&mut Self> {
        let id = self.layers.len() + 1;
        self.push_layer(DenseLayer::new(id, input_dim, output_dim, activation))?;
        self.initialized = false;
        Ok(self)
    }

    pub(crate) fn push_layer(&mut self, layer: DenseLayer) -> Result<()> {
        if let Some(last) = self.layers.last() {
            if last.output_dim() != layer.input_dim() {
                return Err(NetworkError::LayerMismatch {
                    layer: layer.id(),
                    expected: layer.input_dim(),
                    actual: last.output_dim(),
                });
            }
        }
        self.layers.push(layer);
        Ok(())
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, DenseLayer::input_dim)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, DenseLayer::output_dim)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn loss(&self) -> Loss {
        self.loss
    }

    pub fn set_loss(&mut self, loss: Loss) {
        self.loss = loss;
    }

    pub fn optimizer(&self) -> &dyn Optimizer {
        self.optimizer.as_ref()
    }

    pub fn set_optimizer(&mut self, optimizer: Box<dyn Optimizer>) {
        self.optimizer = optimizer;
    }

    /// Sets the activation of every layer.
    pub fn set_activation(&mut self, activation: Activation) {
        self.layers
            .iter_mut()
            .for_each(|layer| layer.set_activation(activation));
    }

    /// Losses recorded by the last call to [`Network::fit`].
    pub fn loss_history(&self) -> &[f32] {
        &self.loss_history
    }

    /// Draws the parameters of every layer.
    pub fn initialize<R: Rng + ?Sized>(&mut self, initializer: Initializer, rng: &mut R) -> Result<()> {
        if self.layers.is_empty() {
            return Err(NetworkError::Empty);
        }

        for layer in &mut self.layers {
            layer.initialize(initializer, rng)?;
        }
        log::debug!(
            "initialized {} layers of '{}' with {}",
            self.layers.len(),
            self.name,
            initializer.name()
        );
        self.initialized = true;

        Ok(())
    }

    fn ensure_ready(&self, operation: &'static str) -> Result<()> {
        if self.layers.is_empty() {
            return Err(NetworkError::Empty);
        }
        if !self.initialized {
            return Err(NetworkError::NotInitialized(operation));
        }
        Ok(())
    }

    /// Runs `x` through every layer and returns the output of the last one.
    pub fn forward(&mut self, x: &Vector<f32>) -> Result<Vector<f32>> {
        self.ensure_ready("forward")?;
        if x.len() != self.input_size() {
            return Err(NetworkError::InputMismatch {
                expected: self.input_size(),
                actual: x.len(),
            });
        }

        let mut activation = x.clone();
        for layer in &mut self.layers {
            activation = layer.forward(&activation)?.clone();
        }

        Ok(activation)
    }

    /// Propagates the loss gradient of the last forward pass back through every layer.
    fn backward(&mut self, grad: &Vector<f32>) -> Result<()> {
        let mut grad = grad.clone();
        for layer in self.layers.iter_mut().rev() {
            grad = layer.backward(&grad)?;
        }
        Ok(())
    }

    fn step(&mut self) {
        self.optimizer.begin_step();
        for (index, layer) in self.layers.iter_mut().enumerate() {
            layer.apply_gradients(self.optimizer.as_mut(), index);
        }
    }

    /// Trains on the rows of `x_train` against the rows of `y_train`.
    ///
    /// Every epoch visits the samples in order and updates the parameters after each one. The
    /// mean sample loss of an epoch is logged and recorded at `config.log_points` evenly spaced
    /// epochs and at the last epoch. Returns the recorded losses.
    pub fn fit(
        &mut self,
        x_train: &Matrix<f32>,
        y_train: &Matrix<f32>,
        config: &TrainConfig,
    ) -> Result<Vec<f32>> {
        self.ensure_ready("fit")?;
        config.validate()?;

        if x_train.n_rows() != y_train.n_rows() {
            return Err(NetworkError::SampleCountMismatch {
                inputs: x_train.n_rows(),
                targets: y_train.n_rows(),
            });
        }
        if x_train.n_rows() == 0 {
            return Err(NetworkError::NoSamples);
        }
        if x_train.n_cols() != self.input_size() {
            return Err(NetworkError::InputMismatch {
                expected: self.input_size(),
                actual: x_train.n_cols(),
            });
        }
        if y_train.n_cols() != self.output_size() {
            return Err(NetworkError::TargetMismatch {
                expected: self.output_size(),
                actual: y_train.n_cols(),
            });
        }

        self.optimizer.set_learning_rate(config.learning_rate);

        let samples = x_train.n_rows();
        let interval = config.log_interval();
        let mut history = Vec::with_capacity(config.log_points + 1);

        log::info!(
            "Training '{}' on {} samples for {} epochs ({}, lr {})",
            self.name,
            samples,
            config.epochs,
            self.optimizer.name(),
            config.learning_rate
        );

        for epoch in 0..config.epochs {
            let mut epoch_loss = 0.;
            for (x, y) in x_train.rows().zip(y_train.rows()) {
                let target = Vector::from(y.to_vec());
                let predicted = self.forward(&Vector::from(x.to_vec()))?;

                let grad = self.loss.grad_vector(&predicted, &target)?;
                self.backward(&grad)?;
                self.step();

                epoch_loss += self.loss.sample_loss(&predicted, &target)?;
            }

            let average = epoch_loss / samples as f32;
            if epoch % interval == 0 || epoch == config.epochs - 1 {
                history.push(average);
                log::info!("Epoch {}/{} | Loss {}", epoch + 1, config.epochs, average);
            }
        }

        self.loss_history = history.clone();
        Ok(history)
    }

    /// Evaluates the network on a single input.
    pub fn predict(&mut self, x: &[f32]) -> Result<Vector<f32>> {
        self.ensure_ready("predict")?;
        self.forward(&Vector::from(x.to_vec()))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Network '{}' ({} layers)", self.name, self.layers.len())?;
        for layer in &self.layers {
            writeln!(f, "{layer}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linalg_rs::matrix;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn and_gate() -> (Matrix<f32>, Matrix<f32>) {
        (
            matrix![[0., 0.], [0., 1.], [1., 0.], [1., 1.]],
            matrix![[0.], [0.], [0.], [1.]],
        )
    }

    fn perceptron(seed: u64) -> Result<Network> {
        let mut network = Network::with_topology("and", 2, 0, 0, 1, Activation::Sigmoid)?;
        network.initialize(Initializer::Random, &mut StdRng::seed_from_u64(seed))?;
        Ok(network)
    }

    #[test]
    fn test_topology() -> Result<()> {
        let network = Network::with_topology("deep", 3, 2, 4, 1, Activation::Tanh)?;
        let dims: Vec<_> = network
            .layers()
            .iter()
            .map(|layer| (layer.id(), layer.input_dim(), layer.output_dim()))
            .collect();

        assert_eq!(dims, vec![(1, 3, 4), (2, 4, 4), (3, 4, 1)]);
        assert_eq!(network.input_size(), 3);
        assert_eq!(network.output_size(), 1);
        assert!(!network.is_initialized());

        Ok(())
    }

    #[test]
    fn test_add_layer_rejects_broken_chain() -> Result<()> {
        let mut network = Network::new("broken");
        network.add_layer(2, 3, Activation::ReLU)?;

        assert!(matches!(
            network.add_layer(4, 1, Activation::ReLU),
            Err(NetworkError::LayerMismatch {
                layer: 2,
                expected: 4,
                actual: 3
            })
        ));

        Ok(())
    }

    #[test]
    fn test_guards() -> Result<()> {
        let (x, y) = and_gate();
        let config = TrainConfig::default();

        let mut empty = Network::new("empty");
        assert!(matches!(empty.predict(&[0., 0.]), Err(NetworkError::Empty)));

        let mut network = Network::with_topology("and", 2, 0, 0, 1, Activation::Sigmoid)?;
        assert!(matches!(
            network.fit(&x, &y, &config),
            Err(NetworkError::NotInitialized("fit"))
        ));
        assert!(matches!(
            network.predict(&[0., 0.]),
            Err(NetworkError::NotInitialized("predict"))
        ));

        let mut network = perceptron(1)?;
        assert!(matches!(
            network.fit(&Matrix::zeros((4, 3)), &y, &config),
            Err(NetworkError::InputMismatch {
                expected: 2,
                actual: 3
            })
        ));
        assert!(matches!(
            network.fit(&x, &Matrix::zeros((4, 2)), &config),
            Err(NetworkError::TargetMismatch {
                expected: 1,
                actual: 2
            })
        ));
        assert!(matches!(
            network.fit(&x, &Matrix::zeros((3, 1)), &config),
            Err(NetworkError::SampleCountMismatch {
                inputs: 4,
                targets: 3
            })
        ));
        assert!(matches!(
            network.predict(&[1., 2., 3.]),
            Err(NetworkError::InputMismatch {
                expected: 2,
                actual: 3
            })
        ));

        Ok(())
    }

    #[test]
    fn test_learns_and_gate() -> Result<()> {
        let (x, y) = and_gate();
        let mut network = perceptron(42)?;
        let config = TrainConfig {
            epochs: 5000,
            learning_rate: 1.,
            log_points: 10,
            ..TrainConfig::default()
        };

        let history = network.fit(&x, &y, &config)?;

        assert_eq!(history.len(), 11);
        assert_eq!(network.loss_history(), history.as_slice());
        assert!(history[10] < history[0]);
        assert!(history[10] < 0.05);

        for (input, expected) in x.rows().zip(y.iter()) {
            let predicted = network.predict(input)?[0];
            assert_eq!(predicted > 0.5, *expected > 0.5, "input {input:?}");
        }

        Ok(())
    }

    #[test]
    fn test_adam_learns_and_gate() -> Result<()> {
        let (x, y) = and_gate();
        let mut network = perceptron(7)?;
        network.set_optimizer(OptimizerKind::Adam.build(0.05));
        let config = TrainConfig {
            epochs: 2000,
            learning_rate: 0.05,
            ..TrainConfig::default()
        };

        let history = network.fit(&x, &y, &config)?;
        assert!(history.last().is_some_and(|&loss| loss < 0.05));

        Ok(())
    }

    #[test]
    fn test_fit_records_log_points() -> Result<()> {
        let (x, y) = and_gate();
        let mut network = perceptron(3)?;
        let config = TrainConfig {
            epochs: 7,
            log_points: 3,
            ..TrainConfig::default()
        };

        // interval 2: epochs 0, 2, 4, 6
        assert_eq!(network.fit(&x, &y, &config)?.len(), 4);

        Ok(())
    }
}
