use super::*;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `y = activation(W · x + b)`.
///
/// Weights have shape `(output_dim, input_dim)` and the bias is a vector of `output_dim`
/// elements. The layer caches the last input, pre-activation and output of
/// [`DenseLayer::forward`] so that [`DenseLayer::backward`] can compute gradients.
#[derive(Clone, Debug)]
pub struct DenseLayer {
    id: usize,
    input_dim: usize,
    output_dim: usize,
    activation: Activation,
    weights: Matrix<f32>,
    biases: Vector<f32>,
    input: Vector<f32>,
    cache: Vector<f32>,
    output: Vector<f32>,
    delta: Vector<f32>,
    weight_gradients: Matrix<f32>,
}

impl DenseLayer {
    /// Creates a layer with zero weights and biases.
    pub fn new(id: usize, input_dim: usize, output_dim: usize, activation: Activation) -> Self {
        let mut layer = Self {
            id,
            input_dim,
            output_dim,
            activation,
            weights: Matrix::zeros((output_dim, input_dim)),
            biases: Vector::zeros(output_dim),
            input: Vector::new(),
            cache: Vector::new(),
            output: Vector::new(),
            delta: Vector::new(),
            weight_gradients: Matrix::zeros((output_dim, input_dim)),
        };
        layer.pre_allocate();
        layer
    }

    /// Creates a layer from existing parameters. The bias length must match the weight rows.
    pub fn with_parameters(
        id: usize,
        activation: Activation,
        weights: Matrix<f32>,
        biases: Vector<f32>,
    ) -> Result<Self> {
        if biases.len() != weights.n_rows() {
            return Err(MatrixError::ShapeMismatch {
                left: *weights.shape(),
                right: *biases.shape(),
            }
            .into());
        }

        let mut layer = Self::new(id, weights.n_cols(), weights.n_rows(), activation);
        layer.weights = weights;
        layer.biases = biases;
        Ok(layer)
    }

    fn pre_allocate(&mut self) {
        self.input.set_size(self.input_dim);
        self.cache.set_size(self.output_dim);
        self.output.set_size(self.output_dim);
        self.delta.set_size(self.output_dim);
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    pub fn output_dim(&self) -> usize {
        self.output_dim
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn set_activation(&mut self, activation: Activation) {
        self.activation = activation;
    }

    pub fn weights(&self) -> &Matrix<f32> {
        &self.weights
    }

    pub fn biases(&self) -> &Vector<f32> {
        &self.biases
    }

    /// Output of the last forward pass.
    pub fn output(&self) -> &Vector<f32> {
        &self.output
    }

    /// Error signal `dL/dz` of the last backward pass.
    pub fn delta(&self) -> &Vector<f32> {
        &self.delta
    }

    /// Weight gradient `dL/dW` of the last backward pass.
    pub fn weight_gradients(&self) -> &Matrix<f32> {
        &self.weight_gradients
    }

    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        initializer: Initializer,
        rng: &mut R,
    ) -> Result<()> {
        initializer.initialize(&mut self.weights, &mut self.biases, rng)
    }

    pub fn forward(&mut self, x: &Vector<f32>) -> Result<&Vector<f32>> {
        if x.len() != self.input_dim {
            return Err(NetworkError::LayerMismatch {
                layer: self.id,
                expected: self.input_dim,
                actual: x.len(),
            });
        }

        self.input.copy_from(x)?;
        self.cache = Vector::try_from(self.weights.dot_add(x, &self.biases)?)?;
        self.output = self.activation.apply(&self.cache);

        Ok(&self.output)
    }

    /// Propagates `grad = dL/dy` through the layer and returns `dL/dx` for the previous layer.
    pub fn backward(&mut self, grad: &Vector<f32>) -> Result<Vector<f32>> {
        self.delta = (grad * &self.activation.derivative(&self.cache))?;
        self.weight_gradients = self.delta.dot_transposed(&self.input)?;

        Ok(Vector::try_from(self.weights.transposed_dot(&self.delta)?)?)
    }

    /// Hands the gradients of the last backward pass to `optimizer`. The weights use slot
    /// `2 * index` and the biases `2 * index + 1`.
    pub fn apply_gradients(&mut self, optimizer: &mut dyn Optimizer, index: usize) {
        optimizer.update(
            2 * index,
            self.weights.as_mut_slice(),
            self.weight_gradients.as_slice(),
        );
        optimizer.update(2 * index + 1, self.biases.as_mut_slice(), self.delta.as_slice());
    }
}

impl fmt::Display for DenseLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            " - - - - DENSE LAYER {} ({} -> {}, {}) - - - -",
            self.id, self.input_dim, self.output_dim, self.activation
        )?;
        writeln!(f, "{}", self.weights)?;
        write!(f, "{}", self.biases)
    }
}
