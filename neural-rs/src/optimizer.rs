use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule that turns gradients into parameter updates.
///
/// Parameters are addressed by slot: every weight matrix and every bias vector of a network
/// gets its own stable slot number, so stateful optimizers can keep per-parameter history.
pub trait Optimizer: fmt::Debug {
    /// Marks the start of one update pass over all slots.
    fn begin_step(&mut self) {}

    /// Updates `params` in place from `grads` of the same length.
    fn update(&mut self, slot: usize, params: &mut [f32], grads: &[f32]);

    fn learning_rate(&self) -> f32;

    fn set_learning_rate(&mut self, learning_rate: f32);

    fn name(&self) -> &'static str;
}

/// Plain stochastic gradient descent: `p -= lr * g`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sgd {
    learning_rate: f32,
}

impl Sgd {
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for Sgd {
    fn update(&mut self, _slot: usize, params: &mut [f32], grads: &[f32]) {
        debug_assert_eq!(params.len(), grads.len());
        params
            .iter_mut()
            .zip(grads)
            .for_each(|(p, &g)| *p -= self.learning_rate * g);
    }

    fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, learning_rate: f32) {
        self.learning_rate = learning_rate;
    }

    fn name(&self) -> &'static str {
        "SGD"
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Moments {
    m: Vec<f32>,
    v: Vec<f32>,
}

/// Adaptive moment estimation.
///
/// Keeps first and second moment estimates per parameter slot. The timestep advances once per
/// [`Optimizer::begin_step`], so every slot updated within one step shares the same bias
/// correction.
#[derive(Clone, Debug, PartialEq)]
pub struct Adam {
    learning_rate: f32,
    beta1: f32,
    beta2: f32,
    epsilon: f32,
    t: i32,
    moments: Vec<Moments>,
}

impl Adam {
    pub fn new(learning_rate: f32) -> Self {
        Self::with_parameters(learning_rate, 0.9, 0.999, 1e-8)
    }

    pub fn with_parameters(learning_rate: f32, beta1: f32, beta2: f32, epsilon: f32) -> Self {
        Self {
            learning_rate,
            beta1,
            beta2,
            epsilon,
            t: 0,
            moments: Vec::new(),
        }
    }

    fn moments(&mut self, slot: usize, len: usize) -> &mut Moments {
        if slot >= self.moments.len() {
            self.moments.resize_with(slot + 1, Moments::default);
        }

        let moments = &mut self.moments[slot];
        if moments.m.len() != len {
            moments.m = vec![0.; len];
            moments.v = vec![0.; len];
        }
        moments
    }
}

impl Optimizer for Adam {
    fn begin_step(&mut self) {
        self.t = self.t.saturating_add(1);
    }

    fn update(&mut self, slot: usize, params: &mut [f32], grads: &[f32]) {
        debug_assert_eq!(params.len(), grads.len());

        let (lr, beta1, beta2, epsilon) = (self.learning_rate, self.beta1, self.beta2, self.epsilon);
        let t = self.t.max(1);
        let correction1 = 1. - beta1.powi(t);
        let correction2 = 1. - beta2.powi(t);

        let moments = self.moments(slot, params.len());
        for (i, (p, &g)) in params.iter_mut().zip(grads).enumerate() {
            moments.m[i] = beta1 * moments.m[i] + (1. - beta1) * g;
            moments.v[i] = beta2 * moments.v[i] + (1. - beta2) * g * g;

            let m_hat = moments.m[i] / correction1;
            let v_hat = moments.v[i] / correction2;
            *p -= lr * m_hat / (v_hat.sqrt() + epsilon);
        }
    }

    fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, learning_rate: f32) {
        self.learning_rate = learning_rate;
    }

    fn name(&self) -> &'static str {
        "ADAM"
    }
}

/// Serializable choice of optimizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptimizerKind {
    #[default]
    Sgd,
    Adam,
}

impl OptimizerKind {
    pub fn build(self, learning_rate: f32) -> Box<dyn Optimizer> {
        match self {
            OptimizerKind::Sgd => Box::new(Sgd::new(learning_rate)),
            OptimizerKind::Adam => Box::new(Adam::new(learning_rate)),
        }
    }
}
