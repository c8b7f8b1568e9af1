use super::*;
use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

/// Strategy used to draw the starting weights and biases of a layer.
///
/// The random source is always passed in, so a seeded generator reproduces the same network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Initializer {
    /// Weights uniform in `[-1, 1)`; every bias set to one shared draw scaled by 0.1.
    #[default]
    Random,
    /// Weights from `N(0, sqrt(1 / n))` where `n` is the number of weights; zero biases.
    Xavier,
    /// Weights from `N(0, sqrt(2 / fan_in))`; zero biases.
    He,
}

impl Initializer {
    pub fn initialize<R: Rng + ?Sized>(
        self,
        weights: &mut Matrix<f32>,
        biases: &mut Vector<f32>,
        rng: &mut R,
    ) -> Result<()> {
        match self {
            Initializer::Random => {
                *weights = Matrix::random(*weights.shape(), -1., 1., rng)?;
                let bias = Uniform::new(-1f32, 1.).sample(rng) * 0.1;
                biases.fill(bias);
            }
            Initializer::Xavier => {
                let std_dev = (1. / weights.len() as f32).sqrt();
                fill_normal(weights, std_dev, rng)?;
                biases.fill(0.);
            }
            Initializer::He => {
                let std_dev = (2. / weights.n_cols() as f32).sqrt();
                fill_normal(weights, std_dev, rng)?;
                biases.fill(0.);
            }
        }

        Ok(())
    }

    pub fn name(self) -> &'static str {
        match self {
            Initializer::Random => "RANDOM",
            Initializer::Xavier => "XAVIER",
            Initializer::He => "HE",
        }
    }
}

fn fill_normal<R: Rng + ?Sized>(weights: &mut Matrix<f32>, std_dev: f32, rng: &mut R) -> Result<()> {
    if weights.is_empty() {
        return Ok(());
    }

    let distribution = Normal::new(0., std_dev)?;
    weights.iter_mut().for_each(|w| *w = distribution.sample(rng));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_initializer() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(7);
        let mut weights = Matrix::zeros((3, 4));
        let mut biases = Vector::zeros(3);

        Initializer::Random.initialize(&mut weights, &mut biases, &mut rng)?;

        assert!(weights.iter().all(|w| (-1. ..1.).contains(w)));
        assert!(weights.iter().any(|&w| w != 0.));
        assert!(biases.iter().all(|&b| b == biases[0] && b.abs() < 0.1));

        Ok(())
    }

    #[test]
    fn test_normal_initializers_zero_the_biases() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(11);

        for initializer in [Initializer::Xavier, Initializer::He] {
            let mut weights = Matrix::zeros((8, 16));
            let mut biases = Vector::ones(8);

            initializer.initialize(&mut weights, &mut biases, &mut rng)?;

            assert_eq!(biases, Vector::zeros(8));
            assert!(weights.iter().all(|w| w.is_finite()));
            assert!(weights.iter().any(|&w| w != 0.));
            let std_dev = match initializer {
                Initializer::He => (2f32 / 16.).sqrt(),
                _ => (1f32 / 128.).sqrt(),
            };
            assert!(weights.iter().all(|w| w.abs() < 6. * std_dev));
        }

        Ok(())
    }

    #[test]
    fn test_seeded_initialization_is_reproducible() -> Result<()> {
        let draw = |seed| -> Result<Matrix<f32>> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut weights = Matrix::zeros((2, 2));
            let mut biases = Vector::zeros(2);
            Initializer::Xavier.initialize(&mut weights, &mut biases, &mut rng)?;
            Ok(weights)
        };

        assert_eq!(draw(3)?, draw(3)?);
        assert_ne!(draw(3)?, draw(4)?);

        Ok(())
    }

    #[test]
    fn test_empty_weights_are_left_alone() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(1);
        let mut weights = Matrix::zeros((0, 3));
        let mut biases = Vector::new();

        Initializer::He.initialize(&mut weights, &mut biases, &mut rng)?;
        assert!(weights.is_empty());

        Ok(())
    }
}
