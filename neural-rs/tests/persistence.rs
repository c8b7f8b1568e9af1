use linalg_rs::matrix;
use neural_rs::{Activation, Initializer, Network, Result, TrainConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn trained_model_survives_a_save_load_round_trip() -> Result<()> {
    let x = matrix![[0., 0.], [0., 1.], [1., 0.], [1., 1.]];
    let y = matrix![[0.], [1.], [1.], [1.]];

    let mut network = Network::with_topology("or", 2, 1, 3, 1, Activation::Sigmoid)?;
    network.initialize(Initializer::Xavier, &mut StdRng::seed_from_u64(5))?;
    let config = TrainConfig {
        epochs: 300,
        learning_rate: 0.5,
        ..TrainConfig::default()
    };
    network.fit(&x, &y, &config)?;

    let mut buffer: Vec<u8> = Vec::new();
    network.save(&mut buffer)?;
    let mut loaded = Network::load(buffer.as_slice())?;

    assert_eq!(loaded.name(), network.name());
    assert_eq!(loaded.layers().len(), 2);
    for input in x.rows() {
        assert_eq!(loaded.predict(input)?, network.predict(input)?);
    }

    let mut second: Vec<u8> = Vec::new();
    loaded.save(&mut second)?;
    assert_eq!(second, buffer);

    Ok(())
}

#[test]
fn loaded_model_predicts_from_hand_written_weights() -> Result<()> {
    // a single neuron computing NAND
    let text = "\
MODEL nand 1
LAYER 1 DENSE 2 1 SIGMOID
WEIGHTS 1 2
-20 -20
BIASES 1
30
";
    let mut network = Network::load(text.as_bytes())?;

    let outputs: Vec<bool> = [[0f32, 0.], [0., 1.], [1., 0.], [1., 1.]]
        .iter()
        .map(|input| network.predict(input).map(|y| y[0] > 0.5))
        .collect::<Result<_>>()?;
    assert_eq!(outputs, vec![true, true, true, false]);

    Ok(())
}
