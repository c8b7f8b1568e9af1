use anyhow::{Context, Result};
use clap::ArgMatches;
use log::LevelFilter;
use neural_rs::{Network, TrainConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use neural_cli::gates::Gate;
use neural_cli::input::{parse_inputs, train_config_from_arguments};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("NEURAL_LOG", "error,neural=info"))
        .init();

    let matches = neural_cli::cli().get_matches();

    match matches.subcommand() {
        Some(("train", sub_m)) => handle_train(sub_m),
        Some(("predict", sub_m)) => handle_predict(sub_m),
        Some(("config", _)) => handle_config(),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_train(matches: &ArgMatches) -> Result<()> {
    let gate: Gate = matches
        .get_one::<String>("gate")
        .context("Missing gate")?
        .parse()?;
    let config = train_config_from_arguments(matches)?;

    let default_hidden = if gate.is_linearly_separable() { 0 } else { 2 };
    let hidden = matches
        .get_one::<usize>("hidden")
        .copied()
        .unwrap_or(default_hidden);
    if hidden == 0 && !gate.is_linearly_separable() {
        log::warn!("A single neuron cannot learn {}", gate.name());
    }

    let (hidden_layers, hidden_dim) = if hidden == 0 { (0, 0) } else { (1, hidden) };
    let mut network =
        Network::with_topology(gate.name(), 2, hidden_layers, hidden_dim, 1, config.activation)?;
    network.set_optimizer(config.optimizer.build(config.learning_rate));

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    network.initialize(config.initializer, &mut rng)?;

    let (x, y) = gate.truth_table();
    network
        .fit(&x, &y, &config)
        .with_context(|| format!("Training '{}' failed", gate.name()))?;

    println!("{network}");
    for (input, target) in x.rows().zip(y.iter()) {
        let predicted = network.predict(input)?[0];
        println!("{input:?} -> {predicted:.4} (expected {target})");
    }

    if let Some(path) = matches.get_one::<PathBuf>("output") {
        let file = File::create(path)
            .with_context(|| format!("Failed to create model file: {:?}", path))?;
        network.save(&mut BufWriter::new(file))?;
        log::info!("Model written to {:?}", path);
    }

    Ok(())
}

fn handle_predict(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<PathBuf>("model")
        .context("Missing model path")?;
    let inputs = parse_inputs(
        matches
            .get_one::<String>("inputs")
            .context("Missing inputs")?,
    )?;

    let file =
        File::open(path).with_context(|| format!("Failed to open model file: {:?}", path))?;
    let mut network = Network::load(BufReader::new(file))
        .with_context(|| format!("Failed to load model: {:?}", path))?;

    let outputs = network.predict(&inputs)?.into_matrix().into_vec();
    log::debug!("Evaluated {} outputs", outputs.len());
    for value in outputs {
        println!("{value}");
    }

    Ok(())
}

fn handle_config() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&TrainConfig::default())?);
    Ok(())
}
