use anyhow::{Context, Result};
use clap::ArgMatches;
use neural_rs::TrainConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a training configuration from a JSON file. Missing fields take their defaults.
pub fn load_train_config(path: &Path) -> Result<TrainConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse config file: {:?}", path))
}

/// Builds the training configuration of the `train` command: the `--config` file (or the
/// defaults) with every command line override applied on top.
pub fn train_config_from_arguments(matches: &ArgMatches) -> Result<TrainConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("Using config: {:?}", path);
            load_train_config(path)?
        }
        None => TrainConfig::default(),
    };

    if let Some(&epochs) = matches.get_one::<usize>("epochs") {
        config.epochs = epochs;
    }

    if let Some(&learning_rate) = matches.get_one::<f32>("learning_rate") {
        config.learning_rate = learning_rate;
    }

    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }

    if let Some(&log_points) = matches.get_one::<usize>("log_points") {
        config.log_points = log_points;
    }

    config.validate().context("Invalid training configuration")?;

    Ok(config)
}

/// Parses a comma separated list of numbers such as `1,0` or `0.5, 1.5`.
pub fn parse_inputs(text: &str) -> Result<Vec<f32>> {
    text.split(',')
        .map(|value| {
            let value = value.trim();
            value
                .parse::<f32>()
                .with_context(|| format!("Invalid input value '{value}'"))
        })
        .collect()
}
