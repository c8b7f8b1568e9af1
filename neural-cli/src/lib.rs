//! Building blocks of the `neural` command line tool.

use clap::{Arg, Command, ValueHint};
use std::path::PathBuf;

pub mod gates;
pub mod input;

/// Command line definition of the `neural` tool.
pub fn cli() -> Command {
    Command::new("neural")
        .version(clap::crate_version!())
        .about("Train and evaluate small feed-forward networks on logic gates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("train")
                .about("Train a network on the truth table of a logic gate")
                .arg(
                    Arg::new("gate")
                        .help("Logic gate to learn")
                        .required(true)
                        .value_parser(gates::GATE_NAMES),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON training configuration")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("epochs")
                        .short('e')
                        .long("epochs")
                        .help("Number of training epochs. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("learning_rate")
                        .short('l')
                        .long("learning-rate")
                        .help("Learning rate. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(f32)),
                )
                .arg(
                    Arg::new("seed")
                        .short('s')
                        .long("seed")
                        .help("Seed of the weight initialization. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("log_points")
                        .long("log-points")
                        .help("Number of epochs at which the loss is reported. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("hidden")
                        .long("hidden")
                        .help("Width of a hidden layer; 0 trains a single neuron. Defaults to 2 for xor.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("File the trained model is written to")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("predict")
                .about("Evaluate a saved model on one input")
                .arg(
                    Arg::new("model")
                        .help("Path to a model written by 'train --output'")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("inputs")
                        .help("Comma separated input values, e.g. 1,0")
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(Command::new("config").about("Print the default training configuration as JSON"))
}
