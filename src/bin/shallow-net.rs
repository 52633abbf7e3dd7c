//! Trains a network on a JSON instance file and reports its accuracy.
//!
//! Usage: shallow-net --train train.json --test test.json --epochs 500 --save weights.json

use anyhow::{Context, Result};
use clap::Parser;
use shallow_net::{Config, Instance, NeuralNetwork, Weights};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shallow-net")]
#[command(about = "Train a one-hidden-layer sigmoid network by backpropagation")]
struct Cli {
    /// Training instances (JSON array)
    #[arg(long)]
    train: PathBuf,

    /// Instances to evaluate after training
    #[arg(long)]
    test: Option<PathBuf>,

    /// Hyperparameters (JSON); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial weights (JSON); random when omitted
    #[arg(short, long)]
    weights: Option<PathBuf>,

    /// Where to write the trained weights
    #[arg(short, long)]
    save: Option<PathBuf>,

    #[arg(long)]
    hidden_units: Option<usize>,

    #[arg(short, long)]
    learning_rate: Option<f64>,

    #[arg(short, long)]
    epochs: Option<usize>,

    /// Seed for random weight initialization
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("reading config from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(hidden_units) = self.hidden_units {
            config.hidden_units = hidden_units;
        }
        if let Some(learning_rate) = self.learning_rate {
            config.learning_rate = learning_rate;
        }
        if let Some(epochs) = self.epochs {
            config.max_epoch = epochs;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = cli.config()?;

    let training_set = Instance::load_all(&cli.train)
        .with_context(|| format!("reading training set from {}", cli.train.display()))?;
    let first = training_set.first().context("training set is empty")?;
    let (attributes, classes) = (first.attributes.len(), first.class_values.len());

    let weights = match &cli.weights {
        Some(path) => Weights::from_file(path)
            .with_context(|| format!("reading weights from {}", path.display()))?,
        None => Weights::from_config(attributes, classes, &config),
    };

    let mut nn = NeuralNetwork::new(training_set, &config, weights)?;
    nn.train();

    let train_accuracy = nn.accuracy(nn.training_set());
    info!("Training accuracy: {:.2}%", train_accuracy * 100.0);

    if let Some(path) = &cli.test {
        let test_set = Instance::load_all(path)
            .with_context(|| format!("reading test set from {}", path.display()))?;
        info!("Test accuracy: {:.2}%", nn.accuracy(&test_set) * 100.0);
    }

    if let Some(path) = &cli.save {
        nn.weights()
            .save_to_file(path)
            .with_context(|| format!("writing weights to {}", path.display()))?;
        info!("Saved weights to {}", path.display());
    }

    Ok(())
}
