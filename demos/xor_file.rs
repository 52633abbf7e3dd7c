use shallow_net::{Config, Error, Instance, NeuralNetwork, Weights};

fn main() -> shallow_net::Result<()> {
    let file_path = "xor_weights.json";

    let training_set = vec![
        Instance::labeled(vec![0.0, 0.0], 0, 2),
        Instance::labeled(vec![0.0, 1.0], 1, 2),
        Instance::labeled(vec![1.0, 0.0], 1, 2),
        Instance::labeled(vec![1.0, 1.0], 0, 2),
    ];

    let config = Config {
        hidden_units: 4,
        learning_rate: 0.5,
        max_epoch: 5000,
        seed: None,
    };

    // Resume from saved weights; start over only when the file cannot be read
    let weights = match Weights::from_file(file_path) {
        Ok(weights) => {
            println!("Loaded weights from file.");
            weights
        }
        Err(Error::Io(_)) => {
            println!("Starting from random weights.");
            Weights::random(2, config.hidden_units, 2, &mut rand::rng())
        }
        Err(e) => return Err(e),
    };

    let mut nn = NeuralNetwork::new(training_set.clone(), &config, weights)?;
    nn.train();

    for instance in &training_set {
        println!(
            "Input: {:?}, Expected: {}, Got: {}",
            instance.attributes,
            instance.label(),
            nn.classify(instance)
        );
    }

    // Save the trained weights so the next run picks up where this one stopped
    if let Err(e) = nn.weights().save_to_file(file_path) {
        eprintln!("Failed to save weights to file: {}", e);
    } else {
        println!("Weights saved to file.");
    }

    Ok(())
}
