use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shallow_net::{Config, Instance, NeuralNetwork, Weights};

/// Class of a point in the unit square: which quadrant around (0.5, 0.5) it falls in.
fn quadrant(x: f64, y: f64) -> usize {
    match (x >= 0.5, y >= 0.5) {
        (false, false) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (true, true) => 3,
    }
}

fn sample(rng: &mut StdRng, count: usize) -> Vec<Instance> {
    (0..count)
        .map(|_| {
            let x: f64 = rng.random();
            let y: f64 = rng.random();
            Instance::labeled(vec![x, y], quadrant(x, y), 4)
        })
        .collect()
}

fn main() -> shallow_net::Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let training_set = sample(&mut rng, 400);
    let test_set = sample(&mut rng, 100);

    let config = Config {
        hidden_units: 8,
        learning_rate: 0.3,
        max_epoch: 1,
        seed: None,
    };
    let weights = Weights::random(2, config.hidden_units, 4, &mut rng);
    let mut nn = NeuralNetwork::new(training_set, &config, weights)?;

    // Train the network
    println!("Training...");
    for epoch in 0..2000 {
        let error = nn.train_epoch();
        if epoch % 200 == 0 {
            println!(
                "Epoch {}: MSE = {:.6}, test accuracy = {:.2}",
                epoch,
                error / nn.training_set().len() as f64,
                nn.accuracy(&test_set)
            );
        }
    }

    println!("\nTest accuracy: {:.2}", nn.accuracy(&test_set));
    Ok(())
}
