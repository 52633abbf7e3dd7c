use shallow_net::{Config, Instance, NeuralNetwork, Weights};

fn main() -> shallow_net::Result<()> {
    // XOR as a two-class problem: class 1 when exactly one input is set
    let training_set = vec![
        Instance::labeled(vec![0.0, 0.0], 0, 2),
        Instance::labeled(vec![0.0, 1.0], 1, 2),
        Instance::labeled(vec![1.0, 0.0], 1, 2),
        Instance::labeled(vec![1.0, 1.0], 0, 2),
    ];

    let config = Config {
        hidden_units: 4,
        learning_rate: 0.5,
        max_epoch: 20000,
        seed: Some(413),
    };

    let weights = Weights::from_config(2, 2, &config);
    let mut nn = NeuralNetwork::new(training_set.clone(), &config, weights)?;

    nn.train();

    // Test the network
    for instance in &training_set {
        let outputs = nn.outputs(instance);
        println!(
            "Input: {:?}, Expected: {}, Got: {} ({:.4}, {:.4})",
            instance.attributes,
            instance.label(),
            nn.classify(instance),
            outputs[0],
            outputs[1]
        );
    }
    println!("Accuracy: {:.2}", nn.accuracy(&training_set));

    Ok(())
}
