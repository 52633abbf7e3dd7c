use crate::config::Config;
use crate::error::{Error, Result};
use crate::instance::{Instance, argmax};
use crate::unit::{Connection, Unit, sigmoid_derivative};
use crate::weights::Weights;
use std::mem;
use tracing::{debug, info};

/// Activations of every unit for a single instance.
///
/// `inputs` and `hiddens` end with their layer's bias entry, which is always 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Activations {
    pub inputs: Vec<f64>,
    pub hiddens: Vec<f64>,
    pub outputs: Vec<f64>,
}

/// A fully connected network with one sigmoid hidden layer, trained online
/// by backpropagation.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    inputs: Vec<Unit>,  // attributes, then bias
    hiddens: Vec<Unit>, // hidden units, then bias
    outputs: Vec<Unit>,
    fan_out: Vec<Vec<(usize, usize)>>, // hidden unit -> (output unit, connection)
    training_set: Vec<Instance>,
    learning_rate: f64,
    max_epoch: usize,
}

impl NeuralNetwork {
    /// Wires a network sized after the training set and seeded with `weights`.
    ///
    /// Fails if the training set is empty or inconsistent, if the weight
    /// matrices do not match the unit counts, or if the config is invalid.
    pub fn new(training_set: Vec<Instance>, config: &Config, weights: Weights) -> Result<Self> {
        config.validate()?;

        let first = training_set.first().ok_or(Error::EmptyTrainingSet)?;
        let attributes = first.attributes.len();
        let classes = first.class_values.len();
        let hidden_units = config.hidden_units;

        if classes == 0 {
            return Err(Error::NoClasses);
        }

        for (index, instance) in training_set.iter().enumerate() {
            if instance.attributes.len() != attributes {
                return Err(Error::AttributeCount {
                    index,
                    expected: attributes,
                    found: instance.attributes.len(),
                });
            }
            if instance.class_values.len() != classes {
                return Err(Error::ClassCount {
                    index,
                    expected: classes,
                    found: instance.class_values.len(),
                });
            }
        }

        let misshapen = |matrix: &[Vec<f64>], cols: usize| {
            matrix
                .iter()
                .enumerate()
                .find(|(_, r)| r.len() != cols)
                .map(|(row, r)| (row, r.len()))
        };

        if weights.hidden.len() != hidden_units {
            return Err(Error::HiddenRows {
                expected: hidden_units,
                found: weights.hidden.len(),
            });
        }
        if let Some((row, found)) = misshapen(&weights.hidden, attributes + 1) {
            return Err(Error::HiddenColumns {
                row,
                expected: attributes + 1,
                found,
            });
        }

        if weights.output.len() != classes {
            return Err(Error::OutputRows {
                expected: classes,
                found: weights.output.len(),
            });
        }
        if let Some((row, found)) = misshapen(&weights.output, hidden_units + 1) {
            return Err(Error::OutputColumns {
                row,
                expected: hidden_units + 1,
                found,
            });
        }

        let mut inputs: Vec<Unit> = (0..attributes).map(|_| Unit::Input).collect();
        inputs.push(Unit::Bias);

        let mut hiddens: Vec<Unit> = weights
            .hidden
            .iter()
            .map(|row| Unit::Hidden(connect(row)))
            .collect();
        hiddens.push(Unit::Bias);

        let outputs: Vec<Unit> = weights
            .output
            .iter()
            .map(|row| Unit::Output(connect(row)))
            .collect();

        // The hidden bias is never updated, so it gets no entry.
        let mut fan_out = vec![Vec::new(); hidden_units];
        for (k, unit) in outputs.iter().enumerate() {
            for (c, connection) in unit.parents().iter().enumerate() {
                if let Some(links) = fan_out.get_mut(connection.source) {
                    links.push((k, c));
                }
            }
        }

        info!(
            attributes,
            hidden_units,
            classes,
            instances = training_set.len(),
            "built network"
        );

        Ok(NeuralNetwork {
            inputs,
            hiddens,
            outputs,
            fan_out,
            training_set,
            learning_rate: config.learning_rate,
            max_epoch: config.max_epoch,
        })
    }

    /// Computes every unit's activation for the given attributes, layer by layer.
    pub fn forward(&self, attributes: &[f64]) -> Activations {
        let inputs = activate(&self.inputs, attributes);
        let hiddens = activate(&self.hiddens, &inputs);
        let outputs = activate(&self.outputs, &hiddens);

        Activations {
            inputs,
            hiddens,
            outputs,
        }
    }

    /// Output activations for an instance.
    pub fn outputs(&self, instance: &Instance) -> Vec<f64> {
        self.forward(&instance.attributes).outputs
    }

    /// Index of the output unit with the highest activation; the lowest
    /// index wins ties.
    pub fn classify(&self, instance: &Instance) -> usize {
        argmax(&self.outputs(instance))
    }

    /// Fraction of `instances` classified as labeled.
    pub fn accuracy(&self, instances: &[Instance]) -> f64 {
        if instances.is_empty() {
            return 0.0;
        }

        let correct = instances
            .iter()
            .filter(|instance| self.classify(instance) == instance.label())
            .count();

        correct as f64 / instances.len() as f64
    }

    /// Runs one forward pass, backpropagates the error and updates every
    /// weight.
    ///
    /// The instance must have the shape of the training set. Returns the
    /// squared error of the forward pass, measured before the update.
    pub fn train_instance(&mut self, instance: &Instance) -> f64 {
        debug_assert_eq!(instance.attributes.len() + 1, self.inputs.len());
        debug_assert_eq!(instance.class_values.len(), self.outputs.len());

        let a = self.forward(&instance.attributes);

        let output_deltas: Vec<f64> = a
            .outputs
            .iter()
            .zip(&instance.class_values)
            .map(|(&o, &t)| sigmoid_derivative(o) * (t - o))
            .collect();

        // Must read the output weights before they are updated.
        let hidden_deltas: Vec<f64> = self
            .fan_out
            .iter()
            .enumerate()
            .map(|(j, links)| {
                let downstream: f64 = links
                    .iter()
                    .map(|&(k, c)| self.outputs[k].parents()[c].weight * output_deltas[k])
                    .sum();
                sigmoid_derivative(a.hiddens[j]) * downstream
            })
            .collect();

        let rate = self.learning_rate;
        update(&mut self.hiddens, &hidden_deltas, &a.inputs, rate);
        update(&mut self.outputs, &output_deltas, &a.hiddens, rate);

        a.outputs
            .iter()
            .zip(&instance.class_values)
            .map(|(&o, &t)| (t - o) * (t - o))
            .sum()
    }

    /// One pass over the training set in order. Returns the summed squared error.
    pub fn train_epoch(&mut self) -> f64 {
        let training_set = mem::take(&mut self.training_set);
        let error = training_set
            .iter()
            .map(|instance| self.train_instance(instance))
            .sum();
        self.training_set = training_set;
        error
    }

    /// Trains for the configured number of epochs.
    pub fn train(&mut self) {
        info!(
            epochs = self.max_epoch,
            learning_rate = self.learning_rate,
            "training"
        );

        for epoch in 0..self.max_epoch {
            let error = self.train_epoch();
            debug!(epoch, error, "epoch complete");
        }

        let accuracy = self.accuracy(&self.training_set);
        info!(accuracy, "training complete");
    }

    /// The current weights, in the layout [`NeuralNetwork::new`] accepts.
    pub fn weights(&self) -> Weights {
        let matrix = |units: &[Unit]| -> Vec<Vec<f64>> {
            units
                .iter()
                .filter(|u| !matches!(u, Unit::Bias))
                .map(|u| u.parents().iter().map(|c| c.weight).collect())
                .collect()
        };

        Weights::new(matrix(&self.hiddens), matrix(&self.outputs))
    }

    pub fn input_units(&self) -> &[Unit] {
        &self.inputs
    }

    pub fn hidden_units(&self) -> &[Unit] {
        &self.hiddens
    }

    pub fn output_units(&self) -> &[Unit] {
        &self.outputs
    }

    pub fn training_set(&self) -> &[Instance] {
        &self.training_set
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn max_epoch(&self) -> usize {
        self.max_epoch
    }
}

fn connect(row: &[f64]) -> Vec<Connection> {
    row.iter()
        .enumerate()
        .map(|(source, &weight)| Connection::new(source, weight))
        .collect()
}

fn activate(units: &[Unit], source: &[f64]) -> Vec<f64> {
    units
        .iter()
        .enumerate()
        .map(|(i, unit)| unit.activate(i, source))
        .collect()
}

/// Applies `weight += rate * source activation * delta` to every connection
/// of the units paired with a delta. Trailing bias units have none.
fn update(units: &mut [Unit], deltas: &[f64], source: &[f64], rate: f64) {
    for (unit, &delta) in units.iter_mut().zip(deltas) {
        for connection in unit.parents_mut() {
            connection.weight += rate * source[connection.source] * delta;
        }
    }
}
