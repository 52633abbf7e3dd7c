use serde::{Deserialize, Serialize};

/// The logistic function `1 / (1 + e^-x)`.
///
/// Saturates to exactly 0 or 1 for very large magnitudes instead of
/// producing NaN.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its output `y = sigmoid(x)`.
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

/// A weighted edge from a unit in the layer below.
///
/// `source` is the position of that unit within its layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub source: usize,
    pub weight: f64,
}

impl Connection {
    pub fn new(source: usize, weight: f64) -> Self {
        Connection { source, weight }
    }
}

/// A node of the network, tagged by the role it plays.
#[derive(Debug, Clone, PartialEq)]
pub enum Unit {
    /// Passes an instance attribute through unchanged.
    Input,
    /// Always emits 1.
    Bias,
    Hidden(Vec<Connection>),
    Output(Vec<Connection>),
}

impl Unit {
    /// Incoming connections; empty for input and bias units.
    pub fn parents(&self) -> &[Connection] {
        match self {
            Unit::Hidden(parents) | Unit::Output(parents) => parents,
            Unit::Input | Unit::Bias => &[],
        }
    }

    pub fn parents_mut(&mut self) -> &mut [Connection] {
        match self {
            Unit::Hidden(parents) | Unit::Output(parents) => parents,
            Unit::Input | Unit::Bias => &mut [],
        }
    }

    /// Weighted sum of the parents' activations.
    pub fn net(&self, below: &[f64]) -> f64 {
        self.parents()
            .iter()
            .map(|c| below[c.source] * c.weight)
            .sum()
    }

    /// Activation of the unit sitting at `index` in its layer.
    ///
    /// For input units `source` holds the instance attributes, otherwise it
    /// holds the activations of the layer below.
    pub fn activate(&self, index: usize, source: &[f64]) -> f64 {
        match self {
            Unit::Input => source[index],
            Unit::Bias => 1.0,
            Unit::Hidden(_) | Unit::Output(_) => sigmoid(self.net(source)),
        }
    }
}
