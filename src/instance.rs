use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One labeled example: numeric attributes and a one-hot class vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub attributes: Vec<f64>,
    pub class_values: Vec<f64>,
}

impl Instance {
    pub fn new(attributes: Vec<f64>, class_values: Vec<f64>) -> Self {
        Instance {
            attributes,
            class_values,
        }
    }

    /// Builds an instance whose class vector is one-hot at `label`.
    pub fn labeled(attributes: Vec<f64>, label: usize, classes: usize) -> Self {
        let class_values = (0..classes)
            .map(|i| if i == label { 1.0 } else { 0.0 })
            .collect();
        Instance::new(attributes, class_values)
    }

    /// The class index this instance is labeled with.
    pub fn label(&self) -> usize {
        argmax(&self.class_values)
    }

    /// Reads a JSON array of instances.
    pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Vec<Instance>> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Index of the largest value, preferring the earliest one on ties.
///
/// Returns 0 for an empty slice.
pub fn argmax(values: &[f64]) -> usize {
    let mut index = 0;
    let mut best = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best {
            best = v;
            index = i;
        }
    }
    index
}
