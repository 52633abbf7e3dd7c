use crate::config::Config;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// The two weight matrices of a network.
///
/// `hidden` is `[hidden_units][attributes + 1]` and `output` is
/// `[classes][hidden_units + 1]`; the last column of each row is the weight
/// of the bias unit feeding that layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub hidden: Vec<Vec<f64>>,
    pub output: Vec<Vec<f64>>,
}

impl Weights {
    pub fn new(hidden: Vec<Vec<f64>>, output: Vec<Vec<f64>>) -> Self {
        Weights { hidden, output }
    }

    /// Samples every weight uniformly from `[-1, 1)`.
    pub fn random<R: Rng>(
        attributes: usize,
        hidden_units: usize,
        classes: usize,
        rng: &mut R,
    ) -> Self {
        let mut matrix = |rows: usize, cols: usize| -> Vec<Vec<f64>> {
            (0..rows)
                .map(|_| (0..cols).map(|_| rng.random_range(-1.0..1.0)).collect())
                .collect()
        };

        let hidden = matrix(hidden_units, attributes + 1);
        let output = matrix(classes, hidden_units + 1);
        Weights { hidden, output }
    }

    /// Random weights sized for `config.hidden_units`, drawn from `config.seed`
    /// when set and from the thread RNG otherwise.
    pub fn from_config(attributes: usize, classes: usize, config: &Config) -> Self {
        let hidden_units = config.hidden_units;
        match config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Weights::random(attributes, hidden_units, classes, &mut rng)
            }
            None => Weights::random(attributes, hidden_units, classes, &mut rand::rng()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn random_weights_have_the_expected_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let w = Weights::random(4, 3, 2, &mut rng);

        assert_eq!(w.hidden.len(), 3);
        assert!(w.hidden.iter().all(|row| row.len() == 5));
        assert_eq!(w.output.len(), 2);
        assert!(w.output.iter().all(|row| row.len() == 4));
        assert!(
            w.hidden
                .iter()
                .chain(&w.output)
                .flatten()
                .all(|&x| (-1.0..1.0).contains(&x))
        );
    }

    #[test]
    fn random_weights_are_reproducible_from_a_seed() {
        let a = Weights::random(2, 2, 2, &mut StdRng::seed_from_u64(42));
        let b = Weights::random(2, 2, 2, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_configs_give_the_same_weights() {
        let config = Config {
            hidden_units: 3,
            seed: Some(9),
            ..Config::default()
        };
        let w = Weights::from_config(2, 4, &config);
        assert_eq!(w, Weights::from_config(2, 4, &config));
        assert_eq!(w, Weights::random(2, 3, 4, &mut StdRng::seed_from_u64(9)));
    }

    #[test]
    fn zero_hidden_units_still_wire_the_output_bias() {
        let w = Weights::random(3, 0, 2, &mut StdRng::seed_from_u64(1));
        assert!(w.hidden.is_empty());
        assert_eq!(w.output.len(), 2);
        assert!(w.output.iter().all(|row| row.len() == 1));
    }

    #[test]
    fn missing_and_corrupt_files_fail_differently() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let missing = Weights::from_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(Error::Io(_))));

        let path = dir.path().join("corrupt.json");
        std::fs::write(&path, "{\"hidden\": [[0.1, ")?;
        assert!(matches!(Weights::from_file(&path), Err(Error::Json(_))));
        Ok(())
    }

    #[test]
    fn saved_weights_load_back_unchanged() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("weights.json");
        let w = Weights::new(vec![vec![0.1, -0.2, 0.3]], vec![vec![0.25, -0.125]]);

        w.save_to_file(&path)?;
        assert_eq!(Weights::from_file(&path)?, w);
        Ok(())
    }
}
