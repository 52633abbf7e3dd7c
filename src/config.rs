use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Hyperparameters for building and training a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hidden_units: usize,
    pub learning_rate: f64,
    pub max_epoch: usize,
    /// Seed for random weight initialization; the thread RNG is used when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            hidden_units: 5,
            learning_rate: 1.0,
            max_epoch: 1,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Config = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::LearningRate(self.learning_rate));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_learning_rates() {
        for lr in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = Config {
                learning_rate: lr,
                ..Config::default()
            };
            assert!(matches!(config.validate(), Err(Error::LearningRate(_))));
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{"hidden_units": 8, "max_epoch": 300}}"#)?;

        let config = Config::from_file(file.path())?;
        assert_eq!(config.hidden_units, 8);
        assert_eq!(config.max_epoch, 300);
        assert_eq!(config.learning_rate, 1.0);
        assert_eq!(config.seed, None);
        Ok(())
    }
}
