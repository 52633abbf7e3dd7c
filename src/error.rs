use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building a network or moving its
/// inputs in and out of files.
#[derive(Debug, Error)]
pub enum Error {
    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("instances have no class values")]
    NoClasses,

    #[error("instance {index} has {found} attributes, expected {expected}")]
    AttributeCount {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("instance {index} has {found} class values, expected {expected}")]
    ClassCount {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("hidden weight matrix has {found} rows, expected {expected}")]
    HiddenRows { expected: usize, found: usize },

    #[error("hidden weight row {row} has {found} columns, expected {expected}")]
    HiddenColumns {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("output weight matrix has {found} rows, expected {expected}")]
    OutputRows { expected: usize, found: usize },

    #[error("output weight row {row} has {found} columns, expected {expected}")]
    OutputColumns {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("learning rate must be finite and positive, got {0}")]
    LearningRate(f64),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error comes from inconsistent network parameters rather
    /// than from reading or writing a file.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_errors_are_configuration_errors() {
        let e = Error::HiddenColumns {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert!(e.is_configuration());
        assert_eq!(
            e.to_string(),
            "hidden weight row 2 has 3 columns, expected 4"
        );
    }

    #[test]
    fn io_errors_are_not_configuration_errors() {
        let e = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(!e.is_configuration());
    }
}
