//! A single-hidden-layer sigmoid network trained by online backpropagation.

mod config;
mod error;
mod instance;
mod neural_network;
mod unit;
mod weights;

// Re-export the public types to make them available at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use instance::{Instance, argmax};
pub use neural_network::{Activations, NeuralNetwork};
pub use unit::{Connection, Unit, sigmoid, sigmoid_derivative};
pub use weights::Weights;
