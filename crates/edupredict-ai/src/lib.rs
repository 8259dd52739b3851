//! Grade inference: Z-score standardization, linear scoring, argmax decision.

pub mod batch;
mod classifier;
mod error;
pub mod linear;
pub mod scaler;

pub use classifier::{Classifier, Prediction, predict};
pub use error::BatchError;
pub use linear::{argmax, decide, score};
pub use scaler::standardize;
