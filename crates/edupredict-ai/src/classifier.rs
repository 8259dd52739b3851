//! Linear grade classifier.
//!
//! Standardizes the three student features against the training scaler,
//! scores every grade with a linear decision function, and returns the label
//! with the highest score.

use edupredict_core::{ClassifierParams, ModelConfig, ModelError, ScalerParams, StudentFeatures};
use tracing::{debug, warn};

use crate::linear::{decide, score};
use crate::scaler::standardize;

/// Predict a class label from raw features and explicit model parameters.
///
/// Equivalent to `decide(score(standardize(features, scaler), classifier), labels)`.
pub fn predict<'a>(
    features: &[f64],
    scaler: &ScalerParams,
    classifier: &'a ClassifierParams,
) -> Result<&'a str, ModelError> {
    let standardized = standardize(features, scaler)?;
    let scores = score(&standardized, classifier)?;
    decide(&scores, &classifier.labels)
}

/// Validated model parameters ready for repeated prediction.
///
/// Holds no mutable state; share one instance across threads freely.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ModelConfig,
}

/// Intermediate values of a single prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// Z-scored features, in model order.
    pub standardized: Vec<f64>,
    /// Raw decision value per class, in label order.
    pub scores: Vec<f64>,
}

impl Classifier {
    /// Validate `config` and wrap it.
    pub fn new(config: ModelConfig) -> Result<Self, ModelError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Classifier over the embedded reference model.
    pub fn reference() -> Self {
        Self {
            config: ModelConfig::reference(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.config.classifier.labels
    }

    pub fn n_features(&self) -> usize {
        self.config.n_features()
    }

    pub fn n_classes(&self) -> usize {
        self.config.classifier.n_classes()
    }

    /// Predict the grade label for a raw feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<&str, ModelError> {
        if features.iter().any(|v| !v.is_finite()) {
            warn!(?features, "non-finite feature values; prediction may be meaningless");
        }
        let label = predict(features, &self.config.scaler, &self.config.classifier)?;
        debug!(?features, label, "predicted grade");
        Ok(label)
    }

    /// Predict from the typed feature struct.
    pub fn predict_features(&self, features: &StudentFeatures) -> Result<&str, ModelError> {
        self.predict(&features.to_vector())
    }

    /// Predict and keep the standardized features and raw scores.
    pub fn explain(&self, features: &[f64]) -> Result<Prediction, ModelError> {
        let standardized = standardize(features, &self.config.scaler)?;
        let scores = score(&standardized, &self.config.classifier)?;
        let label = decide(&scores, &self.config.classifier.labels)?.to_string();
        Ok(Prediction {
            label,
            standardized,
            scores,
        })
    }

    /// Predict a batch of students, failing on the first error.
    pub fn predict_batch<'a>(
        &'a self,
        students: &[StudentFeatures],
    ) -> Result<Vec<&'a str>, ModelError> {
        students.iter().map(|s| self.predict_features(s)).collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::reference()
    }
}
