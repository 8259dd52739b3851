//! Model parameters: scaler constants and linear classifier weights.
//!
//! The JSON layout mirrors the export of the trained scikit-learn pipeline:
//!
//! ```json
//! {
//!   "scaler": { "mean": [..], "scale": [..] },
//!   "logistic_regression": { "coef": [[..], ..], "intercept": [..], "classes": [..] }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ModelError;
use crate::reference;

/// Per-feature Z-score constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    /// Must not contain zeros; checked by [`ModelConfig::validate`].
    pub scale: Vec<f64>,
}

/// Linear decision function for K classes.
///
/// `weights[c]`, `bias[c]` and `labels[c]` all describe class `c`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierParams {
    #[serde(rename = "coef")]
    pub weights: Vec<Vec<f64>>,
    #[serde(rename = "intercept")]
    pub bias: Vec<f64>,
    #[serde(rename = "classes")]
    pub labels: Vec<String>,
}

impl ClassifierParams {
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// Index of `label` in class order.
    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

/// Complete model: scaler followed by classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub scaler: ScalerParams,
    #[serde(rename = "logistic_regression", alias = "logisticRegression")]
    pub classifier: ClassifierParams,
}

impl ModelConfig {
    /// The reference grade model compiled into the binary.
    pub fn reference() -> Self {
        Self {
            scaler: ScalerParams {
                mean: reference::SCALER_MEAN.to_vec(),
                scale: reference::SCALER_SCALE.to_vec(),
            },
            classifier: ClassifierParams {
                weights: reference::COEF.iter().map(|row| row.to_vec()).collect(),
                bias: reference::INTERCEPT.to_vec(),
                labels: reference::CLASSES.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    /// Parse and validate a model from its JSON export.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a model JSON file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            features = config.n_features(),
            classes = config.classifier.n_classes(),
            "loaded model"
        );
        Ok(config)
    }

    /// Pretty JSON in the same layout [`ModelConfig::from_json_str`] accepts.
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn n_features(&self) -> usize {
        self.scaler.mean.len()
    }

    /// Check that all collections agree in cardinality and no scale is zero.
    pub fn validate(&self) -> Result<(), ModelError> {
        let n = self.n_features();
        ModelError::check_len("scaler scale", n, self.scaler.scale.len())?;
        if let Some(index) = self.scaler.scale.iter().position(|&s| s == 0.0) {
            return Err(ModelError::ZeroScale { index });
        }

        let k = self.classifier.n_classes();
        if k == 0 {
            return Err(ModelError::EmptyInput);
        }
        ModelError::check_len("weight rows", k, self.classifier.weights.len())?;
        ModelError::check_len("bias", k, self.classifier.bias.len())?;
        for row in &self.classifier.weights {
            ModelError::check_len("weight row", n, row.len())?;
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::reference()
    }
}
