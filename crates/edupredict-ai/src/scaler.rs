//! Z-score feature standardization.

use edupredict_core::{ModelError, ScalerParams};

/// Recenter and rescale `features` against the training distribution.
///
/// `output[i] = (features[i] - mean[i]) / scale[i]`. Non-finite inputs
/// propagate per IEEE 754; nothing is clamped.
pub fn standardize(features: &[f64], params: &ScalerParams) -> Result<Vec<f64>, ModelError> {
    ModelError::check_len("feature vector", params.mean.len(), features.len())?;
    ModelError::check_len("scaler scale", params.mean.len(), params.scale.len())?;

    Ok(features
        .iter()
        .zip(&params.mean)
        .zip(&params.scale)
        .map(|((x, mean), scale)| (x - mean) / scale)
        .collect())
}
