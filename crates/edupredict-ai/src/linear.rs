//! Linear decision function and argmax decision rule.

use edupredict_core::{ClassifierParams, ModelError};

/// Raw per-class decision values: `bias[c] + Σ_i x[i] * weights[c][i]`.
///
/// Terms are accumulated left to right starting from the bias, so results
/// match a sequential scalar loop bit for bit. No softmax is applied.
pub fn score(standardized: &[f64], params: &ClassifierParams) -> Result<Vec<f64>, ModelError> {
    ModelError::check_len("bias", params.weights.len(), params.bias.len())?;

    params
        .weights
        .iter()
        .zip(&params.bias)
        .map(|(row, &bias)| -> Result<f64, ModelError> {
            ModelError::check_len("weight row", standardized.len(), row.len())?;
            Ok(standardized
                .iter()
                .zip(row)
                .fold(bias, |acc, (x, w)| acc + x * w))
        })
        .collect()
}

/// Index of the first maximum, or `None` for an empty slice.
///
/// Ties resolve to the lowest index. Comparisons against NaN are false, so a
/// NaN after index 0 is never selected and a NaN at index 0 is never replaced.
pub fn argmax(scores: &[f64]) -> Option<usize> {
    let (first, rest) = scores.split_first()?;
    let mut best = 0;
    let mut best_score = *first;
    for (i, &s) in rest.iter().enumerate() {
        if s > best_score {
            best = i + 1;
            best_score = s;
        }
    }
    Some(best)
}

/// Label of the highest-scoring class.
pub fn decide<'a, S: AsRef<str>>(scores: &[f64], labels: &'a [S]) -> Result<&'a str, ModelError> {
    ModelError::check_len("scores", labels.len(), scores.len())?;
    let best = argmax(scores).ok_or(ModelError::EmptyInput)?;
    Ok(labels[best].as_ref())
}
