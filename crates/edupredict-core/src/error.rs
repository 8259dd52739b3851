use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Two collections that must agree in length do not.
    #[error("shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("no classes configured")]
    EmptyInput,

    #[error("scale for feature {index} is zero")]
    ZeroScale { index: usize },

    #[error("failed to read model file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Returns `Ok(())` when `actual == expected`, a `ShapeMismatch` otherwise.
    pub fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::ShapeMismatch {
                what,
                expected,
                actual,
            })
        }
    }
}
