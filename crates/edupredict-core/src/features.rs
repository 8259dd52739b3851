//! Student feature vectors.
//!
//! The classifier consumes plain `&[f64]` slices so that a vector of the wrong
//! length can reach it and be rejected. [`StudentFeatures`] is the typed form
//! used by callers that already know the three named inputs.

use serde::{Deserialize, Serialize};

/// Number of features the reference model was trained on.
pub const FEATURE_COUNT: usize = 3;

/// Feature names in positional order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["study_hours", "attendance_pct", "participation_score"];

/// The three raw inputs for one prediction, in model order.
///
/// No range validation happens here; non-finite values pass straight through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentFeatures {
    pub study_hours: f64,
    pub attendance_pct: f64,
    pub participation_score: f64,
}

impl StudentFeatures {
    pub fn new(study_hours: f64, attendance_pct: f64, participation_score: f64) -> Self {
        Self {
            study_hours,
            attendance_pct,
            participation_score,
        }
    }

    /// Positional vector `[study_hours, attendance_pct, participation_score]`.
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.study_hours,
            self.attendance_pct,
            self.participation_score,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.to_vector().iter().all(|v| v.is_finite())
    }
}

impl From<[f64; FEATURE_COUNT]> for StudentFeatures {
    fn from(v: [f64; FEATURE_COUNT]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}
