/// Arrow schemas for batch grade prediction.
pub mod student {
    use arrow::datatypes::{DataType, Field, Schema};

    use crate::features::FEATURE_NAMES;

    /// Name of the label column appended by batch prediction.
    pub const GRADE_COLUMN: &str = "grade";

    /// Schema for raw student feature rows, one non-null Float64 per feature.
    pub fn features_schema() -> Schema {
        Schema::new(
            FEATURE_NAMES
                .iter()
                .map(|name| Field::new(*name, DataType::Float64, false))
                .collect::<Vec<_>>(),
        )
    }
}
