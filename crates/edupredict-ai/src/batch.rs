//! Grade prediction over Arrow record batches.
//!
//! Input batches carry one column per feature, named as in
//! [`FEATURE_NAMES`]. Integer and string columns are cast to Float64 first;
//! values that fail the cast become nulls and are rejected.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, StringArray, StringBuilder};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use edupredict_core::{FEATURE_NAMES, student};
use tracing::debug;

use crate::classifier::Classifier;
use crate::error::BatchError;

/// Predict one grade label per row of `batch`.
pub fn predict_batch(clf: &Classifier, batch: &RecordBatch) -> Result<StringArray, BatchError> {
    let columns = FEATURE_NAMES
        .iter()
        .map(|name| feature_column(batch, name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut grades = StringBuilder::with_capacity(batch.num_rows(), batch.num_rows());
    let mut features = Vec::with_capacity(columns.len());

    for row in 0..batch.num_rows() {
        features.clear();
        for (name, col) in FEATURE_NAMES.iter().zip(&columns) {
            if col.is_null(row) {
                return Err(BatchError::NullValue {
                    column: name.to_string(),
                    row,
                });
            }
            features.push(col.value(row));
        }
        grades.append_value(clf.predict(&features)?);
    }

    debug!(rows = batch.num_rows(), "predicted batch");
    Ok(grades.finish())
}

/// Return `batch` with a `grade` column appended.
///
/// An existing `grade` column is dropped and replaced by the predictions.
pub fn with_grades(clf: &Classifier, batch: &RecordBatch) -> Result<RecordBatch, BatchError> {
    let grades = predict_batch(clf, batch)?;

    let schema = batch.schema();
    let (mut fields, mut columns): (Vec<Arc<Field>>, Vec<ArrayRef>) = schema
        .fields()
        .iter()
        .zip(batch.columns())
        .filter(|(field, _)| field.name() != student::GRADE_COLUMN)
        .map(|(field, col)| (field.clone(), col.clone()))
        .unzip();

    fields.push(Arc::new(Field::new(
        student::GRADE_COLUMN,
        DataType::Utf8,
        false,
    )));
    columns.push(Arc::new(grades));

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}

fn feature_column(batch: &RecordBatch, name: &str) -> Result<Float64Array, BatchError> {
    let col = batch
        .column_by_name(name)
        .ok_or_else(|| BatchError::MissingColumn(name.to_string()))?;

    let castable = col.data_type().is_numeric()
        || matches!(col.data_type(), DataType::Utf8 | DataType::LargeUtf8);
    if !castable {
        return Err(BatchError::WrongType {
            column: name.to_string(),
            data_type: col.data_type().clone(),
        });
    }

    let cast_col = cast(col.as_ref(), &DataType::Float64)?;
    cast_col
        .as_any()
        .downcast_ref::<Float64Array>()
        .cloned()
        .ok_or_else(|| BatchError::WrongType {
            column: name.to_string(),
            data_type: col.data_type().clone(),
        })
}
