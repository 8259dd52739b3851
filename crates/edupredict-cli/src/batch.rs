//! Batch grading pipeline: reads a student CSV, predicts grades, returns graded batches.

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use edupredict_ai::Classifier;
use edupredict_ai::batch::with_grades;
use edupredict_core::student;

const CSV_BATCH_SIZE: usize = 1024;

#[derive(Debug)]
pub struct BatchStats {
    pub total_rows: usize,
    pub elapsed_secs: f64,
}

/// Run the full batch pipeline: read CSV → predict grades → graded batches.
pub fn run_batch_pipeline(
    clf: &Classifier,
    csv_path: &Path,
) -> anyhow::Result<(Vec<RecordBatch>, BatchStats)> {
    let start = Instant::now();

    let source_batches = read_csv(csv_path)
        .with_context(|| format!("reading {}", csv_path.display()))?;
    let total_rows: usize = source_batches.iter().map(|b| b.num_rows()).sum();
    tracing::info!(rows = total_rows, path = %csv_path.display(), "read student CSV");

    let graded = source_batches
        .iter()
        .map(|batch| with_grades(clf, batch))
        .collect::<Result<Vec<_>, _>>()
        .context("predicting grades")?;

    Ok((
        graded,
        BatchStats {
            total_rows,
            elapsed_secs: start.elapsed().as_secs_f64(),
        },
    ))
}

/// Read a headed CSV. Feature columns are always read as nullable Float64;
/// other columns keep the type inferred over the whole file.
fn read_csv(path: &Path) -> anyhow::Result<Vec<RecordBatch>> {
    let mut file = File::open(path)?;
    let format = Format::default().with_header(true);
    let (inferred, _) = format.infer_schema(&mut file, None)?;
    file.rewind()?;

    let features = student::features_schema();
    let schema = Schema::new(
        inferred
            .fields()
            .iter()
            .map(|f| match features.field_with_name(f.name()) {
                Ok(feature) => feature.clone().with_nullable(true),
                Err(_) => f.as_ref().clone(),
            })
            .collect::<Vec<_>>(),
    );

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_format(format)
        .with_batch_size(CSV_BATCH_SIZE)
        .build(file)?;

    Ok(reader.collect::<Result<Vec<_>, _>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, StringArray};
    use arrow::datatypes::DataType;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn grades_every_csv_row() {
        let file = write_csv(
            "student,study_hours,attendance_pct,participation_score\n\
             ada,15,95,8\n\
             bob,1.0,40.0,1.0\n",
        );
        let clf = Classifier::reference();

        let (batches, stats) = run_batch_pipeline(&clf, file.path()).unwrap();
        assert_eq!(stats.total_rows, 2);
        assert_eq!(batches.len(), 1);

        let grades = batches[0]
            .column_by_name("grade")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(grades.len(), 2);
        assert_eq!(grades.value(0), "A");
        assert_eq!(grades.value(1), "F");
    }

    #[test]
    fn missing_feature_column_fails() {
        let file = write_csv("study_hours,attendance_pct\n10,80\n");
        let clf = Classifier::reference();

        let err = run_batch_pipeline(&clf, file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("participation_score"));
    }

    #[test]
    fn decimal_after_many_integer_rows_is_read() {
        let mut csv = String::from("study_hours,attendance_pct,participation_score\n");
        for _ in 0..150 {
            csv.push_str("10,80,5\n");
        }
        csv.push_str("10.5,80,5\n");
        let file = write_csv(&csv);
        let clf = Classifier::reference();

        let (batches, stats) = run_batch_pipeline(&clf, file.path()).unwrap();
        assert_eq!(stats.total_rows, 151);
        let schema = batches[0].schema();
        assert_eq!(
            schema.field_with_name("study_hours").unwrap().data_type(),
            &DataType::Float64
        );
    }

    #[test]
    fn empty_feature_cell_fails() {
        let file = write_csv("study_hours,attendance_pct,participation_score\n10,,5\n");
        let clf = Classifier::reference();

        let err = run_batch_pipeline(&clf, file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("attendance_pct"));
    }

    #[test]
    fn missing_file_fails() {
        let clf = Classifier::reference();
        assert!(run_batch_pipeline(&clf, Path::new("/nonexistent/students.csv")).is_err());
    }
}
