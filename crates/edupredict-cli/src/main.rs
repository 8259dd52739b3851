mod batch;
mod display;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use edupredict_ai::Classifier;
use edupredict_core::{ModelConfig, StudentFeatures, grade_info};

#[derive(Parser)]
#[command(name = "edupredict", version, about = "Predict a student's grade band")]
struct Cli {
    /// Model JSON export to use instead of the embedded reference model.
    #[arg(long, global = true, env = "EDUPREDICT_MODEL")]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict the grade for one student.
    Predict {
        /// Weekly study hours.
        #[arg(long)]
        study_hours: f64,
        /// Attendance percentage (0-100).
        #[arg(long)]
        attendance: f64,
        /// Participation score.
        #[arg(long)]
        participation: f64,
        /// Pause before showing the result, in milliseconds.
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
        /// Emit JSON instead of a result card.
        #[arg(long)]
        json: bool,
    },
    /// Predict grades for every row of a CSV file.
    Batch {
        /// CSV with study_hours, attendance_pct and participation_score columns.
        csv: PathBuf,
    },
    /// Show the active model parameters.
    Model {
        #[arg(long)]
        json: bool,
    },
    /// Show the grade display table.
    Grades,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_model(cli.model.as_deref())?;

    match cli.command {
        Command::Predict {
            study_hours,
            attendance,
            participation,
            delay_ms,
            json,
        } => {
            let clf = Classifier::new(config).context("invalid model")?;
            let features = StudentFeatures::new(study_hours, attendance, participation);
            if !features.is_finite() {
                anyhow::bail!("features must be finite numbers");
            }

            let prediction = clf.explain(&features.to_vector())?;
            if delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }

            let info = grade_info(&prediction.label);
            if json {
                let scores: serde_json::Map<String, serde_json::Value> = clf
                    .labels()
                    .iter()
                    .zip(&prediction.scores)
                    .map(|(label, &score)| (label.clone(), serde_json::Value::from(score)))
                    .collect();
                let out = serde_json::json!({
                    "grade": prediction.label,
                    "features": features,
                    "scores": scores,
                    "info": info,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                display::print_grade_card(&features, &prediction, clf.labels(), info);
            }
        }
        Command::Batch { csv } => {
            let clf = Classifier::new(config).context("invalid model")?;
            let (batches, stats) = batch::run_batch_pipeline(&clf, &csv)?;
            println!("{}", arrow::util::pretty::pretty_format_batches(&batches)?);
            eprintln!(
                "  Graded {} rows in {:.3}s",
                stats.total_rows, stats.elapsed_secs
            );
        }
        Command::Model { json } => {
            if json {
                println!("{}", config.to_json_pretty()?);
            } else {
                display::print_model(&config);
            }
        }
        Command::Grades => display::print_grade_table(),
    }

    Ok(())
}

fn load_model(path: Option<&Path>) -> anyhow::Result<ModelConfig> {
    match path {
        Some(path) => ModelConfig::load(path)
            .with_context(|| format!("loading model from {}", path.display())),
        None => {
            tracing::debug!("using embedded reference model");
            Ok(ModelConfig::reference())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_path_uses_reference_model() {
        assert_eq!(load_model(None).unwrap(), ModelConfig::reference());
    }

    #[test]
    fn model_path_loads_export() {
        let json = ModelConfig::reference().to_json_pretty().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = load_model(Some(file.path())).unwrap();
        assert_eq!(config, ModelConfig::reference());
    }

    #[test]
    fn missing_model_path_names_file() {
        let err = load_model(Some(Path::new("/nonexistent/model.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/model.json"));
    }

    #[test]
    fn model_flag_is_global() {
        let cli = Cli::try_parse_from(["edupredict", "grades", "--model", "m.json"]).unwrap();
        assert_eq!(cli.model.as_deref(), Some(Path::new("m.json")));
        assert!(matches!(cli.command, Command::Grades));
    }
}
