//! Plain-text rendering for predictions, model parameters and the grade table.

use std::fmt::Write;

use edupredict_ai::Prediction;
use edupredict_core::{FEATURE_NAMES, GRADES, GradeInfo, ModelConfig, StudentFeatures};

// ── Public API ──

/// Print a prediction as a result card: grade, heading, message, then inputs and scores.
pub fn print_grade_card(
    features: &StudentFeatures,
    prediction: &Prediction,
    labels: &[String],
    info: Option<&GradeInfo>,
) {
    print!("{}", render_grade_card(features, prediction, labels, info));
}

pub fn print_model(config: &ModelConfig) {
    print!("{}", render_model(config));
}

pub fn print_grade_table() {
    print!("{}", render_grade_table());
}

// ── Rendering ──

fn render_grade_card(
    features: &StudentFeatures,
    prediction: &Prediction,
    labels: &[String],
    info: Option<&GradeInfo>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Grade {} ===", prediction.label);
    if let Some(info) = info {
        let _ = writeln!(out, "{}", info.heading);
        let _ = writeln!(out, "{}", info.message);
        let _ = writeln!(out, "  {:<22} {}", "color", info.color);
    }
    out.push('\n');

    out.push_str("Inputs\n");
    for (name, (raw, z)) in FEATURE_NAMES
        .iter()
        .zip(features.to_vector().iter().zip(&prediction.standardized))
    {
        let _ = writeln!(out, "  {name:<22} {raw:>10.2}   (z = {z:+.3})");
    }
    out.push('\n');

    out.push_str("Scores\n");
    for (label, score) in labels.iter().zip(&prediction.scores) {
        let marker = if *label == prediction.label { "*" } else { " " };
        let _ = writeln!(out, " {marker}{label:<22} {score:>10.3}");
    }
    out
}

fn render_model(config: &ModelConfig) -> String {
    let mut out = String::new();
    out.push_str("Scaler\n");
    for (i, (mean, scale)) in config
        .scaler
        .mean
        .iter()
        .zip(&config.scaler.scale)
        .enumerate()
    {
        let name = FEATURE_NAMES.get(i).copied().unwrap_or("?");
        let _ = writeln!(out, "  {name:<22} mean {mean:>10.4}   scale {scale:>8.4}");
    }
    out.push('\n');

    let clf = &config.classifier;
    let _ = writeln!(out, "Classes ({})", clf.n_classes());
    for ((label, row), bias) in clf.labels.iter().zip(&clf.weights).zip(&clf.bias) {
        let weights: Vec<String> = row.iter().map(|w| format!("{w:>8.3}")).collect();
        let _ = writeln!(out, "  {label:<4} bias {bias:>8.3}   w [{}]", weights.join(", "));
    }
    out
}

fn render_grade_table() -> String {
    let mut out = String::new();
    for g in &GRADES {
        let _ = writeln!(out, "{}  {:<24} {}", g.label, g.heading, g.color);
        let _ = writeln!(out, "   {}", g.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use edupredict_ai::Classifier;
    use edupredict_core::grade_info;

    #[test]
    fn card_marks_predicted_class() {
        let clf = Classifier::reference();
        let features = StudentFeatures::new(15.0, 95.0, 8.0);
        let prediction = clf.explain(&features.to_vector()).unwrap();

        let card = render_grade_card(
            &features,
            &prediction,
            clf.labels(),
            grade_info(&prediction.label),
        );
        assert!(card.starts_with("=== Grade A ==="));
        assert!(card.contains("Exceptional Excellence"));
        assert!(card.contains(" *A "));
        assert!(card.contains("study_hours"));
    }

    #[test]
    fn card_without_info_skips_heading() {
        let clf = Classifier::reference();
        let features = StudentFeatures::new(1.0, 40.0, 1.0);
        let prediction = clf.explain(&features.to_vector()).unwrap();

        let card = render_grade_card(&features, &prediction, clf.labels(), None);
        assert!(card.starts_with("=== Grade F ===\n\n"));
        assert!(!card.contains("Critical Intervention"));
    }

    #[test]
    fn model_lists_every_class() {
        let text = render_model(&ModelConfig::reference());
        assert!(text.contains("Classes (5)"));
        for label in ["A", "B", "C", "D", "F"] {
            assert!(text.contains(&format!("  {label:<4} bias")));
        }
    }

    #[test]
    fn grade_table_has_all_grades() {
        let table = render_grade_table();
        assert_eq!(table.lines().count(), GRADES.len() * 2);
        assert!(table.contains("#ef4444"));
    }
}
