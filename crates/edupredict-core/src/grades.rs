//! Display metadata for each grade label.
//!
//! Presentation-only: the classifier never reads this table.

use serde::Serialize;

/// Heading, accent color and explanatory message for one grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeInfo {
    pub label: &'static str,
    pub heading: &'static str,
    /// CSS-style hex color, e.g. `#22c55e`.
    pub color: &'static str,
    pub message: &'static str,
}

pub const GRADES: [GradeInfo; 5] = [
    GradeInfo {
        label: "A",
        heading: "Exceptional Excellence",
        color: "#22c55e",
        message: "The model predicts high academic standing with major honors likely.",
    },
    GradeInfo {
        label: "B",
        heading: "Strong Standing",
        color: "#38bdf8",
        message: "Superior performance detected. The student is well above the required threshold.",
    },
    GradeInfo {
        label: "C",
        heading: "Standard Competency",
        color: "#eab308",
        message: "Satisfactory progress. Maintaining current habits will lead to a standard passing grade.",
    },
    GradeInfo {
        label: "D",
        heading: "Improvement Required",
        color: "#f97316",
        message: "Marginal standing. Additional support or increased study hours may be necessary.",
    },
    GradeInfo {
        label: "F",
        heading: "Critical Intervention",
        color: "#ef4444",
        message: "High-risk alert. Immediate intervention is advised to improve academic outcomes.",
    },
];

/// Look up display metadata by grade label.
pub fn grade_info(label: &str) -> Option<&'static GradeInfo> {
    GRADES.iter().find(|g| g.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::CLASSES;

    #[test]
    fn every_reference_class_has_info() {
        for class in CLASSES {
            assert!(grade_info(class).is_some(), "missing info for {class}");
        }
    }

    #[test]
    fn unknown_label_has_no_info() {
        assert!(grade_info("E").is_none());
        assert!(grade_info("a").is_none());
    }
}
