//! Semantic validation of generated curricula.
//!
//! The model is instructed to keep credits within range and totals
//! consistent, but replies drift. Validation never fails the pipeline; it
//! produces a report the caller can display alongside the curriculum.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::Curriculum;

/// Credit range the prompts require per course.
const CREDIT_RANGE: std::ops::RangeInclusive<u32> = 1..=6;

/// Outcome of validating a generated curriculum.
///
/// Errors are structural problems (empty programme, out-of-range credits);
/// warnings are consistency drift the curriculum is still usable with.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Structural problems.
    pub errors: Vec<String>,
    /// Consistency drift worth surfacing.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Whether the curriculum passed without errors (warnings allowed).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// One-line summary for logs and CLI output.
    pub fn summary(&self) -> String {
        format!(
            "{} error(s), {} warning(s)",
            self.errors.len(),
            self.warnings.len()
        )
    }
}

/// Validate a generated curriculum against the constraints the prompts
/// demand.
pub fn validate(curriculum: &Curriculum) -> ValidationReport {
    let mut report = ValidationReport::default();

    if curriculum.semesters.is_empty() {
        report.errors.push("curriculum has no semesters".to_string());
        return report;
    }

    let mut seen_codes: HashSet<&str> = HashSet::new();
    for semester in &curriculum.semesters {
        let label = format!("semester {}", semester.semester_number);

        if semester.courses.is_empty() {
            report.errors.push(format!("{label} has no courses"));
            continue;
        }

        for course in &semester.courses {
            if !CREDIT_RANGE.contains(&course.credits) {
                report.errors.push(format!(
                    "course {} has {} credits (must be 1-6)",
                    course.code, course.credits
                ));
            }
            if !seen_codes.insert(course.code.as_str()) {
                report
                    .warnings
                    .push(format!("course code {} appears more than once", course.code));
            }
        }

        let course_total = semester.course_credit_total();
        if semester.total_credits != course_total {
            report.warnings.push(format!(
                "{label} declares {} credits but its courses sum to {course_total}",
                semester.total_credits
            ));
        }
    }

    let semester_total = curriculum.semester_credit_total();
    if curriculum.total_credits != semester_total {
        report.warnings.push(format!(
            "curriculum declares {} credits but semesters sum to {semester_total}",
            curriculum.total_credits
        ));
    }

    let semester_count = curriculum.semesters.len() as u32;
    if curriculum.duration_semesters != semester_count {
        report.warnings.push(format!(
            "curriculum declares {} semesters but contains {semester_count}",
            curriculum.duration_semesters
        ));
    }

    if curriculum.learning_outcomes.is_empty() {
        report
            .warnings
            .push("curriculum lists no learning outcomes".to_string());
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Course, Semester};

    fn course(code: &str, credits: u32) -> Course {
        Course {
            code: code.to_string(),
            name: format!("Course {code}"),
            credits,
            description: "A course.".to_string(),
            prerequisites: Vec::new(),
            category: "Core".to_string(),
        }
    }

    fn consistent_curriculum() -> Curriculum {
        Curriculum {
            title: "Test Programme".to_string(),
            level: "BTech".to_string(),
            duration_semesters: 2,
            total_credits: 14,
            overview: "Overview.".to_string(),
            learning_outcomes: vec!["Do things".to_string()],
            career_paths: Vec::new(),
            semesters: vec![
                Semester {
                    semester_number: 1,
                    total_credits: 7,
                    courses: vec![course("A1", 3), course("A2", 4)],
                },
                Semester {
                    semester_number: 2,
                    total_credits: 7,
                    courses: vec![course("B1", 3), course("B2", 4)],
                },
            ],
        }
    }

    #[test]
    fn consistent_curriculum_is_valid() {
        let report = validate(&consistent_curriculum());
        assert!(report.is_valid(), "{report:?}");
        assert!(report.warnings.is_empty(), "{report:?}");
    }

    #[test]
    fn out_of_range_credits_are_an_error() {
        let mut curriculum = consistent_curriculum();
        curriculum.semesters[0].courses[0].credits = 9;
        let report = validate(&curriculum);
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("must be 1-6"));
    }

    #[test]
    fn zero_credit_course_is_an_error() {
        let mut curriculum = consistent_curriculum();
        curriculum.semesters[0].courses[0].credits = 0;
        assert!(!validate(&curriculum).is_valid());
    }

    #[test]
    fn empty_curriculum_is_an_error() {
        let mut curriculum = consistent_curriculum();
        curriculum.semesters.clear();
        let report = validate(&curriculum);
        assert_eq!(report.errors, vec!["curriculum has no semesters"]);
    }

    #[test]
    fn credit_drift_is_a_warning_not_an_error() {
        let mut curriculum = consistent_curriculum();
        curriculum.total_credits = 99;
        curriculum.semesters[0].total_credits = 50;
        let report = validate(&curriculum);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 2, "{report:?}");
    }

    #[test]
    fn duplicate_codes_and_semester_count_drift_warn() {
        let mut curriculum = consistent_curriculum();
        curriculum.semesters[1].courses[0] = course("A1", 3);
        curriculum.duration_semesters = 5;
        let report = validate(&curriculum);
        assert!(report.is_valid());
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("appears more than once"))
        );
        assert!(report.warnings.iter().any(|w| w.contains("declares 5 semesters")));
    }

    #[test]
    fn missing_outcomes_warn() {
        let mut curriculum = consistent_curriculum();
        curriculum.learning_outcomes.clear();
        let report = validate(&curriculum);
        assert!(report.warnings.iter().any(|w| w.contains("learning outcomes")));
    }
}
