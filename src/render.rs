//! Markdown rendering of generated curricula and recommendations.

use crate::types::{CourseRecommendation, Curriculum};

/// Render a curriculum as a Markdown document.
pub fn curriculum_markdown(curriculum: &Curriculum) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", curriculum.title));
    out.push_str(&format!(
        "**Level:** {} | **Duration:** {} Semesters | **Total Credits:** {}\n\n",
        curriculum.level, curriculum.duration_semesters, curriculum.total_credits
    ));
    out.push_str(&format!("{}\n\n", curriculum.overview));

    out.push_str("## Semester Details\n\n");
    for semester in &curriculum.semesters {
        out.push_str(&format!(
            "### Semester {} ({} Credits)\n\n",
            semester.semester_number, semester.total_credits
        ));
        for course in &semester.courses {
            out.push_str(&format!(
                "- **{}** - {} ({} credits)\n",
                course.code, course.name, course.credits
            ));
        }
        out.push('\n');
    }

    push_list(&mut out, "Learning Outcomes", &curriculum.learning_outcomes);
    push_list(&mut out, "Career Paths", &curriculum.career_paths);
    out
}

/// Render a career path as a Markdown document.
///
/// Career paths reuse the curriculum model but read differently: semesters
/// are study modules, duration is in months, and credits approximate
/// learning hours.
pub fn career_path_markdown(curriculum: &Curriculum) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", curriculum.title));
    out.push_str(&format!(
        "**Duration:** {} months | **Total Learning Hours:** {}+\n\n",
        curriculum.duration_semesters,
        curriculum.total_credits * 10
    ));
    out.push_str(&format!("{}\n\n", curriculum.overview));

    out.push_str("## Learning Plan\n\n");
    for module in &curriculum.semesters {
        out.push_str(&format!("### Module {}\n\n", module.semester_number));
        for course in &module.courses {
            out.push_str(&format!("- **{}** ({})\n", course.name, course.category));
            out.push_str(&format!("  {}\n", course.description));
        }
        out.push('\n');
    }

    push_list(&mut out, "Learning Outcomes", &curriculum.learning_outcomes);
    push_list(&mut out, "Career Opportunities", &curriculum.career_paths);
    out
}

/// Render course recommendations as a Markdown document.
pub fn recommendations_markdown(recommendations: &[CourseRecommendation]) -> String {
    let mut out = String::from("# Recommended Courses\n\n");
    for rec in recommendations {
        out.push_str(&format!("## {}\n\n", rec.name));
        out.push_str(&format!("**Code:** {}\n", rec.code));
        out.push_str(&format!("**Credits:** {}\n", rec.credits));
        out.push_str(&format!("**Category:** {}\n", rec.category));
        out.push_str(&format!("**Why recommended:** {}\n\n", rec.reason));
    }
    out
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("## {heading}\n\n"));
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
    out.push('\n');
}
