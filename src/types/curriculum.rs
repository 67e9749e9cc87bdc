//! Curriculum domain model.
//!
//! Field names match the wire names the prompts instruct the model to
//! produce, so extracted payloads deserialize directly.

use serde::{Deserialize, Serialize};

/// A single course within a semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, e.g. "CS101".
    pub code: String,
    /// Course title.
    pub name: String,
    /// Credit value (prompts require 1 through 6).
    pub credits: u32,
    /// Short description of the course content.
    pub description: String,
    /// Codes or names of prerequisite courses.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Category label, e.g. "Core", "Elective", "Project".
    pub category: String,
}

/// One semester (or module, for career paths) of a curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// 1-based position in the programme.
    pub semester_number: u32,
    /// Credit total the model assigned to this semester.
    pub total_credits: u32,
    /// Courses taught in this semester.
    pub courses: Vec<Course>,
}

impl Semester {
    /// Sum of the credits of the contained courses.
    pub fn course_credit_total(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }
}

/// A complete generated curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curriculum {
    /// Programme title.
    pub title: String,
    /// Education level, e.g. "BTech", "Masters", "Professional Development".
    pub level: String,
    /// Number of semesters the programme spans.
    pub duration_semesters: u32,
    /// Credit total the model assigned to the programme.
    pub total_credits: u32,
    /// Prose overview of the programme.
    pub overview: String,
    /// What a graduate of the programme can do.
    pub learning_outcomes: Vec<String>,
    /// Roles this programme prepares for.
    #[serde(default)]
    pub career_paths: Vec<String>,
    /// Semester breakdown.
    pub semesters: Vec<Semester>,
}

impl Curriculum {
    /// Sum of the per-semester credit totals.
    pub fn semester_credit_total(&self) -> u32 {
        self.semesters.iter().map(|s| s.total_credits).sum()
    }

    /// Total number of courses across all semesters.
    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(|s| s.courses.len()).sum()
    }
}

/// A single recommended course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    /// Course code.
    pub code: String,
    /// Course title.
    pub name: String,
    /// Credit value.
    pub credits: u32,
    /// Why this course is recommended.
    pub reason: String,
    /// Category label.
    pub category: String,
}

/// Request for an academic curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumRequest {
    /// Subject or skill area, e.g. "Machine Learning".
    pub skill: String,
    /// Education level, e.g. "BTech", "Masters".
    pub level: String,
    /// Programme length in semesters.
    pub duration_semesters: u32,
    /// Optional specialization within the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    /// Optional focus areas to emphasise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_areas: Option<Vec<String>>,
    /// Whether to ground the prompt with knowledge-base context.
    #[serde(default = "default_use_knowledge_base")]
    pub use_knowledge_base: bool,
}

fn default_use_knowledge_base() -> bool {
    true
}

impl CurriculumRequest {
    /// Create a request with the required fields.
    pub fn new(skill: impl Into<String>, level: impl Into<String>, duration_semesters: u32) -> Self {
        Self {
            skill: skill.into(),
            level: level.into(),
            duration_semesters,
            specialization: None,
            focus_areas: None,
            use_knowledge_base: true,
        }
    }

    /// Set the specialization.
    pub fn specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }

    /// Set the focus areas.
    pub fn focus_areas(mut self, focus_areas: Vec<String>) -> Self {
        self.focus_areas = Some(focus_areas);
        self
    }

    /// Enable or disable knowledge-base grounding.
    pub fn use_knowledge_base(mut self, enabled: bool) -> Self {
        self.use_knowledge_base = enabled;
        self
    }
}

/// Request for a career-oriented learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPathRequest {
    /// Desired role, e.g. "Machine Learning Engineer".
    pub target_role: String,
    /// Current education/experience level.
    pub current_level: String,
    /// Available timeframe in months.
    pub duration_months: u32,
    /// Educational or professional background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Learning preferences or constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<String>>,
}

impl CareerPathRequest {
    /// Create a request with the required fields.
    pub fn new(
        target_role: impl Into<String>,
        current_level: impl Into<String>,
        duration_months: u32,
    ) -> Self {
        Self {
            target_role: target_role.into(),
            current_level: current_level.into(),
            duration_months,
            background: None,
            preferences: None,
        }
    }

    /// Set the background description.
    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Set the learning preferences.
    pub fn preferences(mut self, preferences: Vec<String>) -> Self {
        self.preferences = Some(preferences);
        self
    }
}

/// Request for next-course recommendations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Courses already completed; empty means beginner.
    #[serde(default)]
    pub completed_courses: Vec<String>,
    /// Areas of interest.
    pub interests: Vec<String>,
    /// Optional career goal for alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_goal: Option<String>,
}

impl RecommendationRequest {
    /// Create a request from the learner's interests.
    pub fn new(interests: Vec<String>) -> Self {
        Self {
            completed_courses: Vec::new(),
            interests,
            career_goal: None,
        }
    }

    /// Set the completed courses.
    pub fn completed_courses(mut self, completed: Vec<String>) -> Self {
        self.completed_courses = completed;
        self
    }

    /// Set the career goal.
    pub fn career_goal(mut self, goal: impl Into<String>) -> Self {
        self.career_goal = Some(goal.into());
        self
    }
}
