//! Prompt builders for the three generation operations.
//!
//! Plain string assembly; each prompt embeds the JSON schema the reply must
//! follow and closes with an instruction to return only the JSON payload.

use crate::types::{CareerPathRequest, CurriculumRequest, RecommendationRequest};

/// Build the academic curriculum prompt.
///
/// `context` carries knowledge-base snippets when retrieval produced any;
/// it is injected verbatim as reference material.
pub fn curriculum_prompt(request: &CurriculumRequest, context: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(
        "You are an expert academic curriculum designer. You create rigorous, \
well-sequenced degree curricula where prerequisites come before the courses \
that need them and skills build progressively across semesters."
            .to_string(),
    );

    parts.push(format!(
        "\nDesign a complete academic curriculum for **{}**.\n\n\
Education Level: {}\n\
Duration: {} semesters\n",
        request.skill, request.level, request.duration_semesters
    ));

    if let Some(specialization) = &request.specialization {
        parts.push(format!("Specialization: {specialization}"));
    }

    if let Some(focus_areas) = &request.focus_areas
        && !focus_areas.is_empty()
    {
        parts.push(format!("Focus Areas: {}", focus_areas.join(", ")));
    }

    if let Some(context) = context {
        parts.push(format!(
            "\nReference material from the curriculum knowledge base:\n{context}"
        ));
    }

    parts.push(
        r#"
The curriculum should be structured into semesters with:
- A balanced credit load per semester
- Prerequisites properly sequenced
- A mix of core, elective, and project courses
- Clear learning outcomes for the programme

IMPORTANT: Return ONLY valid JSON with no markdown formatting.

JSON Format:
{
  "title": "Curriculum title",
  "level": "Education level",
  "duration_semesters": number,
  "total_credits": number,
  "overview": "Overview of the programme",
  "learning_outcomes": ["outcome 1", "outcome 2", ...],
  "career_paths": ["role 1", "role 2", ...],
  "semesters": [
    {
      "semester_number": 1,
      "total_credits": number,
      "courses": [
        {
          "code": "COURSE101",
          "name": "Course Name",
          "credits": 3,
          "description": "Brief description",
          "prerequisites": [],
          "category": "Core/Elective/Project"
        }
      ]
    }
  ]
}"#
        .to_string(),
    );

    parts.push(format!(
        "CRITICAL REQUIREMENTS:\n\
1. Each course must have 1-6 credits only\n\
2. Semester total_credits must equal the sum of its course credits\n\
3. Curriculum total_credits must equal the sum over all semesters\n\
4. Produce exactly {} semesters\n\
5. Progress from fundamentals to advanced material\n\
6. Use proper JSON formatting (double quotes, no trailing commas)\n\n\
Return only the JSON object.",
        request.duration_semesters
    ));

    parts.join("\n")
}

/// Build the career-focused curriculum prompt.
pub fn career_path_prompt(request: &CareerPathRequest) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(
        "You are an expert career counselor and curriculum designer. \
You create personalized learning paths that align with specific career goals, considering \
the learner's background, timeline, and the current industry requirements."
            .to_string(),
    );

    parts.push(format!(
        "\nCreate a comprehensive learning curriculum for someone who wants to become a **{}**.\n\n\
Current Level: {}\n\
Available Time: {} months\n",
        request.target_role, request.current_level, request.duration_months
    ));

    if let Some(background) = &request.background {
        parts.push(format!("Background: {background}"));
    }

    if let Some(preferences) = &request.preferences
        && !preferences.is_empty()
    {
        parts.push(format!("Learning Preferences: {}", preferences.join(", ")));
    }

    parts.push(
        r#"
The curriculum should be structured into modules/semesters with:
- Industry-relevant courses and skills
- Practical projects that build a portfolio
- Prerequisites properly sequenced
- Clear milestones toward the career goal

IMPORTANT: Return ONLY valid JSON with no markdown formatting.

JSON Format:
{
  "title": "Career Path to [Role]",
  "level": "Professional Development",
  "duration_semesters": [calculated from months],
  "total_credits": [reasonable total],
  "overview": "Overview of the learning path and how it leads to the target role",
  "learning_outcomes": ["outcome 1", "outcome 2", ...],
  "career_paths": ["Primary role and related opportunities"],
  "semesters": [
    {
      "semester_number": 1,
      "total_credits": number,
      "courses": [
        {
          "code": "COURSE101",
          "name": "Course Name",
          "credits": 3,
          "description": "Brief description",
          "prerequisites": [],
          "category": "Core/Elective/Project"
        }
      ]
    }
  ]
}"#
        .to_string(),
    );

    parts.push(format!(
        "CRITICAL REQUIREMENTS:\n\
1. Each course must have 1-6 credits only\n\
2. Include practical projects and portfolio-building courses\n\
3. Align content with real job requirements for {}\n\
4. Progress from fundamentals to job-ready skills\n\
5. Include relevant tools, frameworks, and technologies\n\
6. Add capstone/portfolio project in final semester\n\
7. Use proper JSON formatting (double quotes, no trailing commas)\n\n\
Return only the JSON object.",
        request.target_role
    ));

    parts.join("\n")
}

/// Build the course recommendation prompt.
pub fn recommendation_prompt(request: &RecommendationRequest) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(
        "You are an academic advisor providing personalized course recommendations.".to_string(),
    );

    let completed = if request.completed_courses.is_empty() {
        "None (beginner)".to_string()
    } else {
        request.completed_courses.join(", ")
    };

    parts.push(format!(
        "\nBased on the following information your task is to recommend:\n\n\
Completed Courses: {}\n\
Interests: {}\n",
        completed,
        request.interests.join(", ")
    ));

    if let Some(career_goal) = &request.career_goal {
        parts.push(format!("Career Goal: {career_goal}"));
    }

    parts.push(
        r#"
Recommend 5-8 courses that would be most beneficial next. For each course provide:
- Course code and name
- Why it's recommended
- How it builds on completed courses
- How it aligns with interests/career goals

Return recommendations as a JSON array:
[
  {
    "code": "COURSE101",
    "name": "Course Name",
    "credits": 3,
    "reason": "Why this course is recommended",
    "category": "Core/Elective/Project"
  }
]

Use valid JSON format only."#
            .to_string(),
    );

    parts.join("\n")
}
