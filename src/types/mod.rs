//! Public types for the Curricula API.

mod curriculum;
mod request;

pub use curriculum::{
    CareerPathRequest, Course, CourseRecommendation, Curriculum, CurriculumRequest,
    RecommendationRequest, Semester,
};
pub use request::GenerationRequest;
