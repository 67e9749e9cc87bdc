//! Mapping extracted JSON values into the curriculum model.

use serde_json::Value;

use crate::types::{CourseRecommendation, Curriculum};
use crate::{CurriculaError, Result};

/// Convert an extracted object into a [`Curriculum`].
pub fn map_curriculum(value: Value) -> Result<Curriculum> {
    serde_json::from_value(value)
        .map_err(|e| CurriculaError::Payload(format!("curriculum payload: {e}")))
}

/// Convert an extracted array into course recommendations.
pub fn map_recommendations(value: Value) -> Result<Vec<CourseRecommendation>> {
    serde_json::from_value(value)
        .map_err(|e| CurriculaError::Payload(format!("recommendation payload: {e}")))
}
