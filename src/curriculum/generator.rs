//! Curriculum generation orchestration.
//!
//! [`CurriculumGenerator`] strings the pipeline together: retrieval (when a
//! knowledge base is configured), prompt assembly, the retry-wrapped
//! generation call, structured-output extraction, and mapping into the
//! domain model. One call at a time; nothing here fans out.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{mapper, prompts};
use crate::extract::{ExpectedShape, extract};
use crate::llm::{RetryConfig, RetryingGenerator, TextGenerator};
use crate::retrieval::ContextStore;
use crate::telemetry;
use crate::types::{
    CareerPathRequest, CourseRecommendation, Curriculum, CurriculumRequest, GenerationRequest,
    RecommendationRequest,
};
use crate::{CurriculaError, Result};

/// Sampling temperature for academic curricula.
const CURRICULUM_TEMPERATURE: f32 = 0.7;

/// Sampling temperature for career paths (tighter, the schema is stricter).
const CAREER_TEMPERATURE: f32 = 0.5;

/// Sampling temperature for course recommendations.
const RECOMMENDATION_TEMPERATURE: f32 = 0.6;

/// How many knowledge-base snippets to inject into a grounded prompt.
const CONTEXT_SNIPPETS: usize = 3;

/// Orchestrates prompt → generate → extract → map for the three
/// curriculum operations.
///
/// Built once with a backend (wrapped in retry) and an optional knowledge
/// base, then reused for every request.
pub struct CurriculumGenerator {
    generator: Arc<dyn TextGenerator>,
    store: Option<Arc<dyn ContextStore>>,
}

impl CurriculumGenerator {
    /// Create a builder for configuring a generator.
    pub fn builder() -> CurriculumGeneratorBuilder {
        CurriculumGeneratorBuilder::new()
    }

    /// Generate an academic curriculum.
    ///
    /// When a knowledge base is configured and the request asks for
    /// grounding, the prompt carries the most similar snippets. A lookup
    /// failure degrades to an ungrounded prompt rather than failing the
    /// call.
    #[instrument(skip(self, request), fields(skill = %request.skill))]
    pub async fn generate(&self, request: &CurriculumRequest) -> Result<Curriculum> {
        let context = self.lookup_context(request).await;
        let prompt = prompts::curriculum_prompt(request, context.as_deref());
        let value = self
            .generate_value(prompt, CURRICULUM_TEMPERATURE, ExpectedShape::Object, "curriculum")
            .await?;
        mapper::map_curriculum(value)
    }

    /// Generate a career-oriented learning path.
    #[instrument(skip(self, request), fields(target_role = %request.target_role))]
    pub async fn career_path(&self, request: &CareerPathRequest) -> Result<Curriculum> {
        let prompt = prompts::career_path_prompt(request);
        let value = self
            .generate_value(prompt, CAREER_TEMPERATURE, ExpectedShape::Object, "career")
            .await?;
        mapper::map_curriculum(value)
    }

    /// Recommend next courses for a learner.
    #[instrument(skip(self, request))]
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<CourseRecommendation>> {
        let prompt = prompts::recommendation_prompt(request);
        let value = self
            .generate_value(prompt, RECOMMENDATION_TEMPERATURE, ExpectedShape::Array, "recommend")
            .await?;
        mapper::map_recommendations(value)
    }

    /// One generation call plus extraction.
    ///
    /// An extraction failure surfaces directly; it never re-invokes the
    /// backend.
    async fn generate_value(
        &self,
        prompt: String,
        temperature: f32,
        shape: ExpectedShape,
        operation: &'static str,
    ) -> Result<Value> {
        let request = GenerationRequest::new(prompt).temperature(temperature);
        let raw = self.generator.generate(&request).await?;
        debug!(operation, reply_len = raw.len(), "received model reply");
        match extract(&raw, shape) {
            Ok(value) => Ok(value),
            Err(e) => {
                metrics::counter!(telemetry::EXTRACTION_FAILURES_TOTAL,
                    "operation" => operation,
                    "reason" => e.reason(),
                )
                .increment(1);
                Err(e.into())
            }
        }
    }

    /// Fetch knowledge-base snippets for a curriculum request.
    async fn lookup_context(&self, request: &CurriculumRequest) -> Option<String> {
        if !request.use_knowledge_base {
            return None;
        }
        let store = self.store.as_ref()?;

        let query = match &request.specialization {
            Some(specialization) => format!("{} {specialization}", request.skill),
            None => request.skill.clone(),
        };
        match store.similar(&query, CONTEXT_SNIPPETS).await {
            Ok(snippets) if !snippets.is_empty() => Some(
                snippets
                    .iter()
                    .map(|s| s.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            ),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "knowledge base lookup failed, generating without context");
                None
            }
        }
    }
}

/// Builder for configuring [`CurriculumGenerator`] instances.
pub struct CurriculumGeneratorBuilder {
    generator: Option<Arc<dyn TextGenerator>>,
    store: Option<Arc<dyn ContextStore>>,
    retry: RetryConfig,
}

impl CurriculumGeneratorBuilder {
    pub fn new() -> Self {
        Self {
            generator: None,
            store: None,
            retry: RetryConfig::default(),
        }
    }

    /// Set the generation backend (required).
    pub fn generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Set the knowledge base used to ground curriculum prompts.
    pub fn context_store(mut self, store: Arc<dyn ContextStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the retry policy applied around the backend.
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry = config;
        self
    }

    /// Build the generator, wrapping the backend with the retry policy.
    pub fn build(self) -> Result<CurriculumGenerator> {
        let generator = self.generator.ok_or_else(|| {
            CurriculaError::Configuration("no text generator configured".to_string())
        })?;
        Ok(CurriculumGenerator {
            generator: Arc::new(RetryingGenerator::new(generator, self.retry)),
            store: self.store,
        })
    }
}

impl Default for CurriculumGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_generator_is_a_configuration_error() {
        let result = CurriculumGenerator::builder().build();
        assert!(matches!(result, Err(CurriculaError::Configuration(_))));
    }
}
