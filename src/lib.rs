//! Curricula - Curriculum generation pipeline backed by hosted LLM APIs
//!
//! This crate turns free-form model replies into validated curriculum
//! documents. It assembles prompts for curriculum, career-path and
//! course-recommendation requests, calls a hosted model with exponential
//! backoff, recovers the JSON payload from whatever prose surrounds it,
//! and maps the result into typed domain records.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use curricula::llm::GeminiClient;
//! use curricula::{CurriculumGenerator, CurriculumRequest, render};
//!
//! #[tokio::main]
//! async fn main() -> curricula::Result<()> {
//!     let client = GeminiClient::from_env("models/gemini-2.5-flash")?;
//!     let generator = CurriculumGenerator::builder()
//!         .generator(Arc::new(client))
//!         .build()?;
//!
//!     let request = CurriculumRequest::new("Computer Science", "Undergraduate", 8);
//!     let curriculum = generator.generate(&request).await?;
//!     println!("{}", render::curriculum_markdown(&curriculum));
//!     Ok(())
//! }
//! ```
//!
//! # Grounded generation
//!
//! Curriculum prompts can carry reference material from a knowledge base.
//! Point a [`retrieval::MemoryStore`] at a directory of notes and hand it
//! to the builder:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use curricula::CurriculumGenerator;
//! use curricula::llm::GeminiClient;
//! use curricula::retrieval::MemoryStore;
//!
//! # fn main() -> curricula::Result<()> {
//! let store = MemoryStore::from_dir("./knowledge")?;
//! let generator = CurriculumGenerator::builder()
//!     .generator(Arc::new(GeminiClient::from_env("models/gemini-2.5-flash")?))
//!     .context_store(Arc::new(store))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "cli")]
pub mod config;
pub mod curriculum;
pub mod error;
pub mod extract;
pub mod llm;
pub mod render;
pub mod retrieval;
pub mod telemetry;
pub mod types;
pub mod version;

// Re-export main types at crate root
pub use curriculum::{CurriculumGenerator, CurriculumGeneratorBuilder, ValidationReport, validate};
pub use error::{CurriculaError, Result};
pub use extract::{ExpectedShape, ExtractError, extract};
pub use llm::{RetryConfig, RetryingGenerator, TextGenerator};
pub use version::PKG_VERSION;

// Re-export all domain types
pub use types::{
    CareerPathRequest, Course, CourseRecommendation, Curriculum, CurriculumRequest,
    GenerationRequest, RecommendationRequest, Semester,
};
